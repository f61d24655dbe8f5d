//! Order view model
//!
//! Orders are a pure pass-through shape: no defaulting, every field
//! optional except where the backend guarantees it. Only the date
//! accessor does any interpretation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Order priority tiers, highest first.
///
/// Wire names are the backend's, `FAST+` included. A tier the backend
/// adds later decodes to [`OrderPriority::Unknown`] rather than
/// failing the whole fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPriority {
    Excelsior,
    FastPlus,
    Fast,
    Classic,
    Unknown,
}

impl OrderPriority {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "EXCELSIOR" => Self::Excelsior,
            "FAST+" => Self::FastPlus,
            "FAST" => Self::Fast,
            "CLASSIC" => Self::Classic,
            _ => Self::Unknown,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Excelsior => "EXCELSIOR",
            Self::FastPlus => "FAST+",
            Self::Fast => "FAST",
            Self::Classic => "CLASSIC",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Serialize for OrderPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for OrderPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

/// Order lifecycle states, keyed by the backend's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    /// Decodes the backend status code (1, 2 or 3).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Pending),
            2 => Some(Self::InProgress),
            3 => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Pending => 1,
            Self::InProgress => 2,
            Self::Completed => 3,
        }
    }
}

/// Order view model, mirroring the backend record field for field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: Option<String>,
    pub order_number: Option<String>,
    pub reference: Option<String>,
    pub card_count: Option<u32>,
    pub total_price: Option<f64>,
    pub priority: Option<OrderPriority>,
    pub status: Option<i64>,
    pub status_text: Option<String>,
    pub estimated_time_minutes: Option<u32>,
    pub estimated_time_hours: Option<f64>,
    pub creation_date: Option<String>,
    pub order_date: Option<String>,
    pub deadline: Option<String>,
    pub quality_indicator: Option<serde_json::Value>,
    pub minimum_grade: Option<f64>,
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    pub unsealing: Option<bool>,
}

impl Order {
    /// Decoded lifecycle state, if the status code is one we know.
    pub fn status_kind(&self) -> Option<OrderStatus> {
        self.status.and_then(OrderStatus::from_code)
    }

    /// Creation date falling back to order date, parsed from the ISO
    /// strings the backend emits (full datetime or bare date).
    pub fn effective_date(&self) -> Option<NaiveDate> {
        let raw = self
            .creation_date
            .as_deref()
            .or(self.order_date.as_deref())?;
        parse_backend_date(raw)
    }
}

fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt.date());
    }
    raw.get(..10)?.parse::<NaiveDate>().ok()
}
