//! Planning generation request types
//!
//! Planning entries themselves are backend-owned and opaque to the
//! client; only the generation request has a shape worth typing.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A planning entry as returned by the backend. The client makes no
/// promise about its contents beyond being JSON.
pub type PlanningEntry = Value;

/// Default minutes of grading time per card.
pub const DEFAULT_TIME_PER_CARD: u32 = 3;

/// Caller overrides for planning generation.
///
/// Unset fields fall back to the defaults applied by
/// [`GeneratePlanningRequest::from_config`]; unknown keys are carried
/// through to the backend untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanningConfig {
    pub start_date: Option<NaiveDate>,
    pub time_per_card: Option<u32>,
    pub clean_first: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlanningConfig {
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_time_per_card(mut self, minutes: u32) -> Self {
        self.time_per_card = Some(minutes);
        self
    }

    pub fn with_clean_first(mut self, clean: bool) -> Self {
        self.clean_first = Some(clean);
        self
    }
}

/// Body POSTed to `/api/planning/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanningRequest {
    pub start_date: NaiveDate,
    pub time_per_card: u32,
    pub clean_first: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GeneratePlanningRequest {
    /// Merges caller overrides over the defaults: today's date,
    /// [`DEFAULT_TIME_PER_CARD`] minutes per card, no clean-first.
    pub fn from_config(config: PlanningConfig) -> Self {
        Self {
            start_date: config
                .start_date
                .unwrap_or_else(|| Local::now().date_naive()),
            time_per_card: config.time_per_card.unwrap_or(DEFAULT_TIME_PER_CARD),
            clean_first: config.clean_first.unwrap_or(false),
            extra: config.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_fields() {
        let request = GeneratePlanningRequest::from_config(PlanningConfig::default());

        assert_eq!(request.start_date, Local::now().date_naive());
        assert_eq!(request.time_per_card, DEFAULT_TIME_PER_CARD);
        assert!(!request.clean_first);
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let config = PlanningConfig::default()
            .with_start_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .with_time_per_card(5);
        let request = GeneratePlanningRequest::from_config(config);

        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(request.time_per_card, 5);
        assert!(!request.clean_first);
    }

    #[test]
    fn test_extra_keys_survive_merge_and_serialization() {
        let config: PlanningConfig =
            serde_json::from_str(r#"{"timePerCard":5,"algorithm":"greedy"}"#).unwrap();
        let request = GeneratePlanningRequest::from_config(config);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["timePerCard"], 5);
        assert_eq!(body["cleanFirst"], false);
        assert_eq!(body["algorithm"], "greedy");
        assert!(body["startDate"].is_string());
    }
}
