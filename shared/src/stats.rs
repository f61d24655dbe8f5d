//! Dashboard statistics derived client-side
//!
//! Recomputed on every call from the fetched collections, never
//! persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::order::{Order, OrderPriority, OrderStatus};
use crate::planning::PlanningEntry;

/// Order counts per priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OrdersByPriority {
    pub excelsior: usize,
    pub fast_plus: usize,
    pub fast: usize,
    pub classic: usize,
}

/// Order counts per lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OrdersByStatus {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Aggregate dashboard figures.
///
/// The degraded shape (all counts zero, `error` set) stands in when
/// the fetch stage fails, so callers always get the same structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub employees_count: usize,
    pub active_employees: usize,
    pub orders_count: usize,
    pub planning_count: usize,
    pub orders_by_priority: OrdersByPriority,
    pub orders_by_status: OrdersByStatus,
    pub total_estimated_minutes: u64,
    pub total_cards: u64,
    pub total_price: f64,
    pub last_update: DateTime<Utc>,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DashboardStats {
    /// Derives the aggregates from the three collections.
    pub fn compute(
        employees: &[Employee],
        orders: &[Order],
        planning: &[PlanningEntry],
    ) -> Self {
        let mut by_priority = OrdersByPriority::default();
        let mut by_status = OrdersByStatus::default();

        for order in orders {
            match order.priority {
                Some(OrderPriority::Excelsior) => by_priority.excelsior += 1,
                Some(OrderPriority::FastPlus) => by_priority.fast_plus += 1,
                Some(OrderPriority::Fast) => by_priority.fast += 1,
                Some(OrderPriority::Classic) => by_priority.classic += 1,
                Some(OrderPriority::Unknown) | None => {}
            }
            match order.status_kind() {
                Some(OrderStatus::Pending) => by_status.pending += 1,
                Some(OrderStatus::InProgress) => by_status.in_progress += 1,
                Some(OrderStatus::Completed) => by_status.completed += 1,
                None => {}
            }
        }

        Self {
            employees_count: employees.len(),
            active_employees: employees.iter().filter(|e| e.active).count(),
            orders_count: orders.len(),
            planning_count: planning.len(),
            orders_by_priority: by_priority,
            orders_by_status: by_status,
            total_estimated_minutes: orders
                .iter()
                .filter_map(|o| o.estimated_time_minutes)
                .map(u64::from)
                .sum(),
            total_cards: orders
                .iter()
                .filter_map(|o| o.card_count)
                .map(u64::from)
                .sum(),
            total_price: orders.iter().filter_map(|o| o.total_price).sum(),
            last_update: Utc::now(),
            error: false,
            message: None,
        }
    }

    /// Fixed zero-count shape returned when the fetch stage fails.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            employees_count: 0,
            active_employees: 0,
            orders_count: 0,
            planning_count: 0,
            orders_by_priority: OrdersByPriority::default(),
            orders_by_status: OrdersByStatus::default(),
            total_estimated_minutes: 0,
            total_cards: 0,
            total_price: 0.0,
            last_update: Utc::now(),
            error: true,
            message: Some(message.into()),
        }
    }
}
