//! Shared types for the PCA dashboard client
//!
//! Read-side view models mapped from backend JSON, the planning
//! generation request types, and the pure statistics derivation.
//! No I/O lives in this crate.

pub mod employee;
pub mod order;
pub mod planning;
pub mod stats;

// Re-exports
pub use employee::{Employee, EmployeeRecord};
pub use order::{Order, OrderPriority, OrderStatus};
pub use planning::{GeneratePlanningRequest, PlanningConfig, PlanningEntry};
pub use stats::{DashboardStats, OrdersByPriority, OrdersByStatus};
