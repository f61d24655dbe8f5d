//! PCA Client - HTTP client for the card-grading backend
//!
//! Fetches employees, orders and planning entries over the REST API,
//! normalizes them into frontend-stable view models and derives
//! dashboard statistics client-side. Also carries the static page
//! routing table of the dashboard.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
pub mod routes;

pub use api::{BackendHealth, DashboardClient, PLANNING_ENDPOINTS};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpTransport, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
pub use routes::{Page, ROUTES};

// Re-export shared types for convenience
pub use shared::{
    DashboardStats, Employee, Order, OrderPriority, OrderStatus, PlanningConfig, PlanningEntry,
};
