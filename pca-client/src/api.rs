//! High-level dashboard API
//!
//! Two failure policies coexist. Reads that feed a display list come
//! in pairs: a `try_` method that surfaces the failure as a result,
//! and a compatibility method that logs and swallows it into the
//! empty/default shape the views expect. `generate_planning` is the
//! one mutating call and always propagates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared::{
    DashboardStats, Employee, EmployeeRecord, GeneratePlanningRequest, Order, PlanningConfig,
    PlanningEntry,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpTransport, NetworkHttpClient};

/// Endpoints tried, in order, for planning retrieval.
///
/// The backend's planning contract is mid-migration; both endpoints
/// are equally authoritative and the first to answer wins.
pub const PLANNING_ENDPOINTS: &[&str] = &["/api/planning", "/api/planning/view-simple"];

/// Start of the current grading season.
fn season_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid cutoff date")
}

/// Backend health as observed by [`DashboardClient::health_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendHealth {
    pub healthy: bool,
    /// HTTP status of the probe; `None` when the request never got a
    /// response.
    pub status: Option<u16>,
}

/// Dashboard-facing API client.
///
/// Generic over the transport so the same methods run against the
/// network backend or an in-process router.
#[derive(Debug, Clone)]
pub struct DashboardClient<T = NetworkHttpClient> {
    transport: T,
}

impl DashboardClient<NetworkHttpClient> {
    /// Build a network-backed client from configuration
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_transport(config.build_http_client()?))
    }
}

impl<T: HttpTransport> DashboardClient<T> {
    /// Build a client over an existing transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========== Employees ==========

    /// Fetches the employee list and maps it into view models,
    /// surfacing failure.
    pub async fn try_employees(&self) -> ClientResult<Vec<Employee>> {
        let value = self.transport.get_json("/api/employees").await?;
        let records: Vec<EmployeeRecord> = serde_json::from_value(value)?;
        let employees: Vec<Employee> = records.into_iter().map(Employee::from_record).collect();
        tracing::debug!("Fetched {} employees", employees.len());
        Ok(employees)
    }

    /// Employee list for display; failures are logged and swallowed
    /// into an empty list.
    pub async fn employees(&self) -> Vec<Employee> {
        match self.try_employees().await {
            Ok(employees) => employees,
            Err(e) => {
                tracing::warn!("Employee fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Employees flagged both active and available, surfacing failure.
    pub async fn try_active_employees(&self) -> ClientResult<Vec<Employee>> {
        let employees = self.try_employees().await?;
        Ok(employees
            .into_iter()
            .filter(|e| e.is_schedulable())
            .collect())
    }

    /// Active and available employees with their current load;
    /// failures swallowed into an empty list.
    pub async fn active_employees_with_load(&self) -> Vec<Employee> {
        match self.try_active_employees().await {
            Ok(employees) => {
                tracing::debug!("{} active employees", employees.len());
                employees
            }
            Err(e) => {
                tracing::warn!("Active employee fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    // ========== Orders ==========

    /// Fetches the order list, surfacing failure. Pure pass-through
    /// mapping, no defaulting.
    pub async fn try_orders(&self) -> ClientResult<Vec<Order>> {
        let value = self.transport.get_json("/api/orders").await?;
        let orders: Vec<Order> = serde_json::from_value(value)?;
        tracing::debug!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    /// Order list for display; failures swallowed into an empty list.
    pub async fn orders(&self) -> Vec<Order> {
        match self.try_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::warn!("Order fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Orders whose creation (or order) date is on or after `cutoff`,
    /// surfacing failure. Undated orders are excluded.
    pub async fn try_orders_since(&self, cutoff: NaiveDate) -> ClientResult<Vec<Order>> {
        let orders = self.try_orders().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.effective_date().is_some_and(|d| d >= cutoff))
            .collect())
    }

    /// Orders on or after `cutoff`; failures swallowed into an empty
    /// list.
    pub async fn orders_since(&self, cutoff: NaiveDate) -> Vec<Order> {
        match self.try_orders_since(cutoff).await {
            Ok(orders) => {
                tracing::debug!("{} orders since {}", orders.len(), cutoff);
                orders
            }
            Err(e) => {
                tracing::warn!("Order fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Orders from the current grading season (June 2025 onwards).
    pub async fn orders_since_june_2025(&self) -> Vec<Order> {
        self.orders_since(season_cutoff()).await
    }

    // ========== Planning ==========

    /// Tries the planning endpoints sequentially and returns the
    /// first successful response, coerced to a sequence. Errs with
    /// [`ClientError::PlanningUnavailable`] when every candidate
    /// fails.
    pub async fn try_planning(&self) -> ClientResult<Vec<PlanningEntry>> {
        for endpoint in PLANNING_ENDPOINTS {
            match self.transport.get_json(endpoint).await {
                Ok(Value::Array(entries)) => {
                    tracing::debug!("Planning retrieved via {}", endpoint);
                    return Ok(entries);
                }
                Ok(_) => {
                    tracing::debug!("Planning endpoint {} returned a non-sequence", endpoint);
                    return Ok(Vec::new());
                }
                Err(e) => {
                    tracing::debug!("Planning endpoint {} failed: {}", endpoint, e);
                }
            }
        }

        Err(ClientError::PlanningUnavailable)
    }

    /// Planning entries for display; failures swallowed into an
    /// empty list.
    pub async fn planning(&self) -> Vec<PlanningEntry> {
        match self.try_planning().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Planning fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Triggers planning generation on the backend, merging the
    /// caller configuration over the defaults. The one mutating call;
    /// failures always propagate.
    pub async fn generate_planning(&self, config: PlanningConfig) -> ClientResult<Value> {
        let request = GeneratePlanningRequest::from_config(config);
        tracing::info!(
            "Generating planning from {} ({} min/card, clean_first={})",
            request.start_date,
            request.time_per_card,
            request.clean_first
        );

        let result = self
            .transport
            .post_json("/api/planning/generate", &request)
            .await?;
        tracing::info!("Planning generation accepted");
        Ok(result)
    }

    // ========== Stats ==========

    /// Fetches the three collections concurrently and derives the
    /// aggregates, surfacing failure of any fetch.
    pub async fn try_stats(&self) -> ClientResult<DashboardStats> {
        let (employees, orders, planning) = tokio::try_join!(
            self.try_employees(),
            self.try_orders(),
            self.try_planning()
        )?;

        Ok(DashboardStats::compute(&employees, &orders, &planning))
    }

    /// Dashboard aggregates; a failed fetch degrades to the fixed
    /// zero-count shape instead of propagating.
    pub async fn stats(&self) -> DashboardStats {
        match self.try_stats().await {
            Ok(stats) => {
                tracing::debug!(
                    "Stats: {} employees, {} orders, {} planning entries",
                    stats.employees_count,
                    stats.orders_count,
                    stats.planning_count
                );
                stats
            }
            Err(e) => {
                tracing::warn!("Stats computation failed: {}", e);
                DashboardStats::degraded(e.to_string())
            }
        }
    }

    // ========== Health ==========

    /// Probes the employees endpoint and reports health from the
    /// HTTP status alone, with no body inspection. Never fails; an
    /// unreachable backend is an unhealthy result.
    pub async fn health_check(&self) -> BackendHealth {
        match self.transport.probe("/api/employees").await {
            Ok(status) => {
                let healthy = (200..300).contains(&status);
                if healthy {
                    tracing::debug!("Backend health: OK");
                } else {
                    tracing::warn!("Backend health: HTTP {}", status);
                }
                BackendHealth {
                    healthy,
                    status: Some(status),
                }
            }
            Err(e) => {
                tracing::warn!("Backend health check failed: {}", e);
                BackendHealth {
                    healthy: false,
                    status: None,
                }
            }
        }
    }
}
