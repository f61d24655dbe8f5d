// pca-client/examples/dashboard.rs
// Prints backend health and the derived dashboard statistics.

use pca_client::{ClientConfig, DashboardClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let client = DashboardClient::connect(&ClientConfig::new(&base_url))?;

    let health = client.health_check().await;
    println!(
        "Backend {}: healthy={} status={:?}",
        base_url, health.healthy, health.status
    );

    let stats = client.stats().await;
    if stats.error {
        println!(
            "Stats degraded: {}",
            stats.message.as_deref().unwrap_or("unknown failure")
        );
        return Ok(());
    }

    println!(
        "Employees: {} ({} active)",
        stats.employees_count, stats.active_employees
    );
    println!(
        "Orders: {} | Planning entries: {}",
        stats.orders_count, stats.planning_count
    );
    println!("By priority: {:?}", stats.orders_by_priority);
    println!("By status:   {:?}", stats.orders_by_status);
    println!(
        "Totals: {} cards, {} estimated minutes, {:.2} revenue",
        stats.total_cards, stats.total_estimated_minutes, stats.total_price
    );

    Ok(())
}
