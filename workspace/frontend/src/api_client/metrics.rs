use common::{ApiError, DashboardMetrics, DateRange};

use super::ApiClient;

pub async fn get_dashboard_metrics(
    client: &ApiClient,
    range: &DateRange,
) -> Result<DashboardMetrics, ApiError> {
    log::trace!(
        "Fetching dashboard metrics for {} .. {}",
        range.start_iso(),
        range.end_iso()
    );
    let result = client
        .get_json::<DashboardMetrics>("/api/metrics/dashboard", &range.query_params())
        .await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch metrics: {}", e);
    }

    result
}
