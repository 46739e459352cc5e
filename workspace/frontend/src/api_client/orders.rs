use common::{ApiError, OrdersQuery, OrdersResponse};

use super::ApiClient;

pub async fn get_orders(client: &ApiClient, query: &OrdersQuery) -> Result<OrdersResponse, ApiError> {
    log::trace!("Fetching orders: {:?}", query);
    let result = client
        .get_json::<OrdersResponse>("/api/orders", &query.query_params())
        .await;

    match &result {
        Ok(response) => log::debug!(
            "Fetched {} orders ({} matching)",
            response.orders.len(),
            response.filtered_count
        ),
        Err(e) => log::error!("Failed to fetch orders: {}", e),
    }

    result
}
