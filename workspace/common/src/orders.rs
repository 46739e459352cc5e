use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;

pub const DEFAULT_ORDERS_PAGE_SIZE: u64 = 10;

/// Filters of `GET /api/orders`. Unset filters are left out of the query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrdersQuery {
    pub range: Option<DateRange>,
    pub state: Option<String>,
    pub item_sku: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl OrdersQuery {
    /// Query for the 1-based `page` of `page_size` orders inside `range`.
    pub fn page(range: DateRange, page: u64, page_size: u64) -> Self {
        Self {
            range: Some(range),
            limit: Some(page_size),
            offset: Some(crate::pagination::offset_for_page(page, page_size)),
            ..Self::default()
        }
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.range.map(|r| r.query_params()).unwrap_or_default();
        push_filter(&mut params, "state", self.state.as_deref());
        push_filter(&mut params, "item_sku", self.item_sku.as_deref());
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        params
    }
}

/// Filters of `GET /api/export/excel`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportQuery {
    pub range: Option<DateRange>,
    pub state: Option<String>,
    pub item_sku: Option<String>,
}

impl ExportQuery {
    pub fn for_range(range: DateRange) -> Self {
        Self {
            range: Some(range),
            ..Self::default()
        }
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.range.map(|r| r.query_params()).unwrap_or_default();
        push_filter(&mut params, "state", self.state.as_deref());
        push_filter(&mut params, "item_sku", self.item_sku.as_deref());
        params
    }
}

fn push_filter(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

/// Name the downloaded spreadsheet is saved under.
pub fn export_file_name(day: NaiveDate) -> String {
    format!("order_analytics_{}.xlsx", day.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    /// Timestamp exactly as the backend sent it.
    pub order_date: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub item_sku: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub unit_price_usd: Decimal,
    #[serde(default)]
    pub order_total: Decimal,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub order_day: Option<NaiveDate>,
}

impl Order {
    /// `YYYY-MM-DD` for the table; prefers the backend's `order_day`.
    pub fn display_date(&self) -> String {
        match self.order_day {
            Some(day) => day.format("%Y-%m-%d").to_string(),
            None => self
                .order_date
                .get(..10)
                .unwrap_or(&self.order_date)
                .to_string(),
        }
    }

    pub fn location(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub filtered_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn range() -> DateRange {
        DateRange::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_page_query_params() {
        let query = OrdersQuery::page(range(), 3, 10);
        let params = query.query_params();
        assert_eq!(
            params,
            vec![
                ("start_date", "2024-01-01T00:00:00.000Z".to_string()),
                ("end_date", "2024-01-31T00:00:00.000Z".to_string()),
                ("limit", "10".to_string()),
                ("offset", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_filters_are_skipped() {
        let query = OrdersQuery {
            state: Some("  ".to_string()),
            item_sku: Some(" SKU-9 ".to_string()),
            ..OrdersQuery::default()
        };
        assert_eq!(query.query_params(), vec![("item_sku", "SKU-9".to_string())]);
    }

    #[test]
    fn test_export_query() {
        let query = ExportQuery {
            state: Some("CA".to_string()),
            ..ExportQuery::for_range(range())
        };
        let keys: Vec<&str> = query.query_params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["start_date", "end_date", "state"]);
    }

    #[test]
    fn test_export_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(day), "order_analytics_2024-03-09.xlsx");
    }

    #[test]
    fn test_decode_orders_response() {
        let body = r#"{
            "orders": [{
                "order_id": "A-100",
                "order_date": "2024-01-05T14:22:00",
                "customer_name": "Sam Lee",
                "address_line": "1 Main St, Springfield, IL 62701",
                "item_sku": "SKU-1",
                "item_name": "Widget",
                "quantity": 2,
                "unit_price_usd": "9.99",
                "order_total": "19.98",
                "city": "Springfield",
                "state": "IL",
                "order_day": "2024-01-05",
                "weekday": 4
            }],
            "total_count": 250,
            "filtered_count": 1
        }"#;
        let response: OrdersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 250);
        let order = &response.orders[0];
        assert_eq!(order.display_date(), "2024-01-05");
        assert_eq!(order.location(), "Springfield, IL");
    }

    #[test]
    fn test_display_date_without_order_day() {
        let order: Order = serde_json::from_str(
            r#"{"order_id": "B-1", "order_date": "2024-02-10T08:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(order.display_date(), "2024-02-10");
        assert_eq!(order.location(), "");
    }
}
