//! Schema of `GET /api/metrics/dashboard`.
//!
//! Missing or `null` counters decode as zero so a sparse payload still renders;
//! a payload of the wrong shape fails to decode instead of leaking undefined
//! values into the widgets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesMetrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_revenue: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items_sold: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_order_value: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unique_customers: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unique_states: u64,
}

/// One day of the revenue series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items_sold: u64,
}

/// One entry of the ranked top-products list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetric {
    #[serde(default)]
    pub item_sku: String,
    pub item_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_sold: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percentage_of_total: f64,
}

/// Revenue attributed to one location, normally a US state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicMetric {
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percentage_of_total: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Metrics snapshot for one date range. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_metrics: SalesMetrics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_series: Vec<TimeSeriesPoint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_products: Vec<ProductMetric>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub geographic_distribution: Vec<GeographicMetric>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_decode_full_payload() {
        let body = r#"{
            "sales_metrics": {
                "total_revenue": "15234.50",
                "total_orders": 120,
                "total_items_sold": 340,
                "average_order_value": "126.95",
                "unique_customers": 87,
                "unique_states": 12,
                "date_range": {"start": "2024-01-01", "end": "2024-01-31"}
            },
            "top_products": [
                {"item_sku": "SKU-1", "item_name": "Widget", "quantity_sold": 40,
                 "revenue": "2000.00", "order_count": 30, "percentage_of_total": 13.1}
            ],
            "time_series": [
                {"date": "2024-01-02", "revenue": "510.25", "order_count": 4, "items_sold": 9}
            ],
            "geographic_distribution": [
                {"location": "CA", "location_type": "state", "revenue": "5100.00",
                 "order_count": 41, "percentage_of_total": 33.5, "latitude": null}
            ]
        }"#;

        let metrics: DashboardMetrics = serde_json::from_str(body).unwrap();
        assert_eq!(
            metrics.sales_metrics.total_revenue,
            Decimal::from_str("15234.50").unwrap()
        );
        assert_eq!(metrics.sales_metrics.total_orders, 120);
        assert_eq!(metrics.sales_metrics.unique_customers, 87);
        assert_eq!(metrics.top_products[0].item_name, "Widget");
        assert_eq!(
            metrics.time_series[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        let california = &metrics.geographic_distribution[0];
        assert_eq!(california.location, "CA");
        assert_eq!(california.revenue, Decimal::from_str("5100.00").unwrap());
        assert_eq!(california.order_count, 41);
        assert_eq!(california.latitude, None);
    }

    #[test]
    fn test_missing_and_null_counters_default_to_zero() {
        let body = r#"{"sales_metrics": {"total_revenue": null, "total_orders": 3}}"#;
        let metrics: DashboardMetrics = serde_json::from_str(body).unwrap();
        assert_eq!(metrics.sales_metrics.total_revenue, Decimal::ZERO);
        assert_eq!(metrics.sales_metrics.total_orders, 3);
        assert_eq!(metrics.sales_metrics.total_items_sold, 0);
        assert!(metrics.time_series.is_empty());

        let empty: DashboardMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DashboardMetrics::default());

        let sparse: DashboardMetrics =
            serde_json::from_str(r#"{"geographic_distribution": [{"location": "TX", "revenue": null}]}"#)
                .unwrap();
        assert_eq!(sparse.geographic_distribution[0].revenue, Decimal::ZERO);
        assert_eq!(sparse.geographic_distribution[0].location_type, "");
    }

    #[test]
    fn test_numeric_revenue_accepted() {
        let body = r#"{"sales_metrics": {"total_revenue": 99.5}}"#;
        let metrics: DashboardMetrics = serde_json::from_str(body).unwrap();
        assert_eq!(metrics.sales_metrics.total_revenue, Decimal::from_str("99.5").unwrap());
    }

    #[test]
    fn test_wrong_shape_fails_to_decode() {
        assert!(serde_json::from_str::<DashboardMetrics>(r#"{"time_series": "nope"}"#).is_err());
        assert!(serde_json::from_str::<DashboardMetrics>(r#""no data""#).is_err());
        assert!(
            serde_json::from_str::<DashboardMetrics>(r#"{"sales_metrics": {"total_orders": -4}}"#)
                .is_err()
        );
    }
}
