//! Shapes metrics into the series handed to the charting library.

use crate::format::{
    decimal_to_f64, format_axis_currency, format_count, format_currency, truncate_label,
};
use crate::metrics::{ProductMetric, TimeSeriesPoint};

pub const TOP_PRODUCTS_LIMIT: usize = 8;
pub const PRODUCT_LABEL_MAX_CHARS: usize = 20;
const AXIS_TICK_TARGET: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesSeries {
    /// ISO dates for the x axis.
    pub dates: Vec<String>,
    /// Short labels such as `Jan 5`.
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub orders: Vec<u64>,
    pub hover: Vec<String>,
}

impl SalesSeries {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn max_revenue(&self) -> f64 {
        self.revenue.iter().copied().fold(0.0, f64::max)
    }
}

pub fn sales_series(points: &[TimeSeriesPoint]) -> SalesSeries {
    let mut series = SalesSeries::default();
    for point in points {
        let label = point.date.format("%b %-d").to_string();
        series.hover.push(format!(
            "{}<br>Revenue: {}<br>Orders: {}",
            label,
            format_currency(point.revenue),
            format_count(point.order_count)
        ));
        series.dates.push(point.date.format("%Y-%m-%d").to_string());
        series.labels.push(label);
        series.revenue.push(decimal_to_f64(point.revenue));
        series.orders.push(point.order_count);
    }
    series
}

/// Revenue bars. Each bar is keyed by its position so two bars with the
/// same (truncated) label still get their own slot; `labels` are the tick
/// texts shown under the positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarSeries {
    pub positions: Vec<usize>,
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub hover: Vec<String>,
}

impl BarSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_revenue(&self) -> f64 {
        self.revenue.iter().copied().fold(0.0, f64::max)
    }

    pub(crate) fn push(&mut self, label: String, revenue: f64, hover: String) {
        self.positions.push(self.labels.len());
        self.labels.push(label);
        self.revenue.push(revenue);
        self.hover.push(hover);
    }
}

/// The first [`TOP_PRODUCTS_LIMIT`] products in the order given; the backend
/// already ranks them.
pub fn top_products_series(products: &[ProductMetric]) -> BarSeries {
    let mut series = BarSeries::default();
    for product in products.iter().take(TOP_PRODUCTS_LIMIT) {
        series.push(
            truncate_label(&product.item_name, PRODUCT_LABEL_MAX_CHARS),
            decimal_to_f64(product.revenue),
            format!(
                "{}<br>Revenue: {}<br>Units Sold: {}",
                product.item_name,
                format_currency(product.revenue),
                format_count(product.quantity_sold)
            ),
        );
    }
    series
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTicks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

/// Round-number ticks from zero up past `max_value`, labelled with
/// [`format_axis_currency`].
pub fn revenue_axis_ticks(max_value: f64) -> AxisTicks {
    if !max_value.is_finite() || max_value <= 0.0 {
        return AxisTicks {
            values: vec![0.0],
            labels: vec![format_axis_currency(0.0)],
        };
    }

    let raw_step = max_value / AXIS_TICK_TARGET;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    let count = (max_value / step).ceil() as usize;

    let values: Vec<f64> = (0..=count).map(|i| i as f64 * step).collect();
    let labels = values.iter().map(|v| format_axis_currency(*v)).collect();
    AxisTicks { values, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn product(name: &str, revenue: i64) -> ProductMetric {
        ProductMetric {
            item_sku: format!("SKU-{}", name),
            item_name: name.to_string(),
            quantity_sold: 3,
            revenue: Decimal::new(revenue, 0),
            order_count: 1,
            percentage_of_total: 0.0,
        }
    }

    #[test]
    fn test_top_products_limited_to_eight_in_input_order() {
        // Deliberately not sorted by revenue.
        let products: Vec<ProductMetric> = (0..12)
            .map(|i| product(&format!("P{}", i), (i % 4) * 100 + 5))
            .collect();

        let series = top_products_series(&products);
        assert_eq!(series.len(), TOP_PRODUCTS_LIMIT);
        let expected: Vec<String> = (0..8).map(|i| format!("P{}", i)).collect();
        assert_eq!(series.labels, expected);
        assert_eq!(series.revenue[0], 5.0);
        assert_eq!(series.revenue[3], 305.0);
    }

    #[test]
    fn test_top_products_short_input_and_truncation() {
        let products = vec![product("Ultra Premium Ergonomic Office Chair", 1500)];
        let series = top_products_series(&products);
        assert_eq!(series.len(), 1);
        assert_eq!(series.labels[0], "Ultra Premium Ergono...");
        assert!(series.hover[0].starts_with("Ultra Premium Ergonomic Office Chair"));
        assert!(series.hover[0].contains("Revenue: $1,500"));
        assert!(top_products_series(&[]).is_empty());
    }

    #[test]
    fn test_top_products_with_shared_prefix_keep_separate_bars() {
        let products = vec![
            product("Premium Cotton T-Shirt - Blue", 900),
            product("Premium Cotton T-Shirt - Red", 700),
        ];
        let series = top_products_series(&products);
        assert_eq!(series.labels[0], series.labels[1]);
        assert_eq!(series.positions, vec![0, 1]);
        assert_eq!(series.revenue, vec![900.0, 700.0]);
        assert!(series.hover[1].starts_with("Premium Cotton T-Shirt - Red"));
    }

    #[test]
    fn test_sales_series_keeps_order() {
        let points = vec![
            TimeSeriesPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                revenue: Decimal::new(123450, 2),
                order_count: 1200,
                items_sold: 0,
            },
            TimeSeriesPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
                revenue: Decimal::new(80, 0),
                order_count: 2,
                items_sold: 0,
            },
        ];

        let series = sales_series(&points);
        assert_eq!(series.dates, vec!["2024-01-05", "2024-01-06"]);
        assert_eq!(series.labels, vec!["Jan 5", "Jan 6"]);
        assert_eq!(series.revenue, vec![1234.5, 80.0]);
        assert_eq!(series.hover[0], "Jan 5<br>Revenue: $1,234.5<br>Orders: 1,200");
        assert_eq!(series.max_revenue(), 1234.5);
    }

    #[test]
    fn test_axis_ticks() {
        let ticks = revenue_axis_ticks(12000.0);
        assert_eq!(ticks.values, vec![0.0, 5000.0, 10000.0, 15000.0]);
        assert_eq!(ticks.labels, vec!["$0", "$5k", "$10k", "$15k"]);

        let ticks = revenue_axis_ticks(800.0);
        assert_eq!(ticks.values, vec![0.0, 200.0, 400.0, 600.0, 800.0]);
        assert_eq!(ticks.labels, vec!["$0", "$200", "$400", "$600", "$800"]);

        assert_eq!(revenue_axis_ticks(0.0).labels, vec!["$0"]);
        assert_eq!(revenue_axis_ticks(f64::NAN).values, vec![0.0]);
    }
}
