//! State rankings built from the snapshot's geographic distribution.

use rust_decimal::Decimal;

use crate::charts::BarSeries;
use crate::format::{decimal_to_f64, format_count, format_currency};
use crate::metrics::GeographicMetric;

pub const TOP_STATES_LIMIT: usize = 10;
pub const US_STATE_COUNT: usize = 50;

fn is_state(metric: &GeographicMetric) -> bool {
    metric.location_type.is_empty() || metric.location_type.eq_ignore_ascii_case("state")
}

/// State rows by descending revenue. Ties keep their input order.
pub fn ranked_states(distribution: &[GeographicMetric]) -> Vec<&GeographicMetric> {
    let mut states: Vec<&GeographicMetric> = distribution.iter().filter(|m| is_state(m)).collect();
    states.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    states
}

pub fn top_states_series(distribution: &[GeographicMetric]) -> BarSeries {
    let mut series = BarSeries::default();
    for state in ranked_states(distribution).into_iter().take(TOP_STATES_LIMIT) {
        series.push(
            state.location.clone(),
            decimal_to_f64(state.revenue),
            format!(
                "{}<br>Revenue: {}<br>Orders: {}<br>Share: {:.1}%",
                state.location,
                format_currency(state.revenue),
                format_count(state.order_count),
                state.percentage_of_total
            ),
        );
    }
    series
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateSummary {
    pub top_state: String,
    pub top_revenue: Decimal,
    pub states_with_sales: usize,
    pub average_revenue: Decimal,
    pub above_average: usize,
}

/// `None` when the snapshot carries no state rows.
pub fn state_summary(distribution: &[GeographicMetric]) -> Option<StateSummary> {
    let states = ranked_states(distribution);
    let top = states.first()?;

    let total: Decimal = states.iter().map(|s| s.revenue).sum();
    let average_revenue = total / Decimal::from(states.len());
    let above_average = states.iter().filter(|s| s.revenue > average_revenue).count();

    Some(StateSummary {
        top_state: top.location.clone(),
        top_revenue: top.revenue,
        states_with_sales: states.len(),
        average_revenue,
        above_average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(location: &str, revenue: i64, orders: u64) -> GeographicMetric {
        GeographicMetric {
            location: location.to_string(),
            location_type: "state".to_string(),
            revenue: Decimal::new(revenue, 0),
            order_count: orders,
            percentage_of_total: 0.0,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_ranked_states_sorts_by_revenue_and_skips_zip_rows() {
        let mut zip = state("94103", 99_999, 1);
        zip.location_type = "zip".to_string();
        let distribution = vec![state("NY", 300, 3), zip, state("CA", 900, 9), state("TX", 300, 4)];

        let ranked: Vec<&str> = ranked_states(&distribution)
            .iter()
            .map(|s| s.location.as_str())
            .collect();
        assert_eq!(ranked, vec!["CA", "NY", "TX"]);
    }

    #[test]
    fn test_top_states_series_limited_to_ten() {
        let distribution: Vec<GeographicMetric> = (0..14)
            .map(|i| state(&format!("S{}", i), 100 + i, 1))
            .collect();

        let series = top_states_series(&distribution);
        assert_eq!(series.len(), TOP_STATES_LIMIT);
        assert_eq!(series.labels[0], "S13");
        assert_eq!(series.positions, (0..10).collect::<Vec<_>>());
        assert!(series.hover[0].contains("Revenue: $113"));
    }

    #[test]
    fn test_state_summary() {
        let distribution = vec![state("NY", 300, 3), state("CA", 900, 9), state("TX", 0, 0)];
        let summary = state_summary(&distribution).unwrap();
        assert_eq!(summary.top_state, "CA");
        assert_eq!(summary.top_revenue, Decimal::new(900, 0));
        assert_eq!(summary.states_with_sales, 3);
        assert_eq!(summary.average_revenue, Decimal::new(400, 0));
        assert_eq!(summary.above_average, 1);

        assert_eq!(state_summary(&[]), None);
    }
}
