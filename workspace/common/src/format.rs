//! Number formatting for cards, tooltips and axes (en-US conventions).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, FormattableCurrency, Formatter, Money, Params, Position};

/// `12345.6` → `$12,346`.
pub fn format_currency_whole(amount: Decimal) -> String {
    currency(amount, 0)
}

/// Tooltip value: grouped, at most two decimals, no trailing zeros.
pub fn format_currency(amount: Decimal) -> String {
    currency(amount, 2)
}

pub fn format_count(value: u64) -> String {
    let params = Params {
        rounding: Some(0),
        positions: vec![Position::Amount],
        ..grouping_params()
    };
    Formatter::money(&Money::from_decimal(Decimal::from(value), iso::USD), params)
}

/// Axis tick: `$12k` at the thousand scale, otherwise the plain value.
pub fn format_axis_currency(value: f64) -> String {
    if value >= 1000.0 {
        format!("${}k", (value / 1000.0).round())
    } else {
        format!("${}", value)
    }
}

/// Cuts `label` to `max_chars` characters, marking the cut with `...`.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let head: String = label.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Direction of a KPI trend indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 0.0 {
            Trend::Up
        } else if percentage < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

pub fn trend_magnitude(percentage: f64) -> String {
    format!("{}%", percentage.abs())
}

/// Rounds half away from zero first; the formatter's own rounding is
/// banker's rounding and would turn `$0.5` into `$0`.
fn currency(amount: Decimal, max_decimals: u32) -> String {
    let rounded = amount
        .round_dp_with_strategy(max_decimals, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };

    let params = Params {
        rounding: (max_decimals == 0).then_some(0),
        symbol: Some(iso::USD.symbol()),
        ..grouping_params()
    };
    Formatter::money(&Money::from_decimal(rounded, iso::USD), params)
}

fn grouping_params() -> Params {
    Params {
        digit_separator: ',',
        exponent_separator: '.',
        separator_pattern: vec![3; 6],
        positions: vec![Position::Sign, Position::Symbol, Position::Amount],
        ..Params::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_whole_dollars() {
        assert_eq!(format_currency_whole(dec("12345.6")), "$12,346");
        assert_eq!(format_currency_whole(dec("999.49")), "$999");
        assert_eq!(format_currency_whole(dec("0.5")), "$1");
        assert_eq!(format_currency_whole(Decimal::ZERO), "$0");
        assert_eq!(format_currency_whole(dec("1234567")), "$1,234,567");
        assert_eq!(format_currency_whole(dec("-2500.2")), "-$2,500");
        assert_eq!(format_currency_whole(dec("-0.2")), "$0");
        assert_eq!(format_currency_whole(dec("2.5")), "$3");
        assert_eq!(format_currency_whole(dec("1234567890123")), "$1,234,567,890,123");
    }

    #[test]
    fn test_currency_tooltip() {
        assert_eq!(format_currency(dec("1234.50")), "$1,234.5");
        assert_eq!(format_currency(dec("1234.567")), "$1,234.57");
        assert_eq!(format_currency(dec("100.00")), "$100");
        assert_eq!(format_currency(dec("-0.125")), "-$0.13");
    }

    #[test]
    fn test_count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345678), "12,345,678");
    }

    #[test]
    fn test_axis_abbreviation() {
        assert_eq!(format_axis_currency(0.0), "$0");
        assert_eq!(format_axis_currency(250.0), "$250");
        assert_eq!(format_axis_currency(999.0), "$999");
        assert_eq!(format_axis_currency(1000.0), "$1k");
        assert_eq!(format_axis_currency(12500.0), "$13k");
        assert_eq!(format_axis_currency(150000.0), "$150k");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Short name", 20), "Short name");
        assert_eq!(truncate_label("Exactly twenty chars", 20), "Exactly twenty chars");
        assert_eq!(
            truncate_label("Deluxe Stainless Steel Water Bottle", 20),
            "Deluxe Stainless Ste..."
        );
        assert_eq!(truncate_label("Café Crème Brûlée Set Large", 5), "Café ...");
    }

    #[test]
    fn test_trend() {
        assert_eq!(Trend::from_percentage(4.2), Trend::Up);
        assert_eq!(Trend::from_percentage(-1.0), Trend::Down);
        assert_eq!(Trend::from_percentage(0.0), Trend::Flat);
        assert_eq!(trend_magnitude(-12.5), "12.5%");
        assert_eq!(trend_magnitude(3.0), "3%");
    }
}
