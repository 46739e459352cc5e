use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, TimeDelta, TimeZone, Utc};
use thiserror::Error;

pub const DEFAULT_RANGE_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("start {start} is after end {end}")]
    Inverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Inclusive `[start, end]` window driving the metrics query. `start <= end`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days` days leading up to `now`. Negative spans collapse to an empty window.
    pub fn last_days(days: i64, now: DateTime<Utc>) -> Self {
        Self {
            start: now - TimeDelta::days(days.max(0)),
            end: now,
        }
    }

    pub fn default_at(now: DateTime<Utc>) -> Self {
        Self::last_days(DEFAULT_RANGE_DAYS, now)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// `2024-01-31T09:30:00.000Z`, the shape `Date.toISOString` produces.
    pub fn start_iso(&self) -> String {
        iso_timestamp(&self.start)
    }

    pub fn end_iso(&self) -> String {
        iso_timestamp(&self.end)
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("start_date", self.start_iso()), ("end_date", self.end_iso())]
    }

    /// `Jan 1, 2024 - Jan 31, 2024` rendered in the given zone.
    pub fn display_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        const FORMAT: &str = "%b %-d, %Y";
        format!(
            "{} - {}",
            self.start.with_timezone(tz).format(FORMAT),
            self.end.with_timezone(tz).format(FORMAT)
        )
    }
}

fn iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fixed shortcuts offered by the date range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Last7Days,
    Last30Days,
    Last90Days,
    Last180Days,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Last7Days,
        Preset::Last30Days,
        Preset::Last90Days,
        Preset::Last180Days,
    ];

    pub fn days(self) -> i64 {
        match self {
            Preset::Last7Days => 7,
            Preset::Last30Days => 30,
            Preset::Last90Days => 90,
            Preset::Last180Days => 180,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Last7Days => "Last 7 days",
            Preset::Last30Days => "Last 30 days",
            Preset::Last90Days => "Last 90 days",
            Preset::Last180Days => "Last 180 days",
        }
    }

    pub fn from_days(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.days() == days)
    }

    pub fn range_at(self, now: DateTime<Utc>) -> DateRange {
        DateRange::last_days(self.days(), now)
    }

    /// The preset whose span equals the range's span, if any.
    pub fn matching(range: &DateRange) -> Option<Self> {
        Self::from_days(range.span_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = DateRange::new(at(2024, 2, 1, 0), at(2024, 1, 1, 0));
        assert!(matches!(result, Err(DateRangeError::Inverted { .. })));
        assert!(DateRange::new(at(2024, 1, 1, 0), at(2024, 1, 1, 0)).is_ok());
    }

    #[test]
    fn test_default_is_last_thirty_days() {
        let now = at(2024, 3, 31, 12);
        let range = DateRange::default_at(now);
        assert_eq!(range.end(), now);
        assert_eq!(range.start(), at(2024, 3, 1, 12));
        assert_eq!(range.span_days(), 30);
    }

    #[test]
    fn test_query_params_are_iso_timestamps() {
        let range = DateRange::new(at(2024, 1, 1, 0), at(2024, 1, 31, 9)).unwrap();
        assert_eq!(
            range.query_params(),
            vec![
                ("start_date", "2024-01-01T00:00:00.000Z".to_string()),
                ("end_date", "2024-01-31T09:00:00.000Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_in_zone() {
        let range = DateRange::new(at(2024, 1, 1, 0), at(2024, 1, 31, 9)).unwrap();
        assert_eq!(range.display_in(&Utc), "Jan 1, 2024 - Jan 31, 2024");

        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(range.display_in(&west), "Dec 31, 2023 - Jan 31, 2024");
    }

    #[test]
    fn test_presets() {
        let now = at(2024, 6, 30, 8);
        let days: Vec<i64> = Preset::ALL.iter().map(|p| p.days()).collect();
        assert_eq!(days, vec![7, 30, 90, 180]);

        let range = Preset::Last90Days.range_at(now);
        assert_eq!(range.end(), now);
        assert!(range.start() <= range.end());
        assert_eq!(Preset::matching(&range), Some(Preset::Last90Days));

        assert_eq!(Preset::from_days(14), None);
        assert_eq!(Preset::Last7Days.label(), "Last 7 days");
    }

    #[test]
    fn test_negative_span_collapses() {
        let now = at(2024, 6, 30, 8);
        let range = DateRange::last_days(-3, now);
        assert_eq!(range.start(), range.end());
    }
}
