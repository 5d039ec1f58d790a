//! Temporal parsers: loosely-formatted relative and absolute date strings
//! to day offsets.
//!
//! The goal model carries stringly-typed dates ("3 days ago", "2025-06-30");
//! this module is the only place that grammar is known. All functions take
//! an injected `now` and are total: bad input degrades, never panics.

use chrono::{DateTime, NaiveDate, Utc};

use stride_core::constants::DEFAULT_TOTAL_DAYS;
use stride_core::TimeHorizon;

/// Absolute date formats accepted across the goal model.
const ABSOLUTE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Day counts for the coarse horizon hints.
const SHORT_HORIZON_DAYS: i64 = 30;
const MEDIUM_HORIZON_DAYS: i64 = 90;
const LONG_HORIZON_DAYS: i64 = 180;

/// Signed days until `deadline`.
///
/// Unparseable deadlines return 0, which downstream treats the same as an
/// already-passed deadline.
pub fn days_remaining(deadline: &str, now: DateTime<Utc>) -> i64 {
    match parse_absolute(deadline.trim()) {
        Some(date) => date.signed_duration_since(now.date_naive()).num_days(),
        None => 0,
    }
}

/// Non-negative days since `date`.
///
/// Understands a small closed grammar of relative phrases ("just now",
/// "yesterday", "N days/weeks/months ago") plus the absolute formats.
/// Unparseable input returns 0; future absolute dates clamp to 0.
pub fn days_ago(date: &str, now: DateTime<Utc>) -> i64 {
    let trimmed = date.trim();
    if let Some(days) = parse_relative(trimmed) {
        return days;
    }
    match parse_absolute(trimmed) {
        Some(d) => now.date_naive().signed_duration_since(d).num_days().max(0),
        None => 0,
    }
}

/// Total goal duration implied by a horizon hint, in days.
pub fn estimated_total_days(horizon: Option<&TimeHorizon>) -> i64 {
    match horizon {
        Some(TimeHorizon::Short) => SHORT_HORIZON_DAYS,
        Some(TimeHorizon::Medium) => MEDIUM_HORIZON_DAYS,
        Some(TimeHorizon::Long) => LONG_HORIZON_DAYS,
        Some(TimeHorizon::Days(n)) => i64::from(*n),
        None => DEFAULT_TOTAL_DAYS,
    }
}

fn parse_relative(input: &str) -> Option<i64> {
    let lower = input.to_ascii_lowercase();
    match lower.as_str() {
        "just now" | "now" | "today" => return Some(0),
        "yesterday" => return Some(1),
        _ => {}
    }

    let rest = lower.strip_suffix(" ago")?;
    let (count, unit) = rest.split_once(' ')?;
    let count: i64 = count.parse().ok()?;
    let days = match unit {
        "day" | "days" => count,
        "week" | "weeks" => count * 7,
        "month" | "months" => count * 30,
        _ => return None,
    };
    Some(days.max(0))
}

fn parse_absolute(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    ABSOLUTE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_phrases_parse() {
        assert_eq!(days_ago("just now", now()), 0);
        assert_eq!(days_ago("Today", now()), 0);
        assert_eq!(days_ago("yesterday", now()), 1);
        assert_eq!(days_ago("3 days ago", now()), 3);
        assert_eq!(days_ago("1 day ago", now()), 1);
        assert_eq!(days_ago("2 weeks ago", now()), 14);
        assert_eq!(days_ago("1 month ago", now()), 30);
    }

    #[test]
    fn absolute_dates_parse() {
        assert_eq!(days_ago("2025-06-10", now()), 5);
        assert_eq!(days_ago("06/10/2025", now()), 5);
        assert_eq!(days_ago("2025-06-10T08:30:00Z", now()), 5);
    }

    #[test]
    fn unparseable_input_degrades_to_zero() {
        assert_eq!(days_ago("soonish", now()), 0);
        assert_eq!(days_ago("", now()), 0);
        assert_eq!(days_ago("five days ago", now()), 0);
        assert_eq!(days_remaining("whenever", now()), 0);
    }

    #[test]
    fn future_dates_clamp_to_zero_days_ago() {
        assert_eq!(days_ago("2025-07-01", now()), 0);
    }

    #[test]
    fn days_remaining_is_signed() {
        assert_eq!(days_remaining("2025-06-25", now()), 10);
        assert_eq!(days_remaining("2025-06-15", now()), 0);
        assert_eq!(days_remaining("2025-06-01", now()), -14);
    }

    #[test]
    fn horizon_hints_map_to_day_counts() {
        assert_eq!(estimated_total_days(None), 30);
        assert_eq!(estimated_total_days(Some(&TimeHorizon::Short)), 30);
        assert_eq!(estimated_total_days(Some(&TimeHorizon::Medium)), 90);
        assert_eq!(estimated_total_days(Some(&TimeHorizon::Long)), 180);
        assert_eq!(estimated_total_days(Some(&TimeHorizon::Days(45))), 45);
    }
}
