use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::models::race::Race;

/// Whole-calendar-day difference, time-of-day already stripped by the
/// `NaiveDate` inputs.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Days from `today` until a `yyyy-MM-dd` race date. A race later today is 0,
/// yesterday's race is -1. Malformed dates yield `None` so a single bad
/// record never qualifies and never aborts a scan.
pub fn days_left(date: &str, today: NaiveDate) -> Option<i64> {
    let race_day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(days_between(today, race_day))
}

/// The first race in feed order whose date is not already past. The feed
/// delivers races chronologically, so no re-sort happens here; an
/// out-of-order feed entry wins over a nearer later one.
pub fn select_upcoming<'a>(races: &'a [Race], today: NaiveDate) -> Option<&'a Race> {
    races
        .iter()
        .find(|race| matches!(days_left(&race.date, today), Some(left) if left >= 0))
}

pub fn format_countdown(days_left: Option<i64>) -> String {
    match days_left {
        Some(left) if left > 1 => format!("Starts in {} days", left),
        Some(1) => "Starts tomorrow!".to_string(),
        Some(0) => "🏁 Starts today!".to_string(),
        _ => String::new(),
    }
}

pub fn countdown_for_date(date: Option<&str>, today: NaiveDate) -> String {
    format_countdown(date.and_then(|date| days_left(date, today)))
}

/// Convert a `HH:mm:ssZ` feed time, taken as occurring today in UTC, into
/// `HH:mm` in the server's local zone. Unparseable input passes through
/// unchanged.
pub fn localize_time(raw: &str) -> String {
    localize_time_in(raw, &Local)
}

pub fn localize_time_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let today = Utc::now().format("%Y-%m-%d");
    match DateTime::parse_from_rfc3339(&format!("{}T{}", today, raw)) {
        Ok(parsed) => parsed.with_timezone(tz).format("%H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
