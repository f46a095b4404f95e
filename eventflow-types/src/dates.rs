//! Date and time formatting helpers.
//!
//! Event records carry dates as ISO `YYYY-MM-DD` strings and times as
//! `HH:MM`. The display format is `DD/MM/YYYY`. All helpers are pure and
//! pass unparseable input through unchanged rather than failing.

use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// Formats an ISO `YYYY-MM-DD` date for display as `DD/MM/YYYY`.
///
/// Input already in display form (or empty) is returned unchanged.
#[must_use]
pub fn display_date(date: &str) -> String {
    if date.is_empty() || date.contains('/') {
        return date.to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Converts a display `DD/MM/YYYY` date back to ISO `YYYY-MM-DD`.
///
/// Input already in ISO form (or empty) is returned unchanged.
#[must_use]
pub fn iso_date(date: &str) -> String {
    if date.is_empty() || !date.contains('/') {
        return date.to_string();
    }
    match NaiveDate::parse_from_str(date, "%d/%m/%Y") {
        Ok(d) => d.format("%Y-%m-%d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Today's date in ISO `YYYY-MM-DD` form.
#[must_use]
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Converts an `HH:MM` time to minutes since midnight.
///
/// Returns `None` when the input does not parse.
#[must_use]
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let t = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(t.hour() * 60 + t.minute())
}
