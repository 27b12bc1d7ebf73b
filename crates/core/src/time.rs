//! Minute-of-day helpers for the `HH:MM` strings exchanged with clients.

use crate::errors::{CarnetError, CarnetResult};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parses `HH:MM` (or `HH:MM:00`, as stored by SQL `TIME` columns) into a
/// minute of the day. `24:00` parses to 1440 and is only meaningful as an
/// end bound.
pub fn parse_hhmm(value: &str) -> CarnetResult<i32> {
    let invalid = || CarnetError::Validation(format!("Invalid time '{}', expected HH:MM", value));

    let mut parts = value.trim().split(':');
    let hours = parts.next().ok_or_else(invalid)?;
    let minutes = parts.next().ok_or_else(invalid)?;
    if let Some(seconds) = parts.next() {
        if seconds != "00" {
            return Err(invalid());
        }
    }
    let two_digits = |field: &str| field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit());
    if parts.next().is_some() || !two_digits(hours) || !two_digits(minutes) {
        return Err(invalid());
    }

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    let total = hours * 60 + minutes;
    if hours < 0 || total > MINUTES_PER_DAY {
        return Err(invalid());
    }
    Ok(total)
}

/// Formats a minute of the day as zero-padded `HH:MM`.
pub fn format_hhmm(minute_of_day: i32) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}
