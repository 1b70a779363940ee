//! Day/night bucketing of event timestamps.

use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised while computing statistics.
#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("Timestamp {0} is out of range")]
    InvalidTimestamp(f64),
}

/// Local-time bucket of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayNight {
    Day,
    Night,
}

impl fmt::Display for DayNight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayNight::Day => f.write_str("day"),
            DayNight::Night => f.write_str("night"),
        }
    }
}

/// First minute of the day bucket, as (hour, minute).
const DAY_START: (u32, u32) = (7, 0);
/// First minute of the night bucket.
const NIGHT_START: (u32, u32) = (19, 0);

/// Classify a unix timestamp in `tz`: `Day` for local [07:00, 19:00).
pub fn day_night<Tz: TimeZone>(timestamp: f64, tz: &Tz) -> Result<DayNight, StatsError> {
    if !timestamp.is_finite() {
        return Err(StatsError::InvalidTimestamp(timestamp));
    }

    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9) as u32;
    let utc = DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
        .ok_or(StatsError::InvalidTimestamp(timestamp))?;
    let local = utc.with_timezone(tz);

    let hm = (local.hour(), local.minute());
    if (DAY_START..NIGHT_START).contains(&hm) {
        Ok(DayNight::Day)
    } else {
        Ok(DayNight::Night)
    }
}
