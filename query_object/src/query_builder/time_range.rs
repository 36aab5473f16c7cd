//! Time range bounds
//!
//! Epoch seconds are formatted once, when the range is set, into the
//! `YYYY-MM-DD HH:MM:SS` literal form the query language compares `time` against.

use crate::errors::QueryError;
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use config::TimeZoneSetting;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inclusive time range with both bounds already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    /// Format both bounds in `zone`
    pub fn from_epoch_seconds(
        from: i64,
        to: i64,
        zone: TimeZoneSetting,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            from: format_epoch_seconds(from, zone)?,
            to: format_epoch_seconds(to, zone)?,
        })
    }
}

/// Format one epoch-second timestamp
pub fn format_epoch_seconds(seconds: i64, zone: TimeZoneSetting) -> Result<String, QueryError> {
    let utc: DateTime<Utc> =
        DateTime::from_timestamp(seconds, 0).ok_or(QueryError::InvalidTimestamp(seconds))?;

    let formatted = match zone {
        TimeZoneSetting::Utc => utc.format(TIMESTAMP_FORMAT).to_string(),
        TimeZoneSetting::Local => utc
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        TimeZoneSetting::Fixed { offset_seconds } => {
            let offset = FixedOffset::east_opt(offset_seconds)
                .ok_or(QueryError::InvalidTimeZone(offset_seconds))?;
            offset
                .from_utc_datetime(&utc.naive_utc())
                .format(TIMESTAMP_FORMAT)
                .to_string()
        }
    };

    Ok(formatted)
}
