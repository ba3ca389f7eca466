//! A collection of utility functions
use std::fmt::Write;
use std::time::SystemTime;

use chrono::Local;
use chrono::NaiveDateTime;
use chrono::TimeZone;

use crate::errors::Error;

/// Default strftime format used for rendering modification times,
/// e.g. "2018-01-26 18:30"
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats a timestamp (seconds since epoch) in local time using strftime
/// directives. Sub-second precision is discarded.
pub fn format_timestamp(timestamp: f64, format: &str) -> Result<String, Error> {
    let secs = timestamp.trunc();
    if !secs.is_finite() || secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return Err(Error::Format {
            what: "timestamp".into(),
            how: format!("{timestamp} is out of range"),
        });
    }
    let datetime = Local
        .timestamp_opt(secs as i64, 0)
        .earliest()
        .ok_or(Error::Format {
            what: "timestamp".into(),
            how: format!("{timestamp} is out of range"),
        })?;

    let mut out = String::new();
    write!(out, "{}", datetime.format(format)).map_err(|_| Error::Format {
        what: "timestamp".into(),
        how: format!("invalid format string \"{format}\""),
    })?;
    Ok(out)
}

/// Builds a timestamp (whole seconds since epoch) from a local time string
/// rendered with `format`.
pub fn parse_timestamp(text: &str, format: &str) -> Result<i64, Error> {
    let naive = NaiveDateTime::parse_from_str(text, format).map_err(|e| Error::Parse {
        what: format!("timestamp \"{text}\""),
        how: e.to_string(),
    })?;
    let datetime = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(Error::Parse {
            what: format!("timestamp \"{text}\""),
            how: "no such local time".into(),
        })?;
    Ok(datetime.timestamp())
}

/// Converts a `SystemTime` into fractional seconds since epoch. Times before
/// the epoch come out negative.
pub fn system_time_secs(time: SystemTime) -> f64 {
    match time.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}
