// src/snapshot/timestamp.rs

//! Canonical text form of node timestamps.

use chrono::NaiveDateTime;

use crate::errors::{Result, TaskboardError};

/// Written form; the fraction is omitted when it is zero.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Also accepted on input: minute precision.
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(CANONICAL_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, CANONICAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, MINUTE_FORMAT))
        .map_err(|e| TaskboardError::InvalidTimestamp(format!("{s:?}: {e}")))
}
