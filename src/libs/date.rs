//! Report date resolution.
//!
//! The `--date` flag accepts the keywords `today` and `yesterday` (in any case)
//! or a strict `YYYY-MM-DD` calendar date. Keywords are resolved against the
//! local clock.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use std::fmt;
use thiserror::Error;

/// Format used for every date the reporter prints or sends to the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TODAY: &str = "today";
const YESTERDAY: &str = "yesterday";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date format: {0:?}, expected YYYY-MM-DD, \"today\" or \"yesterday\"")]
    InvalidFormat(String),
}

/// A resolved calendar day. Displays as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Resolves a raw `--date` value against the current local time.
pub fn resolve_date(raw: &str) -> Result<ReportDate, DateError> {
    resolve_date_at(raw, Local::now())
}

/// Resolves a raw `--date` value against an explicit clock.
///
/// `yesterday` is "now minus 24 hours", not "the previous calendar day", so the
/// two only differ around DST transitions.
pub fn resolve_date_at<Tz: TimeZone>(raw: &str, now: DateTime<Tz>) -> Result<ReportDate, DateError> {
    if raw.eq_ignore_ascii_case(TODAY) {
        return Ok(ReportDate(now.date_naive()));
    }
    if raw.eq_ignore_ascii_case(YESTERDAY) {
        return Ok(ReportDate((now - Duration::hours(24)).date_naive()));
    }
    parse_date(raw)
}

/// Parses a strict `YYYY-MM-DD` string. Unpadded fields are rejected.
pub fn parse_date(raw: &str) -> Result<ReportDate, DateError> {
    let invalid = || DateError::InvalidFormat(raw.to_string());

    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map(ReportDate).map_err(|_| invalid())
}
