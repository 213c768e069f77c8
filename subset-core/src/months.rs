//! Dataset time ranges and the month sequence offered by the start/end
//! date selectors.

use crate::error::{Result, SubsetError};
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::mem::replace;

/// Timestamp format of selector option values, e.g. "2020-01-01T00:00:00.000Z"
pub const OPTION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A month iterator yielding the first day of each month from the start
/// month up to, but excluding, the end month.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct MonthRange(pub NaiveDate, pub NaiveDate);

impl MonthRange {
    /// Months from `start`'s month through `end`'s month inclusive. Both
    /// endpoints are normalized to the first of their month and the end
    /// boundary moves to the month after, so the day of month never matters.
    pub fn inclusive(start: NaiveDate, end: NaiveDate) -> Self {
        let end_exclusive = first_of_month(end)
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        MonthRange(first_of_month(start), end_exclusive)
    }
}

impl Iterator for MonthRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 < self.1 {
            let next = self
                .0
                .checked_add_months(Months::new(1))
                .unwrap_or(self.1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

/// First day of the date's month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// One entry of the start/end selectors.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MonthOption {
    /// "month/year" with a 1-based month, e.g. "3/2020"
    pub label: String,
    /// First instant of the month in UTC, submitted as the option value
    pub timestamp: String,
}

impl MonthOption {
    pub fn from_month(month: NaiveDate) -> Self {
        let instant = first_of_month(month).and_time(NaiveTime::MIN).and_utc();
        MonthOption {
            label: format!("{}/{}", month.month(), month.year()),
            timestamp: instant.format(OPTION_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TimesResponse {
    starttime: String,
    endtime: String,
}

/// Available time extent of a dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Parse a GETTIMES body: `{"starttime": ISO8601, "endtime": ISO8601}`.
    pub fn from_json(body: &str) -> Result<TimeRange> {
        let raw: TimesResponse = serde_json::from_str(body)?;
        Ok(TimeRange {
            start: parse_timestamp(&raw.starttime)?,
            end: parse_timestamp(&raw.endtime)?,
        })
    }

    pub fn months(&self) -> MonthRange {
        MonthRange::inclusive(self.start.date_naive(), self.end.date_naive())
    }

    /// Selector options, one per month, in increasing order.
    pub fn month_options(&self) -> Vec<MonthOption> {
        self.months().map(MonthOption::from_month).collect()
    }
}

/// Parse an ISO 8601 timestamp. Accepts RFC 3339 with an offset, a local
/// date-time (taken as UTC) and a bare date.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| SubsetError::DateParse(format!("{}: {}", s, e)))
}
