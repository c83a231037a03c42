//! Fixed reporting windows computed relative to a reference instant.
//!
//! Month and year boundaries are taken in UTC. "Through the last day of the
//! previous month inclusive" is realized as an end-exclusive bound at the
//! first instant of the current month, which is equivalent for timestamps.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// One of the three reporting buckets shown on the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingPeriod {
    CurrentMonth,
    LastMonth,
    YearToDate,
}

/// Half-open time range: `[start, end)`, open-ended when `end` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl ReportingWindow {
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && self.end.map_or(true, |end| date < end)
    }
}

impl ReportingPeriod {
    /// Resolves the window for this period relative to `as_of`.
    pub fn window(&self, as_of: DateTime<Utc>) -> ReportingWindow {
        match self {
            ReportingPeriod::CurrentMonth => ReportingWindow {
                start: start_of_month(as_of),
                end: None,
            },
            ReportingPeriod::LastMonth => {
                let current = start_of_month(as_of);
                ReportingWindow {
                    start: start_of_previous_month(as_of),
                    end: Some(current),
                }
            }
            ReportingPeriod::YearToDate => ReportingWindow {
                start: start_of_year(as_of),
                end: None,
            },
        }
    }
}

pub fn start_of_month(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(at.year(), at.month(), 1, 0, 0, 0).unwrap()
}

pub fn start_of_previous_month(at: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if at.month() == 1 {
        (at.year() - 1, 12)
    } else {
        (at.year(), at.month() - 1)
    };
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
}

pub fn start_of_year(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(at.year(), 1, 1, 0, 0, 0).unwrap()
}
