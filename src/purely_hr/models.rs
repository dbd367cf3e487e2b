use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::fields::TimeOffStatus;

/// A start or end time as the export wrote it: with a UTC offset when one
/// was present, otherwise a naive wall-clock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeOffTime {
    Offset(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl TimeOffTime {
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            TimeOffTime::Offset(time) => time.naive_local(),
            TimeOffTime::Naive(time) => *time,
        }
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            TimeOffTime::Offset(time) => Some(*time.offset()),
            TimeOffTime::Naive(_) => None,
        }
    }
}

impl From<DateTime<FixedOffset>> for TimeOffTime {
    fn from(time: DateTime<FixedOffset>) -> Self {
        TimeOffTime::Offset(time)
    }
}

impl From<NaiveDateTime> for TimeOffTime {
    fn from(time: NaiveDateTime) -> Self {
        TimeOffTime::Naive(time)
    }
}

/// One entry of a PurelyHR "time off requests" export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    pub id: String,
    pub status: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<TimeOffTime>,
    pub end_time: Option<TimeOffTime>,
    pub hours: Option<String>, // vendor formatting kept, e.g. "2.500"
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    pub login_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_category: Option<String>,
    pub submitted_at: NaiveDate,
    pub deducted: bool,
    pub comment: Option<String>,
}

impl TimeOffRequest {
    pub fn status_kind(&self) -> Option<TimeOffStatus> {
        self.status.parse().ok()
    }

    /// Hours as a decimal, leaving the stored text untouched
    pub fn hours_decimal(&self) -> Option<BigDecimal> {
        self.hours
            .as_deref()
            .and_then(|hours| BigDecimal::from_str(hours).ok())
    }

    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
