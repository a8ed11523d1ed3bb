use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC calendar day. The only way in from upstream data is
/// [`Day::from_timestamp`], so a `Day` is normalized by construction and
/// re-normalizing is not expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(NaiveDate);

impl Day {
  /// Normalize an ISO-8601 UTC timestamp (e.g. `2024-01-31T12:34:56Z`, with
  /// or without fractional seconds) to its UTC calendar day.
  pub fn from_timestamp(ts: &str) -> Result<Self, CoreError> {
    let dt = DateTime::parse_from_rfc3339(ts).map_err(|_| CoreError::MalformedTimestamp(ts.to_string()))?;
    Ok(Day(dt.with_timezone(&Utc).date_naive()))
  }

  /// Parse a configured day. Accepts `DD-MM-YYYY` (the format existing config
  /// files use) and ISO `YYYY-MM-DD`.
  pub fn parse_config(s: &str) -> Result<Self, CoreError> {
    NaiveDate::parse_from_str(s, "%d-%m-%Y")
      .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
      .map(Day)
      .map_err(|_| CoreError::MalformedTimestamp(s.to_string()))
  }

  pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
    NaiveDate::from_ymd_opt(year, month, day).map(Day)
  }

  /// The next calendar day.
  pub fn succ(self) -> Self {
    // NaiveDate covers +/- ~262000 years; the sprint domain never reaches it.
    Day(self.0.succ_opt().expect("calendar overflow"))
  }

  /// Whole days from `self` to `other` (negative when `other` is earlier).
  pub fn days_until(self, other: Self) -> i64 {
    (other.0 - self.0).num_days()
  }
}

impl fmt::Display for Day {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format("%Y-%m-%d"))
  }
}
