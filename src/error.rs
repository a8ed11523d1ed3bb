use thiserror::Error;

use crate::day::Day;

/// Failures the core pipeline can raise. Peripheral collaborators (HTTP,
/// cache, chart output) report through `anyhow` instead; these variants are
/// part of the series-building contract and callers match on them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
  /// A present timestamp field failed to parse. Absent fields are not an
  /// error; only a value we cannot read would corrupt the series.
  #[error("malformed timestamp: {0:?}")]
  MalformedTimestamp(String),

  /// The sprint window was requested with start after end.
  #[error("invalid sprint range: start {start} is after end {end}")]
  InvalidRange { start: Day, end: Day },
}
