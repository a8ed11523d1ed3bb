// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive the daily open-issue counts and the ideal linear burndown for a sprint window
// role: core/series-builder
// inputs: Ordered day sequence, filtered Issue snapshots, SeriesOptions
// outputs: BurndownSeries (total, per-day open counts, per-day ideal counts)
// invariants:
// - open_counts.len() == ideal_counts.len() == days.len()
// - 0 <= open_counts[i] <= total_issues
// - ideal line is non-increasing, starts at total_issues, ends at 0 when days.len() > 1
// - default counting tests only the closure boundary; inputs are assumed pre-filtered to the window
// errors: None; this is a pure single-pass transformation
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use rayon::prelude::*;
use serde::Serialize;

use crate::day::Day;
use crate::model::Issue;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesOptions {
  /// Also require `created_at <= day` when counting an issue as open.
  /// Off by default: the filter stage already restricts issues to the window,
  /// and existing output counts from the closure boundary only.
  pub strict_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BurndownSeries {
  pub total_issues: usize,
  pub days: Vec<Day>,
  pub open_counts: Vec<usize>,
  pub ideal_counts: Vec<f64>,
}

fn open_on(issue: &Issue, day: Day, opts: SeriesOptions) -> bool {
  if opts.strict_open && issue.created_at > day {
    return false;
  }
  issue.closed_at.map(|closed| day <= closed).unwrap_or(true)
}

/// Count open issues per day and lay the ideal line over the same axis.
/// Days are independent, so the per-day counts fan out across threads; the
/// collect preserves day order.
pub fn build(days: &[Day], issues: &[Issue], opts: SeriesOptions) -> BurndownSeries {
  let total_issues = issues.len();

  let open_counts: Vec<usize> = days
    .par_iter()
    .map(|&day| issues.iter().filter(|i| open_on(i, day, opts)).count())
    .collect();

  let ideal_counts = ideal_line(total_issues, days.len());

  BurndownSeries {
    total_issues,
    days: days.to_vec(),
    open_counts,
    ideal_counts,
  }
}

/// Linear decay from `total` to 0 across `len` points. A single point cannot
/// decay and stays at `total`.
fn ideal_line(total: usize, len: usize) -> Vec<f64> {
  let total = total as f64;

  if len <= 1 {
    return vec![total; len];
  }

  (0..len).map(|i| total - i as f64 * total / (len - 1) as f64).collect()
}
