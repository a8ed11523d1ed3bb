use tracing::debug;

use crate::model::Issue;
use crate::window::SprintWindow;

/// How the task label is matched against an issue's label list.
///
/// `First` inspects only the first label, which is what existing reports were
/// generated with; `Any` tests full membership. `First` stays the default so
/// series output is comparable run over run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
  First,
  Any,
}

/// Keep the issue iff it is labeled as an actionable task.
pub fn is_task(issue: &Issue, task_label: &str, policy: LabelPolicy) -> bool {
  match policy {
    LabelPolicy::First => issue.labels.first().map(|l| l == task_label).unwrap_or(false),
    LabelPolicy::Any => issue.labels.iter().any(|l| l == task_label),
  }
}

/// Keep the issue iff its open interval `[created_at, closed_at-or-open]`
/// shares a day with the window, and its sprint tag (when present) names the
/// configured sprint. Untagged issues pass the sprint clause unconditionally.
pub fn overlaps_sprint(issue: &Issue, window: &SprintWindow, sprint: i64) -> bool {
  let overlaps = issue.created_at <= window.end && issue.closed_at.map(|c| c >= window.start).unwrap_or(true);

  let sprint_matches = issue.sprint_tag.map(|tag| tag == sprint).unwrap_or(true);

  overlaps && sprint_matches
}

/// Both filters composed by AND, in the order the pipeline applies them.
pub fn apply(issues: Vec<Issue>, window: &SprintWindow, sprint: i64, task_label: &str, policy: LabelPolicy) -> Vec<Issue> {
  let total = issues.len();
  let kept: Vec<Issue> = issues
    .into_iter()
    .filter(|i| is_task(i, task_label, policy))
    .filter(|i| overlaps_sprint(i, window, sprint))
    .collect();

  debug!(total, kept = kept.len(), sprint, "filtered issue set");

  kept
}
