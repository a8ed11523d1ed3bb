// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the typed GraphQL response shapes and the core Issue snapshot, plus the one-way conversion between them
// role: model/types
// inputs: Raw project JSON (data.user.projectV2.items.nodes[])
// outputs: Issue snapshots with normalized Day fields; nodes that cannot be placed on a timeline are dropped
// invariants:
// - Issue.created_at is always present; absence is resolved at this boundary, never downstream
// - A present but unparseable timestamp is an error, not a drop
// - Sprint tags come from the field's number, falling back to a trailing integer in an iteration title
// errors: CoreError::MalformedTimestamp propagates; everything else is Option-shaped
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

use crate::day::Day;
use crate::error::CoreError;

/// An issue as the core pipeline sees it: an immutable snapshot for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
  pub title: Option<String>,
  pub created_at: Day,
  pub closed_at: Option<Day>,
  pub labels: Vec<String>,
  pub sprint_tag: Option<i64>,
}

// --- Raw response shapes (GraphQL: data.user.projectV2.items.nodes) ---

#[derive(Debug, Deserialize)]
pub struct ProjectResponse {
  pub data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
  pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
pub struct UserNode {
  #[serde(rename = "projectV2")]
  pub project: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
  pub items: ItemsNode,
}

#[derive(Debug, Deserialize)]
pub struct ItemsNode {
  #[serde(default)]
  pub nodes: Vec<ItemNode>,
}

#[derive(Debug, Deserialize)]
pub struct ItemNode {
  // Draft items and pull requests deserialize to None here.
  pub content: Option<ContentNode>,
  pub sprint: Option<SprintField>,
}

#[derive(Debug, Deserialize)]
pub struct ContentNode {
  pub title: Option<String>,
  #[serde(rename = "createdAt")]
  pub created_at: Option<String>,
  #[serde(rename = "closedAt")]
  pub closed_at: Option<String>,
  #[serde(default)]
  pub labels: LabelsNode,
}

#[derive(Debug, Deserialize, Default)]
pub struct LabelsNode {
  #[serde(default)]
  pub nodes: Vec<LabelNode>,
}

#[derive(Debug, Deserialize)]
pub struct LabelNode {
  pub name: String,
}

/// The project field carrying the sprint identifier. Number fields give us the
/// tag directly; iteration fields only expose a title like "Sprint 7".
#[derive(Debug, Deserialize)]
pub struct SprintField {
  pub number: Option<i64>,
  pub title: Option<String>,
}

impl SprintField {
  pub fn tag(&self) -> Option<i64> {
    static TRAILING_NUMBER: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"(\d+)\s*$").unwrap());

    if let Some(n) = self.number {
      return Some(n);
    }

    self
      .title
      .as_deref()
      .and_then(|t| TRAILING_NUMBER.captures(t))
      .and_then(|c| c.get(1).unwrap().as_str().parse().ok())
  }
}

impl ItemNode {
  /// Convert one raw item into a core `Issue`. Returns `Ok(None)` for items
  /// that cannot be placed on a timeline (no content, no createdAt).
  pub fn into_issue(self) -> Result<Option<Issue>, CoreError> {
    let Some(content) = self.content else {
      debug!("dropping item without issue content");
      return Ok(None);
    };

    let Some(created_raw) = content.created_at else {
      debug!(title = content.title.as_deref(), "dropping issue without createdAt");
      return Ok(None);
    };

    let created_at = Day::from_timestamp(&created_raw)?;
    let closed_at = content.closed_at.as_deref().map(Day::from_timestamp).transpose()?;

    Ok(Some(Issue {
      title: content.title,
      created_at,
      closed_at,
      labels: content.labels.nodes.into_iter().map(|l| l.name).collect(),
      sprint_tag: self.sprint.and_then(|s| s.tag()),
    }))
  }
}

/// Reduce a full response to the issue set, dropping timeline-less items.
pub fn issues_from_response(resp: ProjectResponse) -> Result<Vec<Issue>, CoreError> {
  let nodes = resp
    .data
    .and_then(|d| d.user)
    .and_then(|u| u.project)
    .map(|p| p.items.nodes)
    .unwrap_or_default();

  let mut issues = Vec::with_capacity(nodes.len());

  for node in nodes {
    if let Some(issue) = node.into_issue()? {
      issues.push(issue);
    }
  }

  Ok(issues)
}
