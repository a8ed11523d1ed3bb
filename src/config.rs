use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// The JSON configuration file. Keys match what existing config files carry;
/// everything beyond the project coordinates and sprint data has a default.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
  pub user_name: String,
  pub project_number: i64,
  #[serde(default = "default_max_items")]
  pub max_items: i64,
  pub sprint_data: SprintData,
  #[serde(default = "default_task_label")]
  pub task_label: String,
  #[serde(default = "default_cache_ttl")]
  pub cache_ttl_seconds: u64,
  #[serde(default)]
  pub match_any_label: bool,
  #[serde(default)]
  pub strict_open_counts: bool,
}

#[derive(Debug, Deserialize)]
pub struct SprintData {
  pub sprint: i64,
  pub start_date: String,
  pub end_date: String,
}

fn default_max_items() -> i64 {
  100
}

fn default_task_label() -> String {
  "task".to_string()
}

fn default_cache_ttl() -> u64 {
  3600
}

pub fn load(path: &Path) -> Result<FileConfig> {
  let raw = std::fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
  serde_json::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
}
