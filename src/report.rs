use anyhow::{Context, Result};
use serde::Serialize;

use crate::series::BurndownSeries;
use crate::window::SprintWindow;

/// The JSON payload callers consume: sprint identity, window bounds, and the
/// derived series. Field shapes are additive-only once published.
#[derive(Debug, Serialize)]
pub struct BurndownReport {
  pub sprint: i64,
  pub window: SprintWindow,
  #[serde(flatten)]
  pub series: BurndownSeries,
}

impl BurndownReport {
  pub fn new(sprint: i64, window: SprintWindow, series: BurndownSeries) -> Self {
    BurndownReport { sprint, window, series }
  }
}

/// Print to stdout when `out` is "-", otherwise write the file (creating
/// parent directories as needed).
pub fn emit(report: &BurndownReport, out: &str) -> Result<()> {
  let body = serde_json::to_string_pretty(report)?;

  if out == "-" {
    println!("{}", body);
    return Ok(());
  }

  let path = std::path::Path::new(out);

  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent).with_context(|| format!("creating report dir {}", parent.display()))?;
    }
  }

  std::fs::write(path, body).with_context(|| format!("writing report to {}", path.display()))
}
