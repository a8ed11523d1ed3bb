use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config;
use crate::day::Day;
use crate::filters::LabelPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "sprint-burndown",
    version,
    about = "Render sprint burndown charts from GitHub Projects data",
    long_about = None
)]
pub struct Cli {
  /// Path to the JSON configuration file
  #[arg(long, default_value = "config.json")]
  pub config: PathBuf,

  /// Sprint start day (DD-MM-YYYY or YYYY-MM-DD); overrides the config file
  #[arg(long)]
  pub start: Option<String>,

  /// Sprint end day (inclusive); overrides the config file
  #[arg(long)]
  pub end: Option<String>,

  /// Sprint identifier issues must carry to be counted; overrides the config file
  #[arg(long)]
  pub sprint: Option<i64>,

  /// Label marking an issue as an actionable task
  #[arg(long)]
  pub task_label: Option<String>,

  /// Match the task label anywhere in the label list instead of only first position
  #[arg(long)]
  pub any_label: bool,

  /// Count an issue as open only from its creation day onward
  #[arg(long)]
  pub strict_open: bool,

  /// Cache file for raw API responses (default: data.json next to the config file)
  #[arg(long)]
  pub cache: Option<PathBuf>,

  /// Cache freshness in seconds; 0 uses the cache whenever present
  #[arg(long)]
  pub cache_ttl: Option<u64>,

  /// Bypass the cache and fetch fresh data
  #[arg(long)]
  pub refresh: bool,

  /// Report output: file path, or "-" for stdout
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Render the burndown chart to this SVG file
  #[arg(long)]
  pub chart: Option<PathBuf>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

/// One merged configuration value for the whole run: file values with CLI
/// overrides applied, dates parsed, nothing read from the environment later.
#[derive(Debug)]
pub struct EffectiveConfig {
  pub user_name: String,
  pub project_number: i64,
  pub max_items: i64,
  pub sprint: i64,
  pub start: Day,
  pub end: Day,
  pub task_label: String,
  pub label_policy: LabelPolicy,
  pub strict_open: bool,
  pub cache_path: PathBuf,
  pub cache_ttl: u64,
  pub refresh: bool,
  pub out: String,
  pub chart: Option<PathBuf>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let file = config::load(&cli.config)?;

  let start = Day::parse_config(cli.start.as_deref().unwrap_or(&file.sprint_data.start_date))?;
  let end = Day::parse_config(cli.end.as_deref().unwrap_or(&file.sprint_data.end_date))?;

  let label_policy = if cli.any_label || file.match_any_label {
    LabelPolicy::Any
  } else {
    LabelPolicy::First
  };

  // Default the cache next to the config file, where existing setups keep it.
  let cache_path = cli
    .cache
    .unwrap_or_else(|| cli.config.parent().unwrap_or_else(|| std::path::Path::new(".")).join("data.json"));

  Ok(EffectiveConfig {
    user_name: file.user_name,
    project_number: file.project_number,
    max_items: file.max_items,
    sprint: cli.sprint.unwrap_or(file.sprint_data.sprint),
    start,
    end,
    task_label: cli.task_label.unwrap_or(file.task_label),
    label_policy,
    strict_open: cli.strict_open || file.strict_open_counts,
    cache_path,
    cache_ttl: cli.cache_ttl.unwrap_or(file.cache_ttl_seconds),
    refresh: cli.refresh,
    out: cli.out,
    chart: cli.chart,
  })
}
