use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod cache;
mod chart;
mod cli;
mod config;
mod day;
mod error;
mod ext;
mod filters;
mod github;
mod model;
mod report;
mod series;
mod util;
mod window;

use crate::cli::Cli;
use crate::ext::serde_json::JsonFetch;

fn main() -> Result<()> {
  // Logs go to stderr; stdout stays a clean JSON stream.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: merge config file and CLI into one effective config
  let cfg = cli::normalize(cli)?;
  debug!(?cfg, "effective configuration");

  // Phase 2: resolve the sprint window
  let win = window::SprintWindow::new(cfg.start, cfg.end)?;

  // Phase 3: obtain raw project data (cache or live fetch)
  let raw = fetch_project_data(&cfg)?;

  // Phase 4: deserialize and reduce to the filtered issue set
  if !raw.fetch("data.user.projectV2.items.nodes").map(|v| v.is_array()).unwrap_or(false) {
    bail!("unexpected response shape: data.user.projectV2.items.nodes is missing (check user_name and project_number)");
  }

  let resp: model::ProjectResponse = serde_json::from_value(raw).context("deserializing project response")?;
  let issues = model::issues_from_response(resp)?;
  let issues = filters::apply(issues, &win, cfg.sprint, &cfg.task_label, cfg.label_policy);

  // Phase 5: build the series, then chart and report
  let series = series::build(&win.days(), &issues, series::SeriesOptions { strict_open: cfg.strict_open });

  if let Some(chart_path) = &cfg.chart {
    chart::render_svg(&series, cfg.sprint, chart_path)?;
    info!(path = %chart_path.display(), "wrote burndown chart");
  }

  let report = report::BurndownReport::new(cfg.sprint, win, series);
  report::emit(&report, &cfg.out)
}

fn fetch_project_data(cfg: &cli::EffectiveConfig) -> Result<serde_json::Value> {
  let cache = cache::Cache::new(cfg.cache_path.clone());

  if let Some(cached) = cache.load_fresh(cfg.cache_ttl, cfg.refresh) {
    info!(path = %cache.path().display(), "using cached project data");
    return Ok(cached);
  }

  info!("requesting project data from the GitHub API");
  let api = github::client(github::discover_token())?;
  let vars = github::QueryVariables {
    login: cfg.user_name.clone(),
    number: cfg.project_number,
    max_items: cfg.max_items,
  };
  let fresh = api.fetch_items(&vars)?;

  // A failed cache write is not worth failing the run over.
  if let Err(err) = cache.store(&fresh) {
    warn!(%err, "could not persist response cache");
  }

  Ok(fresh)
}
