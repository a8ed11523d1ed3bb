use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::{Context, Result};
use tracing::debug;

/// Single-file cache for the raw API response, keyed only by staleness.
pub struct Cache {
  path: PathBuf,
}

impl Cache {
  pub fn new(path: PathBuf) -> Self {
    Cache { path }
  }

  pub fn path(&self) -> &std::path::Path {
    &self.path
  }

  /// Return the cached response when it is fresh enough, else `None`.
  ///
  /// `ttl_seconds == 0` means "use whenever present". A corrupt or unreadable
  /// cache file is treated as absent; the caller falls through to a fetch.
  pub fn load_fresh(&self, ttl_seconds: u64, force_refresh: bool) -> Option<serde_json::Value> {
    if force_refresh {
      return None;
    }

    if ttl_seconds > 0 {
      let modified = std::fs::metadata(&self.path).and_then(|m| m.modified()).ok()?;
      let age = SystemTime::now().duration_since(modified).unwrap_or_default();

      if age.as_secs() > ttl_seconds {
        debug!(path = %self.path.display(), age_seconds = age.as_secs(), "cache is stale");
        return None;
      }
    }

    let raw = std::fs::read(&self.path).ok()?;

    match serde_json::from_slice(&raw) {
      Ok(v) => Some(v),
      Err(err) => {
        debug!(path = %self.path.display(), %err, "ignoring corrupt cache");
        None
      }
    }
  }

  /// Persist a fresh response, pretty-printed so the file stays inspectable.
  pub fn store(&self, value: &serde_json::Value) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating cache dir {}", parent.display()))?;
      }
    }

    std::fs::write(&self.path, serde_json::to_vec_pretty(value)?)
      .with_context(|| format!("writing cache file {}", self.path.display()))
  }
}
