// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Isolated GitHub GraphQL helpers (token discovery, project items fetch)
// role: transport/github-api
// inputs: QueryVariables (login, project number, item cap); env GITHUB_TOKEN/GH_TOKEN; optional `gh` CLI for token fallback
// outputs: Raw project JSON for the caching and model layers
// side_effects: Network calls to api.github.com; spawns `gh` subprocess when needed
// invariants:
// - Token discovery prefers GITHUB_TOKEN, then GH_TOKEN, then `gh auth token`
// - Fetch failures are errors with context, never silent empties; the series must not be built from a partial fetch
// - SBD_TEST_PROJECT_JSON swaps in the env-backed mock (tests only)
// errors: Surfaced via anyhow with the endpoint in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result, bail};

pub const API_URL: &str = "https://api.github.com/graphql";

static QUERY: &str = include_str!("../resources/query.graphql");

/// Variables for the project items query, built once from the effective config.
#[derive(Debug, Clone)]
pub struct QueryVariables {
  pub login: String,
  pub number: i64,
  pub max_items: i64,
}

// --- Trait seam for the Projects API ---
pub trait ProjectsApi {
  fn fetch_items(&self, vars: &QueryVariables) -> Result<serde_json::Value>;
}

struct HttpProjectsApi {
  token: String,
}

impl ProjectsApi for HttpProjectsApi {
  fn fetch_items(&self, vars: &QueryVariables) -> Result<serde_json::Value> {
    let agent = ureq::AgentBuilder::new().build();

    let body = serde_json::json!({
      "query": QUERY,
      "variables": {
        "login": vars.login,
        "number": vars.number,
        "max_items": vars.max_items,
      },
    });

    let response = agent
      .post(API_URL)
      .set("Accept", "application/vnd.github+json")
      .set("User-Agent", "sprint-burndown")
      .set("Authorization", &format!("Bearer {}", self.token))
      .send_json(body)
      .with_context(|| format!("querying {}", API_URL))?;

    response.into_json().context("reading GraphQL response body")
  }
}

/// Env-backed stand-in so tests can drive the binary without network access.
struct EnvProjectsApi;

impl ProjectsApi for EnvProjectsApi {
  fn fetch_items(&self, _vars: &QueryVariables) -> Result<serde_json::Value> {
    let raw = std::env::var("SBD_TEST_PROJECT_JSON").context("SBD_TEST_PROJECT_JSON not set")?;
    serde_json::from_str(&raw).context("parsing SBD_TEST_PROJECT_JSON")
  }
}

pub fn env_wants_mock() -> bool {
  std::env::var("SBD_TEST_PROJECT_JSON").is_ok()
}

/// Discover a GitHub token: env vars first, then `gh auth token` if available.
pub fn discover_token() -> Option<String> {
  for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
    if let Ok(t) = std::env::var(var) {
      if !t.trim().is_empty() {
        return Some(t);
      }
    }
  }

  if let Ok(output) = std::process::Command::new("gh").args(["auth", "token"]).output() {
    if output.status.success() {
      let t = String::from_utf8_lossy(&output.stdout).trim().to_string();

      if !t.is_empty() {
        return Some(t);
      }
    }
  }

  None
}

/// Pick the API implementation for this run. The mock wins when its fixture
/// env var is present; otherwise a token is required up front.
pub fn client(token: Option<String>) -> Result<Box<dyn ProjectsApi>> {
  if env_wants_mock() {
    return Ok(Box::new(EnvProjectsApi));
  }

  match token {
    Some(token) => Ok(Box::new(HttpProjectsApi { token })),
    None => bail!("no GitHub token found: set GITHUB_TOKEN or GH_TOKEN, or sign in with `gh auth login`"),
  }
}
