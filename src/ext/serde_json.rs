// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Provide nested JSON fetching via dotted paths for serde_json::Value
// role: extension/serde_json
// outputs: JsonFetch trait resolving "a.b.c" paths to Option<&Value>
// invariants: No panics; missing path segments yield None
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

/// Fetch nested values via dotted paths like `"data.user.projectV2"`.
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> Option<&serde_json::Value>;
}

impl JsonFetch for serde_json::Value {
  fn fetch(&self, path: &str) -> Option<&serde_json::Value> {
    if path.is_empty() {
      return Some(self);
    }

    let mut cur = self;

    for key in path.split('.') {
      cur = cur.get(key)?;
    }

    Some(cur)
  }
}
