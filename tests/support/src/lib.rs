//! test-support: fixtures and process helpers for driving the binary.
//!
//! Add as a dev-dependency in the top-level `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test_support = { path = "tests/support" }
//! ```

use std::path::{Path, PathBuf};

/// Build an `assert_cmd` command for the crate binary with the mock-API and
/// token env vars cleared, so each test opts in to exactly the data source it
/// wants.
pub fn cmd_bin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("sprint-burndown").expect("binary target not found");
    cmd.env_remove("SBD_TEST_PROJECT_JSON");
    cmd.env_remove("GITHUB_TOKEN");
    cmd.env_remove("GH_TOKEN");
    cmd
}

/// Write a config file into `dir` for sprint 7 over 2025-03-01..2025-03-03
/// and return its path. `extra` keys are merged on top.
pub fn write_config(dir: &Path, extra: serde_json::Value) -> PathBuf {
    let mut body = serde_json::json!({
        "user_name": "octocat",
        "project_number": 4,
        "max_items": 50,
        "sprint_data": {"sprint": 7, "start_date": "01-03-2025", "end_date": "03-03-2025"}
    });

    if let (Some(base), Some(add)) = (body.as_object_mut(), extra.as_object()) {
        for (k, v) in add {
            base.insert(k.clone(), v.clone());
        }
    }

    let path = dir.join("config.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&body).unwrap()).unwrap();
    path
}

/// A raw GraphQL response with the given item nodes, shaped like the live API.
pub fn project_response(nodes: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "data": {"user": {"projectV2": {"items": {"nodes": nodes}}}}
    })
}

/// One issue node. `labels` are applied in order; `sprint` becomes the
/// project's sprint number field when present.
pub fn issue_node(
    created: &str,
    closed: Option<&str>,
    labels: &[&str],
    sprint: Option<i64>,
) -> serde_json::Value {
    serde_json::json!({
        "content": {
            "title": "fixture issue",
            "createdAt": created,
            "closedAt": closed,
            "labels": {"nodes": labels.iter().map(|l| serde_json::json!({"name": l})).collect::<Vec<_>>()}
        },
        "sprint": sprint.map(|n| serde_json::json!({"number": n}))
    })
}

/// The standard five-node fixture most end-to-end tests use:
/// two countable tasks, a wrong-first-label issue, a wrong-sprint issue,
/// and a contentless draft item.
pub fn standard_fixture() -> serde_json::Value {
    project_response(serde_json::json!([
        issue_node("2025-02-20T10:00:00Z", None, &["task"], None),
        issue_node("2025-03-01T09:00:00.123Z", Some("2025-03-02T18:00:00Z"), &["task", "bug"], Some(7)),
        issue_node("2025-02-25T08:00:00Z", None, &["bug", "task"], None),
        issue_node("2025-03-01T12:00:00Z", None, &["task"], Some(5)),
        serde_json::json!({"content": null, "sprint": null}),
    ]))
}
