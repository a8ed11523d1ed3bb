use test_support::{cmd_bin, issue_node, project_response, standard_fixture, write_config};

fn run_with_fixture(config: &std::path::Path, fixture: serde_json::Value, extra_args: &[&str]) -> serde_json::Value {
  let out = cmd_bin()
    .arg("--config")
    .arg(config)
    .args(extra_args)
    .env("SBD_TEST_PROJECT_JSON", fixture.to_string())
    .output()
    .unwrap();

  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn standard_fixture_produces_expected_series() {
  let td = tempfile::TempDir::new().unwrap();
  let config = write_config(td.path(), serde_json::json!({}));

  let v = run_with_fixture(&config, standard_fixture(), &[]);

  // Of the five nodes: the wrong-first-label issue, the sprint-5 issue and
  // the contentless draft all drop; two countable tasks remain.
  assert_eq!(v["sprint"], 7);
  assert_eq!(v["window"]["start"], "2025-03-01");
  assert_eq!(v["window"]["end"], "2025-03-03");
  assert_eq!(v["total_issues"], 2);
  assert_eq!(v["days"], serde_json::json!(["2025-03-01", "2025-03-02", "2025-03-03"]));
  assert_eq!(v["open_counts"], serde_json::json!([2, 2, 1]));
  assert_eq!(v["ideal_counts"], serde_json::json!([2.0, 1.0, 0.0]));

  // The fresh response lands in the cache next to the config file.
  assert!(td.path().join("data.json").exists());
}

#[test]
fn any_label_flag_admits_issues_with_task_anywhere() {
  let td = tempfile::TempDir::new().unwrap();
  let config = write_config(td.path(), serde_json::json!({}));

  let v = run_with_fixture(&config, standard_fixture(), &["--any-label"]);

  // The ["bug", "task"] issue now counts too.
  assert_eq!(v["total_issues"], 3);
  assert_eq!(v["open_counts"], serde_json::json!([3, 3, 2]));
}

#[test]
fn strict_open_flag_respects_the_creation_boundary() {
  let td = tempfile::TempDir::new().unwrap();
  let config = write_config(td.path(), serde_json::json!({}));
  let fixture = project_response(serde_json::json!([
    issue_node("2025-03-02T08:00:00Z", None, &["task"], None),
  ]));

  let default = run_with_fixture(&config, fixture.clone(), &["--refresh"]);
  assert_eq!(default["open_counts"], serde_json::json!([1, 1, 1]));

  let strict = run_with_fixture(&config, fixture, &["--refresh", "--strict-open"]);
  assert_eq!(strict["open_counts"], serde_json::json!([0, 1, 1]));
}

#[test]
fn missing_created_at_contributes_nothing() {
  let td = tempfile::TempDir::new().unwrap();
  let config = write_config(td.path(), serde_json::json!({}));
  let fixture = project_response(serde_json::json!([
    {"content": {"title": "no timeline", "closedAt": null, "labels": {"nodes": [{"name": "task"}]}}, "sprint": null},
  ]));

  let v = run_with_fixture(&config, fixture, &[]);
  assert_eq!(v["total_issues"], 0);
  assert_eq!(v["open_counts"], serde_json::json!([0, 0, 0]));
}

#[test]
fn single_day_window_has_flat_ideal_line() {
  let td = tempfile::TempDir::new().unwrap();
  let config = write_config(td.path(), serde_json::json!({}));
  let fixture = project_response(serde_json::json!([
    issue_node("2025-02-20T10:00:00Z", None, &["task"], None),
  ]));

  let v = run_with_fixture(&config, fixture, &["--start", "01-03-2025", "--end", "01-03-2025"]);
  assert_eq!(v["days"], serde_json::json!(["2025-03-01"]));
  assert_eq!(v["open_counts"], serde_json::json!([1]));
  assert_eq!(v["ideal_counts"], serde_json::json!([1.0]));
}

#[test]
fn out_flag_writes_the_report_file() {
  let td = tempfile::TempDir::new().unwrap();
  let config = write_config(td.path(), serde_json::json!({}));
  let out_path = td.path().join("reports/sprint-7.json");

  cmd_bin()
    .arg("--config")
    .arg(&config)
    .arg("--out")
    .arg(&out_path)
    .env("SBD_TEST_PROJECT_JSON", standard_fixture().to_string())
    .assert()
    .success();

  let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&out_path).unwrap()).unwrap();
  assert_eq!(v["open_counts"], serde_json::json!([2, 2, 1]));
}

#[test]
fn chart_flag_renders_an_svg() {
  let td = tempfile::TempDir::new().unwrap();
  let config = write_config(td.path(), serde_json::json!({}));
  let chart_path = td.path().join("burndown.svg");

  cmd_bin()
    .arg("--config")
    .arg(&config)
    .arg("--chart")
    .arg(&chart_path)
    .env("SBD_TEST_PROJECT_JSON", standard_fixture().to_string())
    .assert()
    .success();

  let svg = std::fs::read_to_string(&chart_path).unwrap();
  assert!(svg.contains("<svg"));
  assert!(svg.contains("Sprint 7 Burndown Chart"));
}
