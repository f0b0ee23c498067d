//! Tests for the `plan` command and `run --dry-run`
//!
//! These use a pinned version, so no external tool is ever invoked and
//! the tests run without any stubs on the sandbox.

use crate::helpers::{ReleaseSandbox, run_shipit};
use anyhow::Result;

const PINNED_CONFIG: &str = r#"
[release]
version = "1.2.3"
branch = "v1"
"#;

#[test]
fn test_plan_lists_all_steps_with_markers() -> Result<()> {
  let ws = ReleaseSandbox::new()?;
  ws.write_config(PINNED_CONFIG)?;

  let output = run_shipit(&ws.path, &["plan"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(output.status.success(), "plan failed: {}", stdout);
  for step in ["test", "clean", "package", "publish", "tag"] {
    assert!(stdout.contains(step), "plan should list '{}': {}", step, stdout);
  }
  assert!(stdout.contains("disabled"), "plan should mark disabled steps: {}", stdout);
  assert!(stdout.contains("1.2.3"));
  assert!(stdout.contains("v1"));

  Ok(())
}

#[test]
fn test_plan_json_is_machine_readable() -> Result<()> {
  let ws = ReleaseSandbox::new()?;
  ws.write_config(PINNED_CONFIG)?;

  let output = run_shipit(&ws.path, &["plan", "--json"])?;
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(json["version"], "1.2.3");
  assert_eq!(json["branch"], "v1");

  let steps = json["steps"].as_array().expect("steps should be an array");
  assert_eq!(steps.len(), 5);
  assert_eq!(steps[0]["kind"], "test");
  assert_eq!(steps[0]["enabled"], false);
  assert_eq!(steps[1]["kind"], "clean");
  assert_eq!(steps[1]["enabled"], true);
  assert_eq!(steps[4]["kind"], "tag");

  Ok(())
}

#[test]
fn test_dry_run_executes_nothing() -> Result<()> {
  let ws = ReleaseSandbox::new()?;
  ws.write_config(PINNED_CONFIG)?;

  // Plant stale artifacts: a dry run must not even clean
  std::fs::create_dir_all(ws.path.join("dist"))?;
  std::fs::write(ws.path.join("dist/stale-0.9.0.whl"), b"old")?;

  let output = run_shipit(&ws.path, &["run", "--dry-run"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(output.status.success(), "dry run failed: {}", stdout);
  assert!(stdout.contains("Dry-run"), "should announce dry-run mode: {}", stdout);
  assert!(ws.file_exists("dist/stale-0.9.0.whl"), "dry run must not touch dist");

  Ok(())
}

#[test]
fn test_bad_config_is_a_user_error() -> Result<()> {
  let ws = ReleaseSandbox::new()?;
  ws.write_config("[commands]\npublish = []\n")?;

  let output = run_shipit(&ws.path, &["plan"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("publish"), "stderr was: {}", stderr);

  Ok(())
}
