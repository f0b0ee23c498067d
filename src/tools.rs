//! Subprocess helpers for the external release tools
//!
//! Two execution modes, matching how the tools report problems:
//! `run_streamed` inherits stdio so a tool's diagnostics reach the operator
//! verbatim, while `run_captured` collects stdout for tools whose output is
//! an answer (the version query) and forwards stderr into the error.

use crate::core::error::{ShipError, ShipResult};
use std::process::Command;

/// Render an argv vector for status lines and error messages
pub fn render(argv: &[String]) -> String {
  argv.join(" ")
}

/// Run a tool with inherited stdio, failing fast on a non-zero exit.
///
/// The tool's own stdout/stderr go straight to the terminal; the returned
/// error only carries the exit status.
pub fn run_streamed(step: &'static str, argv: &[String]) -> ShipResult<()> {
  let (program, args) = split(step, argv)?;

  let status = Command::new(program)
    .args(args)
    .status()
    .map_err(|e| ShipError::step(step, render(argv), None, Some(format!("failed to launch: {}", e))))?;

  if !status.success() {
    return Err(ShipError::step(step, render(argv), status.code(), None));
  }

  Ok(())
}

/// Run a tool and capture its stdout, trimmed.
///
/// On failure the tool's stderr is carried in the error so it still reaches
/// the operator verbatim.
pub fn run_captured(step: &'static str, argv: &[String]) -> ShipResult<String> {
  let (program, args) = split(step, argv)?;

  let output = Command::new(program)
    .args(args)
    .output()
    .map_err(|e| ShipError::step(step, render(argv), None, Some(format!("failed to launch: {}", e))))?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let detail = if stderr.is_empty() { None } else { Some(stderr) };
    return Err(ShipError::step(step, render(argv), output.status.code(), detail));
  }

  Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn split<'a>(step: &'static str, argv: &'a [String]) -> ShipResult<(&'a String, &'a [String])> {
  match argv.split_first() {
    Some(parts) => Ok(parts),
    None => Err(ShipError::step(step, "<empty command>", None, None)),
  }
}
