//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A sandboxed release directory with stubbed external tools
pub struct ReleaseSandbox {
  _root: TempDir,
  pub path: PathBuf,
}

impl ReleaseSandbox {
  /// Create a new sandbox with an empty bin/ directory for stub tools
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    std::fs::create_dir_all(path.join("bin"))?;
    Ok(Self { _root: root, path })
  }

  /// Install a stub executable under bin/.
  ///
  /// Every stub appends its name to calls.log before running its body, so
  /// tests can assert on which tools ran and in what order.
  #[cfg(unix)]
  pub fn stub_tool(&self, name: &str, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = self.path.join("bin").join(name);
    let script = format!(
      "#!/bin/sh\necho {} >> \"{}\"\n{}\n",
      name,
      self.path.join("calls.log").display(),
      body
    );
    std::fs::write(&path, script)?;

    let mut perms = std::fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms)?;

    Ok(path)
  }

  /// Write shipit.toml into the sandbox
  pub fn write_config(&self, contents: &str) -> Result<()> {
    std::fs::write(self.path.join("shipit.toml"), contents)?;
    Ok(())
  }

  /// The tools that ran, in invocation order
  pub fn calls(&self) -> Vec<String> {
    std::fs::read_to_string(self.path.join("calls.log"))
      .map(|log| log.lines().map(String::from).collect())
      .unwrap_or_default()
  }

  /// File names currently in the dist directory, sorted
  pub fn dist_files(&self) -> Result<Vec<String>> {
    let dist = self.path.join("dist");
    if !dist.exists() {
      return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(&dist)? {
      let entry = entry?;
      if entry.path().is_file() {
        files.push(entry.file_name().to_string_lossy().into_owned());
      }
    }
    files.sort();
    Ok(files)
  }

  /// Check if a file exists
  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run the shipit binary in a directory, returning the raw output.
///
/// Does not assert success: several tests exercise failure paths and
/// check the exit status themselves.
pub fn run_shipit(cwd: &Path, args: &[&str]) -> Result<Output> {
  let shipit_bin = env!("CARGO_BIN_EXE_shipit");

  Command::new(shipit_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run shipit")
}

/// Run git in a directory, failing the test on a non-zero exit
#[cfg(unix)]
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}
