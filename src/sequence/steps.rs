//! Step implementations
//!
//! Each step wraps a single external tool or filesystem operation. Steps
//! that stream (test, package, publish) inherit stdio so the tool's own
//! diagnostics reach the operator verbatim; git output is captured and
//! surfaced through the error instead.

use crate::core::config::ShipConfig;
use crate::core::context::ReleaseContext;
use crate::core::error::{ShipError, ShipResult};
use crate::tools;
use std::fs;
use std::io;
use std::path::Path;

/// Run the test suite (only reached when the test step is enabled)
pub fn run_test(config: &ShipConfig) -> ShipResult<()> {
  println!("🧪 Running tests: {}", tools::render(&config.commands.test));
  tools::run_streamed("test", &config.commands.test)
}

/// Clear prior build artifacts from the build and dist directories.
///
/// A directory that is already absent is not an error.
pub fn run_clean(config: &ShipConfig) -> ShipResult<()> {
  println!(
    "🧹 Clearing {} and {}",
    config.paths.build.display(),
    config.paths.dist.display()
  );
  remove_dir_if_present(&config.paths.build)?;
  remove_dir_if_present(&config.paths.dist)?;
  Ok(())
}

fn remove_dir_if_present(path: &Path) -> ShipResult<()> {
  match fs::remove_dir_all(path) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
    Err(e) => Err(ShipError::step(
      "clean",
      format!("remove {}", path.display()),
      None,
      Some(e.to_string()),
    )),
  }
}

/// Build the source and wheel distributions into the dist directory
pub fn run_package(config: &ShipConfig) -> ShipResult<()> {
  println!("📦 Building distributions: {}", tools::render(&config.commands.package));
  tools::run_streamed("package", &config.commands.package)
}

/// Upload every file currently in the dist directory.
///
/// Files are sorted so repeated runs produce identical invocations. An
/// empty dist directory after a successful package step is a publish
/// failure rather than an upload-tool invocation with no files.
pub fn run_publish(config: &ShipConfig) -> ShipResult<()> {
  let artifacts = collect_artifacts(&config.paths.dist)?;

  if artifacts.is_empty() {
    return Err(ShipError::step(
      "publish",
      tools::render(&config.commands.publish),
      None,
      Some(format!(
        "no distribution artifacts found in {}",
        config.paths.dist.display()
      )),
    ));
  }

  println!(
    "⬆️  Uploading {} artifact(s) from {}",
    artifacts.len(),
    config.paths.dist.display()
  );

  let mut argv = config.commands.publish.clone();
  argv.extend(artifacts);
  tools::run_streamed("publish", &argv)
}

fn collect_artifacts(dist: &Path) -> ShipResult<Vec<String>> {
  let entries = match fs::read_dir(dist) {
    Ok(entries) => entries,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
    Err(e) => {
      return Err(ShipError::step(
        "publish",
        format!("read {}", dist.display()),
        None,
        Some(e.to_string()),
      ));
    }
  };

  let mut files = Vec::new();
  for entry in entries {
    let entry = entry.map_err(|e| {
      ShipError::step(
        "publish",
        format!("read {}", dist.display()),
        None,
        Some(e.to_string()),
      )
    })?;
    if entry.path().is_file() {
      files.push(entry.path().to_string_lossy().into_owned());
    }
  }

  files.sort();
  Ok(files)
}

/// Create an annotated tag for the release and push it to origin
pub fn run_tag(ctx: &ReleaseContext) -> ShipResult<()> {
  let tag = format!("v{}", ctx.version);
  println!("🏷️  Tagging release as {}", tag);

  git(&["tag", "-a", &tag, "-m", &format!("Release {}", tag)])?;
  git(&["push", "origin", &tag])?;
  Ok(())
}

fn git(args: &[&str]) -> ShipResult<()> {
  let argv: Vec<String> = std::iter::once("git".to_string())
    .chain(args.iter().map(|s| s.to_string()))
    .collect();
  tools::run_captured("tag", &argv).map(|_| ())
}
