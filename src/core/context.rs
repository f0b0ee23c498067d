//! Release context - resolve once, pass everywhere
//!
//! The context holds the version and branch label for a single run. It is
//! constructed before the step loop and read-only afterwards, so tests can
//! inject fixed values through configuration instead of ambient state.

use crate::core::config::ShipConfig;
use crate::core::error::{ShipError, ShipResult};
use crate::tools;

/// Immutable context for a single release run
#[derive(Debug, Clone)]
pub struct ReleaseContext {
  /// The version being released
  pub version: String,

  /// Informational release-line label
  pub branch: String,
}

impl ReleaseContext {
  /// Resolve the version and capture the branch label.
  ///
  /// The version is either the literal from configuration or the trimmed
  /// stdout of the version-query command. A query that prints nothing is
  /// an error; a query that fails aborts the run before any step executes.
  pub fn resolve(config: &ShipConfig) -> ShipResult<Self> {
    let version = match &config.release.version {
      Some(literal) => literal.trim().to_string(),
      None => tools::run_captured("resolve-version", &config.commands.version)?,
    };

    if version.is_empty() {
      return Err(ShipError::with_help(
        "Resolved an empty version string",
        "Set release.version in shipit.toml, or make the version command print the version on stdout.",
      ));
    }

    Ok(Self {
      version,
      branch: config.release.branch.clone(),
    })
  }
}
