//! Configuration for shipit, stored in shipit.toml
//!
//! Every field has a default, so a partial file (or no file at all) still
//! yields a runnable configuration. The defaults describe a Python-style
//! packaging flow; projects point the commands at their own tools.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "shipit.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
  pub release: ReleaseConfig,
  pub paths: PathsConfig,
  pub commands: CommandsConfig,
  pub steps: StepsConfig,
}

/// Release identity: version source and release-line label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
  /// Fixed version for this release line; omit to query the build
  /// backend at run time instead
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,

  /// Informational label for the release line, shown in status output.
  /// Never validated against the version.
  pub branch: String,
}

impl Default for ReleaseConfig {
  fn default() -> Self {
    Self {
      version: None,
      branch: "main".to_string(),
    }
  }
}

/// Output directories, relative to the working directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
  pub build: PathBuf,
  pub dist: PathBuf,
}

impl Default for PathsConfig {
  fn default() -> Self {
    Self {
      build: PathBuf::from("build"),
      dist: PathBuf::from("dist"),
    }
  }
}

/// External tool invocations, as argv vectors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
  /// Prints the current version on stdout
  pub version: Vec<String>,

  /// Runs the test suite (only used when the test step is enabled)
  pub test: Vec<String>,

  /// Builds source and wheel distributions into the dist directory
  pub package: Vec<String>,

  /// Uploads artifacts; every file in the dist directory is appended
  /// as an argument
  pub publish: Vec<String>,
}

impl Default for CommandsConfig {
  fn default() -> Self {
    Self {
      version: argv(&["python", "setup.py", "--version"]),
      test: argv(&["pytest"]),
      package: argv(&["python", "setup.py", "sdist", "bdist_wheel"]),
      publish: argv(&["twine", "upload"]),
    }
  }
}

/// Enabled flags for the toggleable steps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StepsConfig {
  /// Run the test suite before cleaning
  pub test: bool,

  /// Tag the release and push the tag after publishing
  pub tag: bool,
}

fn argv(parts: &[&str]) -> Vec<String> {
  parts.iter().map(|s| s.to_string()).collect()
}

impl ShipConfig {
  /// Load config from shipit.toml in the given directory
  pub fn load(dir: &Path) -> Result<Self> {
    let config_path = dir.join(CONFIG_FILE);
    let content =
      fs::read_to_string(&config_path).with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: ShipConfig =
      toml::from_str(&content).with_context(|| format!("Failed to parse {}", config_path.display()))?;
    config.validate()?;
    Ok(config)
  }

  /// Load config if the file exists, otherwise fall back to the defaults
  /// so the bare no-config invocation still works
  pub fn load_or_default(dir: &Path) -> Result<Self> {
    if Self::exists(dir) { Self::load(dir) } else { Ok(Self::default()) }
  }

  /// Save config to shipit.toml in the given directory
  pub fn save(&self, dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);
    let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
  }

  /// Check if a config file exists in the given directory
  pub fn exists(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
  }

  /// Validate the configuration
  pub fn validate(&self) -> Result<()> {
    for (name, command) in [
      ("commands.version", &self.commands.version),
      ("commands.test", &self.commands.test),
      ("commands.package", &self.commands.package),
      ("commands.publish", &self.commands.publish),
    ] {
      if command.is_empty() {
        bail!("{} must not be empty", name);
      }
      if command[0].trim().is_empty() {
        bail!("{} has an empty program name", name);
      }
    }

    if self.paths.build.as_os_str().is_empty() {
      bail!("paths.build must not be empty");
    }
    if self.paths.dist.as_os_str().is_empty() {
      bail!("paths.dist must not be empty");
    }

    Ok(())
  }
}
