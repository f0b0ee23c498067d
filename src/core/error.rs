//! Error types for shipit with contextual messages and exit codes
//!
//! Step failures keep the exit code the external tool signaled, so the
//! process can forward it unchanged. Everything else falls into a small
//! set of categories with fixed codes.

use std::fmt;
use std::io;

/// Exit codes for shipit errors that carry no tool status of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args)
  User = 1,
  /// System error (I/O, unlaunchable command, tool killed by signal)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for shipit
#[derive(Debug)]
pub enum ShipError {
  /// A release step failed
  Step(StepError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional help
  Message { message: String, help: Option<String> },
}

/// A failed release step: which step, what ran, and how it exited
#[derive(Debug)]
pub struct StepError {
  pub step: &'static str,
  pub command: String,
  /// Exit code the tool signaled; `None` when it was killed by a signal
  /// or could not be launched at all
  pub code: Option<i32>,
  /// Captured diagnostics, for tools that did not stream to the terminal
  pub detail: Option<String>,
}

impl ShipError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  /// Create a step failure
  pub fn step(step: &'static str, command: impl Into<String>, code: Option<i32>, detail: Option<String>) -> Self {
    ShipError::Step(StepError {
      step,
      command: command.into(),
      code,
      detail,
    })
  }

  /// The exit code for this error.
  ///
  /// A failed step forwards the tool's own status; everything else maps
  /// to a category code.
  pub fn exit_code(&self) -> i32 {
    match self {
      ShipError::Step(e) => e.code.filter(|c| *c > 0).unwrap_or(ExitCode::System.as_i32()),
      ShipError::Io(_) => ExitCode::System.as_i32(),
      ShipError::Message { .. } => ExitCode::User.as_i32(),
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ShipError::Step(e) => e.help_message(),
      ShipError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl StepError {
  fn help_message(&self) -> Option<String> {
    match self.step {
      "publish" => Some(
        "Check the upload tool's credentials and the package index, then re-run the release. \
         The clean step makes a full re-run safe."
          .to_string(),
      ),
      "resolve-version" => Some("Set release.version in shipit.toml to skip the version query.".to_string()),
      _ => None,
    }
  }
}

impl fmt::Display for ShipError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ShipError::Step(e) => write!(f, "{}", e),
      ShipError::Io(e) => write!(f, "I/O error: {}", e),
      ShipError::Message { message, .. } => write!(f, "{}", message),
    }
  }
}

impl fmt::Display for StepError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "step '{}' failed: {}", self.step, self.command)?;
    match self.code {
      Some(code) => write!(f, " (exit code {})", code)?,
      None => write!(f, " (no exit code)")?,
    }
    if let Some(detail) = &self.detail {
      write!(f, "\n{}", detail)?;
    }
    Ok(())
  }
}

impl std::error::Error for ShipError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ShipError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ShipError {
  fn from(err: io::Error) -> Self {
    ShipError::Io(err)
  }
}

impl From<String> for ShipError {
  fn from(msg: String) -> Self {
    ShipError::message(msg)
  }
}

impl From<&str> for ShipError {
  fn from(msg: &str) -> Self {
    ShipError::message(msg)
  }
}

impl From<serde_json::Error> for ShipError {
  fn from(err: serde_json::Error) -> Self {
    ShipError::message(format!("JSON error: {}", err))
  }
}

/// Convert anyhow::Error to ShipError (config layer uses anyhow)
impl From<anyhow::Error> for ShipError {
  fn from(err: anyhow::Error) -> Self {
    ShipError::message(format!("{:#}", err))
  }
}

/// Result type alias for shipit
pub type ShipResult<T> = Result<T, ShipError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ShipError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
