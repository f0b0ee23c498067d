//! Core building blocks for shipit
//!
//! - **config**: shipit.toml parsing, defaults, and validation
//! - **context**: the resolved version and branch label for one run
//! - **error**: error types with help messages and exit codes

pub mod config;
pub mod context;
pub mod error;
