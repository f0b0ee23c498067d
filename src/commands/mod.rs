//! CLI commands for shipit
//!
//! This module contains all user-facing command implementations:
//!
//! - **run**: Execute the full release sequence (the default command)
//! - **plan**: Show the resolved step plan, as text or JSON
//! - **init**: Write a default shipit.toml to the current directory

pub mod init;
pub mod plan;
pub mod run;

pub use init::run_init;
pub use plan::run_plan;
pub use run::run_release;
