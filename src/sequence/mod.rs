//! Release sequencing: the ordered step plan and its fail-fast executor
//!
//! - **plan**: the fixed, ordered list of authored steps with enabled flags
//! - **steps**: one implementation per step, each wrapping one external
//!   tool or filesystem operation

pub mod plan;
pub mod steps;

pub use plan::{ReleasePlan, Step, StepKind};

use crate::core::config::ShipConfig;
use crate::core::context::ReleaseContext;
use crate::core::error::ShipResult;

/// Executes a release plan step by step, stopping at the first failure.
///
/// Any step returning an error terminates the run immediately; no later
/// step executes. The caller forwards the error's exit code as the
/// process exit status.
pub struct Sequencer<'a> {
  config: &'a ShipConfig,
  ctx: &'a ReleaseContext,
}

impl<'a> Sequencer<'a> {
  pub fn new(config: &'a ShipConfig, ctx: &'a ReleaseContext) -> Self {
    Self { config, ctx }
  }

  /// Run every enabled step of the plan, in order
  pub fn execute(&self, plan: &ReleasePlan) -> ShipResult<()> {
    for step in plan.active_steps() {
      self.run_step(step.kind)?;
    }
    Ok(())
  }

  fn run_step(&self, kind: StepKind) -> ShipResult<()> {
    match kind {
      StepKind::Test => steps::run_test(self.config),
      StepKind::Clean => steps::run_clean(self.config),
      StepKind::Package => steps::run_package(self.config),
      StepKind::Publish => steps::run_publish(self.config),
      StepKind::Tag => steps::run_tag(self.ctx),
    }
  }
}
