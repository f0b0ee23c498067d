//! The release step plan
//!
//! Steps are data, not code paths: the plan is a statically ordered list
//! where each entry carries an enabled flag, so re-enabling the test or
//! tag step is a configuration change rather than a code edit.

use crate::core::config::ShipConfig;
use crate::core::context::ReleaseContext;
use serde::Serialize;

/// The authored release steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
  Test,
  Clean,
  Package,
  Publish,
  Tag,
}

impl StepKind {
  /// Short name used in status lines and errors
  pub fn name(self) -> &'static str {
    match self {
      StepKind::Test => "test",
      StepKind::Clean => "clean",
      StepKind::Package => "package",
      StepKind::Publish => "publish",
      StepKind::Tag => "tag",
    }
  }

  /// One-line description for plan output
  pub fn describe(self) -> &'static str {
    match self {
      StepKind::Test => "run the test suite",
      StepKind::Clean => "clear prior build artifacts",
      StepKind::Package => "build source and wheel distributions",
      StepKind::Publish => "upload artifacts to the package index",
      StepKind::Tag => "tag the release and push the tag",
    }
  }
}

/// One authored step with its enabled flag
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
  pub kind: StepKind,
  pub enabled: bool,
}

/// The resolved plan for a single release run
#[derive(Debug, Clone, Serialize)]
pub struct ReleasePlan {
  pub version: String,
  pub branch: String,
  pub steps: Vec<Step>,
}

impl ReleasePlan {
  /// Build the plan: the fixed order with test and tag toggled from config
  pub fn build(config: &ShipConfig, ctx: &ReleaseContext) -> Self {
    let steps = vec![
      Step {
        kind: StepKind::Test,
        enabled: config.steps.test,
      },
      Step {
        kind: StepKind::Clean,
        enabled: true,
      },
      Step {
        kind: StepKind::Package,
        enabled: true,
      },
      Step {
        kind: StepKind::Publish,
        enabled: true,
      },
      Step {
        kind: StepKind::Tag,
        enabled: config.steps.tag,
      },
    ];

    Self {
      version: ctx.version.clone(),
      branch: ctx.branch.clone(),
      steps,
    }
  }

  /// The steps that will actually execute, in order
  pub fn active_steps(&self) -> impl Iterator<Item = &Step> {
    self.steps.iter().filter(|s| s.enabled)
  }
}
