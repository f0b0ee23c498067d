//! `shipit plan` - show the resolved release plan

use crate::core::config::ShipConfig;
use crate::core::context::ReleaseContext;
use crate::core::error::ShipResult;
use crate::sequence::ReleasePlan;
use std::env;

/// Show the step plan, as text or JSON
pub fn run_plan(json: bool) -> ShipResult<()> {
  let cwd = env::current_dir()?;
  let config = ShipConfig::load_or_default(&cwd)?;

  let ctx = ReleaseContext::resolve(&config)?;
  let plan = ReleasePlan::build(&config, &ctx);

  if json {
    println!("{}", serde_json::to_string_pretty(&plan)?);
    return Ok(());
  }

  println!("📋 Release Plan");
  println!();
  println!("  Version: {}", plan.version);
  println!("  Branch:  {}", plan.branch);
  println!();
  print_plan(&plan);
  println!();
  println!("Disabled steps can be enabled under [steps] in shipit.toml.");

  Ok(())
}

/// Render the step list (shared with `run --dry-run`)
pub fn print_plan(plan: &ReleasePlan) {
  println!("  Steps:");
  for step in &plan.steps {
    let marker = if step.enabled { "▶" } else { "⏸" };
    let suffix = if step.enabled { "" } else { " (disabled)" };
    println!("    {} {} - {}{}", marker, step.kind.name(), step.kind.describe(), suffix);
  }
}
