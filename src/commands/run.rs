//! `shipit run` - execute the release sequence
//!
//! Resolves the version, announces it, and runs the enabled steps in
//! order. The first failing step aborts the run; its exit code becomes
//! the process exit status and no later step executes.

use crate::commands::plan::print_plan;
use crate::core::config::ShipConfig;
use crate::core::context::ReleaseContext;
use crate::core::error::ShipResult;
use crate::sequence::{ReleasePlan, Sequencer};
use std::env;

/// Run the release sequence (or show it with `--dry-run`)
pub fn run_release(dry_run: bool) -> ShipResult<()> {
  let cwd = env::current_dir()?;
  let config = ShipConfig::load_or_default(&cwd)?;

  let ctx = ReleaseContext::resolve(&config)?;
  let plan = ReleasePlan::build(&config, &ctx);

  println!("🚀 Releasing v{} ({} branch)", ctx.version, ctx.branch);
  println!();

  if dry_run {
    print_plan(&plan);
    println!();
    println!("🔍 Dry-run mode (no steps executed)");
    return Ok(());
  }

  let sequencer = Sequencer::new(&config, &ctx);
  sequencer.execute(&plan)?;

  println!();
  println!("✅ Release v{} complete!", ctx.version);
  Ok(())
}
