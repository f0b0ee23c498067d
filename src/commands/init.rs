//! `shipit init` - scaffold a shipit.toml
//!
//! Writes a commented template rather than serializing the defaults, so
//! the scaffold doubles as the configuration reference.

use crate::core::config::{CONFIG_FILE, ShipConfig};
use crate::core::error::{ShipError, ShipResult};
use std::env;
use std::fs;

const DEFAULT_CONFIG: &str = r#"# shipit release configuration
#
# Every field is optional; the defaults below describe a Python-style
# packaging flow. Point the commands at whatever build and upload tools
# your project uses.

[release]
# Informational release-line label shown in status output.
branch = "main"
# Fixed version for this release line. Remove the comment to pin it;
# otherwise the version command below is queried at run time.
# version = "1.2.3"

[paths]
build = "build"
dist = "dist"

[commands]
# Prints the current version on stdout.
version = ["python", "setup.py", "--version"]
# Writes source and wheel distributions into the dist directory.
package = ["python", "setup.py", "sdist", "bdist_wheel"]
# Receives every file in the dist directory as arguments.
publish = ["twine", "upload"]
# Only used when the test step is enabled below.
test = ["pytest"]

[steps]
# Disabled steps stay in the plan but never execute.
test = false
tag = false
"#;

/// Write the default configuration file
pub fn run_init(force: bool) -> ShipResult<()> {
  let cwd = env::current_dir()?;

  if ShipConfig::exists(&cwd) && !force {
    return Err(ShipError::with_help(
      format!("{} already exists", CONFIG_FILE),
      "Use --force to overwrite the existing configuration.",
    ));
  }

  fs::write(cwd.join(CONFIG_FILE), DEFAULT_CONFIG)?;

  println!("✅ Wrote {}", CONFIG_FILE);
  println!();
  println!("Next steps:");
  println!("  1. Point [commands] at your build and upload tools");
  println!("  2. Run the release: shipit");
  Ok(())
}
