mod commands;
mod core;
mod sequence;
mod tools;

use crate::core::error::{ShipError, print_error};
use clap::{Parser, Subcommand};

/// Fail-fast release sequencing: clean, package, and upload distribution artifacts
#[derive(Parser)]
#[command(name = "shipit")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct ShipCli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the full release sequence (also the default with no subcommand)
  Run {
    /// Show the step plan without executing anything
    #[arg(long)]
    dry_run: bool,
  },

  /// Show the resolved release plan
  Plan {
    /// Output the plan in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Write a default shipit.toml to the current directory
  Init {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = ShipCli::parse();

  // A bare `shipit` runs the whole sequence; everything else is opt-in
  let result = match cli.command {
    None => commands::run_release(false),
    Some(Commands::Run { dry_run }) => commands::run_release(dry_run),
    Some(Commands::Plan { json }) => commands::run_plan(json),
    Some(Commands::Init { force }) => commands::run_init(force),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ShipError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code());
}
