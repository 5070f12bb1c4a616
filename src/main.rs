//! finnexus: configuration and first-run setup CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use finnexus::config::ConfigReport;
use finnexus::constants;
use finnexus::setup::Setup;

use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::args::{Cli, Command, ConfigArgs, SetupArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli.command {
        Command::Config(args) => run_config(args),
        Command::Setup(args) => run_setup(args),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    println!("{}      {}", "rustc:".dimmed(), constants::RUSTC_VERSION);
    Ok(())
}

/// Write the template, then report on the current configuration.
///
/// Exits successfully whether or not validation passes.
fn run_config(args: ConfigArgs) -> Result<()> {
    let report = ConfigReport::new(&args.dir, args.json);
    let mut stdout = std::io::stdout().lock();
    report.run(&mut stdout)?;
    Ok(())
}

/// Run the first-run setup sequence.
fn run_setup(args: SetupArgs) -> Result<()> {
    let setup = Setup::new(&args.dir);
    let mut stdout = std::io::stdout().lock();
    setup.run(&mut stdout)?;
    Ok(())
}
