//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Configuration and first-run setup for FinancialNexus.
#[derive(Parser, Debug)]
#[command(
    name = "finnexus",
    version = finnexus::constants::VERSION,
    about = "Configuration and first-run setup for FinancialNexus",
)]
pub struct Cli {
    /// Enable debug diagnostics on stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate .env.template and validate the current configuration.
    Config(ConfigArgs),

    /// Check the build, create .env from the template, and validate it.
    Setup(SetupArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `config` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Directory holding .env and .env.template (default: current directory).
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Print the validation result as JSON instead of a report.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Arguments for the `setup` subcommand.
#[derive(Parser, Debug)]
pub struct SetupArgs {
    /// Directory holding .env and .env.template (default: current directory).
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_current_directory() {
        let cli = Cli::parse_from(["finnexus", "config"]);
        match cli.command {
            Command::Config(args) => {
                assert_eq!(args.dir, PathBuf::from("."));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn config_accepts_dir_and_json() {
        let cli = Cli::parse_from(["finnexus", "config", "--dir", "/srv/app", "--json"]);
        match cli.command {
            Command::Config(args) => {
                assert_eq!(args.dir, PathBuf::from("/srv/app"));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn setup_parses_dir() {
        let cli = Cli::parse_from(["finnexus", "setup", "--dir", "deploy"]);
        match cli.command {
            Command::Setup(args) => assert_eq!(args.dir, PathBuf::from("deploy")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::parse_from(["finnexus", "setup", "-v"]);
        assert!(cli.verbose);
        let cli = Cli::parse_from(["finnexus", "--verbose", "version"]);
        assert!(cli.verbose);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["finnexus"]).is_err());
    }
}
