//! First-run setup: toolchain and dependency checks, secrets file
//! bootstrap, and a configuration completeness check.
//!
//! Every step reports to a caller-supplied writer. Problems are reported
//! there and end the run with an outcome rather than an error, so
//! re-running the whole sequence is always safe.

pub mod deps;
pub mod env_file;
pub mod toolchain;

use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use thiserror::Error;

use crate::config::{AppConfig, Validation, validate_required};
use crate::constants::{self, APP_NAME, SECRETS_FILENAME, TEMPLATE_FILENAME};
use crate::env::Env;

pub use deps::{DependencyReport, check_dependencies};
pub use env_file::{EnvFileStatus, bootstrap_env_file};
pub use toolchain::check_toolchain;

/// Errors that can occur during setup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Rust {minimum}+ is required, but this binary was built with {found}")]
    UnsupportedToolchain { found: String, minimum: String },

    #[error("failed to parse build manifest: {0}")]
    Manifest(#[source] toml::de::Error),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write setup output: {0}")]
    Output(#[from] std::io::Error),
}

/// How a setup run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Stopped at the toolchain check.
    UnsupportedToolchain { found: String, minimum: String },
    /// Stopped after the dependency check.
    MissingDependencies(Vec<String>),
    /// Configuration could not be loaded (e.g. malformed port or env file).
    ConfigError(String),
    /// Required variables still hold placeholders.
    Incomplete(Validation),
    /// Everything is in place.
    Complete,
}

/// Inputs for a setup run. [`Setup::new`] fills in the production values;
/// tests override individual fields.
#[derive(Debug, Clone)]
pub struct Setup {
    pub secrets_path: PathBuf,
    pub template_path: PathBuf,
    pub rustc_version: String,
    pub min_rust_version: String,
    pub manifest: String,
    pub required_crates: Vec<String>,
    /// Whether process environment variables take part in the
    /// configuration check. When `false`, only the secrets file is read.
    pub process_env: bool,
}

impl Setup {
    /// Setup rooted at `dir` (the directory holding `.env` and `.env.template`).
    pub fn new(dir: &Path) -> Self {
        Self {
            secrets_path: dir.join(SECRETS_FILENAME),
            template_path: dir.join(TEMPLATE_FILENAME),
            rustc_version: constants::RUSTC_VERSION.to_string(),
            min_rust_version: constants::MIN_RUST_VERSION.to_string(),
            manifest: deps::BUILD_MANIFEST.to_string(),
            required_crates: deps::REQUIRED_CRATES.iter().map(|s| s.to_string()).collect(),
            process_env: true,
        }
    }

    /// Run the full sequence, writing progress to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SetupOutcome, SetupError> {
        writeln!(out, "{}", format!("{} setup", constants::PRODUCT_NAME).bold())?;
        writeln!(out, "{}", "=".repeat(40))?;

        // Step 1: toolchain
        let version = match check_toolchain(&self.rustc_version, &self.min_rust_version) {
            Ok(version) => version,
            Err(SetupError::UnsupportedToolchain { found, minimum }) => {
                writeln!(
                    out,
                    "  {} Rust {minimum}+ is required, but this binary was built with {found}.",
                    "✖".red().bold()
                )?;
                return Ok(SetupOutcome::UnsupportedToolchain { found, minimum });
            }
            Err(e) => return Err(e),
        };
        writeln!(
            out,
            "  {} Rust toolchain {version} is compatible.",
            "✔".green().bold()
        )?;

        // Step 2: dependencies
        let required: Vec<&str> = self.required_crates.iter().map(String::as_str).collect();
        let report = check_dependencies(&self.manifest, &required)?;
        write!(out, "{}", report.render())?;
        if !report.is_ok() {
            return Ok(SetupOutcome::MissingDependencies(report.missing().to_vec()));
        }

        // Step 3: secrets file
        let status = bootstrap_env_file(&self.secrets_path, &self.template_path)?;
        write!(out, "{}", render_env_file_status(status))?;

        // Step 4: configuration
        let outcome = match self.check_configuration() {
            Ok(validation) => {
                write!(out, "{}", validation.render())?;
                if validation.is_ok() {
                    writeln!(out, "  {} Configuration is properly set up.", "✔".green().bold())?;
                    SetupOutcome::Complete
                } else {
                    writeln!(out, "  {} Configuration needs to be updated.", "✖".red().bold())?;
                    SetupOutcome::Incomplete(validation)
                }
            }
            Err(e) => {
                let message = format!("{e:#}");
                writeln!(
                    out,
                    "  {} Error checking configuration: {message}",
                    "✖".red().bold()
                )?;
                SetupOutcome::ConfigError(message)
            }
        };

        // Step 5: summary
        write!(out, "{}", render_summary(&outcome))?;
        Ok(outcome)
    }

    fn check_configuration(&self) -> anyhow::Result<Validation> {
        let env = if self.process_env {
            Env::with_dotenv(&self.secrets_path)?
        } else {
            Env::dotenv_only(&self.secrets_path)?
        };
        let config = AppConfig::load(&env)?;
        Ok(validate_required(&config))
    }
}

fn render_env_file_status(status: EnvFileStatus) -> String {
    match status {
        EnvFileStatus::AlreadyExists => {
            format!("  {} {SECRETS_FILENAME} file already exists.\n", "✔".green().bold())
        }
        EnvFileStatus::Created => format!(
            "  {} Created {SECRETS_FILENAME} file from template.\n  {} Please edit {SECRETS_FILENAME} with your actual credentials.\n",
            "✔".green().bold(),
            "⚠".yellow().bold(),
        ),
        EnvFileStatus::TemplateMissing => format!(
            "  {} {TEMPLATE_FILENAME} not found. Please run '{APP_NAME} config' first.\n",
            "✖".red().bold(),
        ),
    }
}

fn render_summary(outcome: &SetupOutcome) -> String {
    match outcome {
        SetupOutcome::Complete => format!(
            "\n  {} Setup complete! You can now start the application.\n",
            "🎉".bold()
        ),
        _ => format!(
            "\n  {}\n  1. Edit {SECRETS_FILENAME} with your credentials\n  2. Run '{APP_NAME} config' to validate configuration\n  3. Start the application\n",
            "Next steps:".bold()
        ),
    }
}
