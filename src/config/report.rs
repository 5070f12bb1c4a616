//! The `config` command: regenerate the template and report on the
//! current configuration.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::loader::AppConfig;
use super::template::write_template;
use super::validate::{Validation, validate_required};
use crate::constants::{SECRETS_FILENAME, TEMPLATE_FILENAME};
use crate::credentials::Credentials;
use crate::env::Env;

/// Inputs for a `config` run. [`ConfigReport::new`] fills in the
/// production values; tests override individual fields.
#[derive(Debug, Clone)]
pub struct ConfigReport {
    pub template_path: PathBuf,
    pub secrets_path: PathBuf,
    /// Print the validation result as JSON instead of the text report.
    pub json: bool,
    /// Whether process environment variables take part in loading.
    /// When `false`, only the secrets file is read.
    pub process_env: bool,
}

impl ConfigReport {
    /// Report rooted at `dir` (the directory holding `.env` and `.env.template`).
    pub fn new(dir: &Path, json: bool) -> Self {
        Self {
            template_path: dir.join(TEMPLATE_FILENAME),
            secrets_path: dir.join(SECRETS_FILENAME),
            json,
            process_env: true,
        }
    }

    /// Write the template, then load and validate the configuration,
    /// printing the result to `out`.
    ///
    /// A failed validation is reported and still returns `Ok`. Errors are
    /// reserved for an unwritable template, an unreadable secrets file and
    /// malformed values.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Validation> {
        write_template(&self.template_path).context("failed to generate template")?;

        let env = if self.process_env {
            Env::with_dotenv(&self.secrets_path)
        } else {
            Env::dotenv_only(&self.secrets_path)
        }
        .context("failed to read secrets file")?;
        let config = AppConfig::load(&env).context("failed to load configuration")?;
        let validation = validate_required(&config);

        if self.json {
            let json = serde_json::to_string_pretty(&validation)
                .context("failed to serialize validation result")?;
            writeln!(out, "{json}")?;
            return Ok(validation);
        }

        writeln!(
            out,
            "  {} Created {}. Copy it to {SECRETS_FILENAME} and fill in your values.",
            "✔".green().bold(),
            self.template_path.display(),
        )?;
        write!(out, "{}", validation.render())?;

        if validation.is_ok() {
            let creds = Credentials::new(&config);
            writeln!(out, "         {}  {}", "endpoint:".cyan(), creds.sql_endpoint())?;
            writeln!(out, "         {}  {}", "database:".cyan(), creds.database())?;
            writeln!(out, "         {}     {}", "model:".cyan(), creds.model())?;
        }

        Ok(validation)
    }
}
