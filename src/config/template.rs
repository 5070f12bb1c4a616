//! `.env.template` generation.
//!
//! The template lists every variable the loader reads, grouped under
//! comment headers, with its placeholder default. Values containing
//! whitespace are double-quoted so the dotenv parser reads them back
//! verbatim.

use std::borrow::Cow;
use std::path::Path;

use super::loader::{AppConfig, ConfigError};
use crate::constants::*;

/// Render the template text for the default configuration.
pub fn generate_template() -> String {
    render(&AppConfig::default())
}

/// Write the template to `path`, replacing any existing file.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, generate_template()).map_err(|e| ConfigError::WriteTemplate {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "wrote env template");
    Ok(())
}

fn sections(config: &AppConfig) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
    vec![
        (
            "OpenAI Configuration",
            vec![
                (ENV_OPENAI_API_KEY, config.openai.api_key.clone()),
                (ENV_OPENAI_MODEL, config.openai.model.clone()),
            ],
        ),
        (
            "Microsoft Fabric Lakehouse Configuration",
            vec![
                (ENV_FABRIC_SQL_ENDPOINT, config.fabric.sql_endpoint.clone()),
                (ENV_FABRIC_DATABASE, config.fabric.database.clone()),
                (ENV_FABRIC_RESOURCE_URL, config.fabric.resource_url.clone()),
                (ENV_FABRIC_TOKEN, config.fabric.token.clone()),
            ],
        ),
        (
            "Azure SQL Database Configuration (for data insertion)",
            vec![
                (ENV_AZURE_SQL_SERVER, config.azure_sql.server.clone()),
                (ENV_AZURE_SQL_DATABASE, config.azure_sql.database.clone()),
                (ENV_AZURE_SQL_USER, config.azure_sql.user.clone()),
                (ENV_AZURE_SQL_PASSWORD, config.azure_sql.password.clone()),
                (ENV_AZURE_SQL_PORT, config.azure_sql.port.to_string()),
            ],
        ),
        (
            "Application Configuration",
            vec![
                (ENV_APP_PORT, config.runtime.port.to_string()),
                (
                    ENV_APP_DEBUG,
                    if config.runtime.debug { "True" } else { "False" }.to_string(),
                ),
            ],
        ),
        (
            "Memory Configuration",
            vec![(
                ENV_MEMORY_BASE_PATH,
                config.runtime.memory_base_path.display().to_string(),
            )],
        ),
        (
            "Database Driver Configuration",
            vec![(ENV_SQL_DRIVER, config.runtime.sql_driver.clone())],
        ),
    ]
}

fn render(config: &AppConfig) -> String {
    let mut out = format!(
        "# {TEMPLATE_PROJECT_NAME} Configuration\n\
         # Copy this file to {SECRETS_FILENAME} and fill in your actual values\n"
    );
    for (title, entries) in sections(config) {
        out.push_str(&format!("\n# {title}\n"));
        for (var, value) in entries {
            out.push_str(&format!("{var}={}\n", quote(&value)));
        }
    }
    out
}

fn quote(value: &str) -> Cow<'_, str> {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '\\' | '$'));
    if !needs_quotes {
        return Cow::Borrowed(value);
    }
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$");
    Cow::Owned(format!("\"{escaped}\""))
}
