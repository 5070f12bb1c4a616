//! Required-field validation against placeholder sentinels.

use colored::Colorize;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::loader::{AppConfig, defaults};
use crate::constants::*;

/// Values that mean "not yet configured".
pub const PLACEHOLDER_SENTINELS: &[&str] = &[
    defaults::OPENAI_API_KEY,
    defaults::FABRIC_SQL_ENDPOINT,
    defaults::FABRIC_TOKEN,
    defaults::FABRIC_RESOURCE_URL,
    defaults::FABRIC_DATABASE,
];

/// Variables that must be changed from their placeholder before the app can run.
pub const REQUIRED_VARS: &[&str] = &[
    ENV_OPENAI_API_KEY,
    ENV_FABRIC_SQL_ENDPOINT,
    ENV_FABRIC_DATABASE,
    ENV_FABRIC_TOKEN,
];

/// Returns `true` if `value` is one of the [`PLACEHOLDER_SENTINELS`].
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_SENTINELS.contains(&value)
}

/// Outcome of [`validate_required`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    missing: Vec<&'static str>,
}

impl Validation {
    /// Whether every required variable was set.
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    /// Names of required variables still at a placeholder, in check order.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// Render the human-readable report printed by the CLI.
    pub fn render(&self) -> String {
        if self.is_ok() {
            return format!(
                "  {} All required configuration variables are set.\n",
                "✔".green().bold()
            );
        }

        let mut out = format!(
            "  {} {}\n",
            "⚠".yellow().bold(),
            "Warning: the following configuration variables need to be set:".yellow()
        );
        for var in &self.missing {
            out.push_str(&format!("     - {var}\n"));
        }
        out.push_str(&format!(
            "\n  Please update your {SECRETS_FILENAME} file or environment variables.\n"
        ));
        out
    }
}

/// Check that none of the required fields still hold a placeholder value.
pub fn validate_required(config: &AppConfig) -> Validation {
    let missing: Vec<_> = config
        .required_fields()
        .into_iter()
        .filter(|(_, value)| is_placeholder(value))
        .map(|(var, _)| var)
        .collect();

    for var in &missing {
        tracing::debug!(var, "required variable still at placeholder");
    }

    Validation { missing }
}

// `ok` is derived from `missing` but still serialized.
impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Validation", 2)?;
        state.serialize_field("ok", &self.is_ok())?;
        state.serialize_field("missing", &self.missing)?;
        state.end()
    }
}
