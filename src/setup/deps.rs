//! Dependency check against the build manifest.
//!
//! A compiled binary cannot be missing a linked crate at run time, so the
//! check resolves the required crate names against the `[dependencies]`
//! table of the `Cargo.toml` the binary was built from.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Deserialize;

use super::SetupError;

/// Manifest of the crate this binary was built from.
pub const BUILD_MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));

/// Crates the application needs at run time.
pub const REQUIRED_CRATES: &[&str] = &[
    "clap",
    "dotenvy",
    "serde",
    "toml",
    "colored",
    "semver",
    "thiserror",
    "anyhow",
];

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    dependencies: BTreeMap<String, toml::Value>,
}

/// Outcome of [`check_dependencies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    missing: Vec<String>,
}

impl DependencyReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    /// Required crates not declared in the manifest, in check order.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn render(&self) -> String {
        if self.is_ok() {
            return format!(
                "  {} All required crates are declared in the build manifest.\n",
                "✔".green().bold()
            );
        }
        format!(
            "  {} Missing required crates: {}\n  Please run: cargo add {} && cargo build --release\n",
            "✖".red().bold(),
            self.missing.join(", ").red(),
            self.missing.join(" "),
        )
    }
}

/// Resolve every name in `required` against the manifest text.
///
/// All unresolved names are collected; the check never stops early.
pub fn check_dependencies(manifest: &str, required: &[&str]) -> Result<DependencyReport, SetupError> {
    let manifest: Manifest = toml::from_str(manifest).map_err(SetupError::Manifest)?;

    let missing = required
        .iter()
        .filter(|name| !manifest.dependencies.contains_key(**name))
        .map(|name| name.to_string())
        .collect();

    Ok(DependencyReport { missing })
}
