//! App-wide constants.
//!
//! Centralises the tool name, file paths, build information, and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "finnexus";

/// Human-readable product name used in banners.
pub const PRODUCT_NAME: &str = "FinancialNexus";

/// Project name written in the `.env.template` header.
pub const TEMPLATE_PROJECT_NAME: &str = "FinancialNexus_Agentic_AI";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Version of the rustc that built this binary (set by `build.rs`).
pub const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

/// Oldest toolchain the project supports. Mirrors `rust-version` in Cargo.toml.
pub const MIN_RUST_VERSION: &str = "1.85.0";

/// Generated template listing every key with its placeholder default.
pub const TEMPLATE_FILENAME: &str = ".env.template";

/// Local secrets file read at process start.
pub const SECRETS_FILENAME: &str = ".env";

/// Filter directive for diagnostic logging (e.g. `FINNEXUS_LOG=debug`).
pub const ENV_LOG: &str = "FINNEXUS_LOG";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";

pub const ENV_FABRIC_SQL_ENDPOINT: &str = "FABRIC_SQL_ENDPOINT";
pub const ENV_FABRIC_DATABASE: &str = "FABRIC_DATABASE";
pub const ENV_FABRIC_RESOURCE_URL: &str = "FABRIC_RESOURCE_URL";
pub const ENV_FABRIC_TOKEN: &str = "FABRIC_TOKEN";

pub const ENV_AZURE_SQL_SERVER: &str = "AZURE_SQL_SERVER";
pub const ENV_AZURE_SQL_DATABASE: &str = "AZURE_SQL_DATABASE";
pub const ENV_AZURE_SQL_USER: &str = "AZURE_SQL_USER";
pub const ENV_AZURE_SQL_PASSWORD: &str = "AZURE_SQL_PASSWORD";
pub const ENV_AZURE_SQL_PORT: &str = "AZURE_SQL_PORT";

pub const ENV_APP_PORT: &str = "APP_PORT";
pub const ENV_APP_DEBUG: &str = "APP_DEBUG";
pub const ENV_MEMORY_BASE_PATH: &str = "MEMORY_BASE_PATH";
pub const ENV_SQL_DRIVER: &str = "SQL_DRIVER";
