//! Configuration loading, validation, and template generation.
//!
//! Reads the application's environment variables into a typed
//! [`AppConfig`], checks that required values were changed from their
//! placeholders, and renders the `.env.template` file.

pub mod loader;
pub mod report;
pub mod template;
pub mod validate;

pub use loader::{AppConfig, ConfigError};
pub use report::ConfigReport;
pub use template::{generate_template, write_template};
pub use validate::{Validation, is_placeholder, validate_required};
