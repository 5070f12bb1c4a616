//! Read-only view of the connection credentials held by [`AppConfig`].
//!
//! Consumers that only talk to the Fabric SQL endpoint and the model API
//! take a `Credentials` instead of the whole config.

use crate::config::AppConfig;

/// Borrowed credential accessors over a loaded [`AppConfig`].
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    config: &'a AppConfig,
}

impl<'a> Credentials<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Fabric lakehouse SQL endpoint host.
    pub fn sql_endpoint(&self) -> &'a str {
        &self.config.fabric.sql_endpoint
    }

    pub fn database(&self) -> &'a str {
        &self.config.fabric.database
    }

    /// Resource URL used when requesting an Azure access token.
    pub fn resource_url(&self) -> &'a str {
        &self.config.fabric.resource_url
    }

    pub fn token(&self) -> &'a str {
        &self.config.fabric.token
    }

    pub fn open_ai_key(&self) -> &'a str {
        &self.config.openai.api_key
    }

    pub fn model(&self) -> &'a str {
        &self.config.openai.model
    }
}

impl<'a> From<&'a AppConfig> for Credentials<'a> {
    fn from(config: &'a AppConfig) -> Self {
        Self::new(config)
    }
}

impl std::fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("sql_endpoint", &self.sql_endpoint())
            .field("database", &self.database())
            .field("resource_url", &self.resource_url())
            .field("token", &"[REDACTED]")
            .field("open_ai_key", &"[REDACTED]")
            .field("model", &self.model())
            .finish()
    }
}
