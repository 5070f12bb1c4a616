//! AppConfig struct and loading logic.
//!
//! Every field falls back to a documented placeholder default, so a loaded
//! config is always fully populated. Whether the placeholders were replaced
//! is a separate question answered by [`super::validate`].

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::*;
use crate::env::Env;

/// Errors during config loading and template generation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} is not a valid port number ({source})")]
    InvalidNumber {
        var: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("failed to write template file {path}: {source}")]
    WriteTemplate {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Placeholder defaults applied when a variable is unset.
pub mod defaults {
    pub const OPENAI_API_KEY: &str = "your-openai-api-key-here";
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";

    pub const FABRIC_SQL_ENDPOINT: &str = "your-fabric-lakehouse.fabric.microsoft.com";
    pub const FABRIC_DATABASE: &str = "your-database-name";
    pub const FABRIC_RESOURCE_URL: &str = "your-resource-url";
    pub const FABRIC_TOKEN: &str = "your-azure-token-here";

    pub const AZURE_SQL_SERVER: &str = "your-azure-sql-server.database.windows.net";
    pub const AZURE_SQL_DATABASE: &str = "your-database-name";
    pub const AZURE_SQL_USER: &str = "your-username";
    pub const AZURE_SQL_PASSWORD: &str = "your-password";
    pub const AZURE_SQL_PORT: u16 = 1433;

    pub const APP_PORT: u16 = 7001;
    pub const APP_DEBUG: bool = true;
    pub const MEMORY_BASE_PATH: &str = "./user_memory";
    pub const SQL_DRIVER: &str = "ODBC Driver 18 for SQL Server";
}

/// Top-level configuration.
///
/// Built once at startup with [`AppConfig::load`] and passed by reference
/// to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub openai: OpenAiConfig,
    pub fabric: FabricConfig,
    pub azure_sql: AzureSqlConfig,
    pub runtime: RuntimeConfig,
}

/// Model API access.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: defaults::OPENAI_API_KEY.to_string(),
            model: defaults::OPENAI_MODEL.to_string(),
        }
    }
}

/// Microsoft Fabric lakehouse SQL endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct FabricConfig {
    pub sql_endpoint: String,
    pub database: String,
    pub resource_url: String,
    pub token: String,
}

impl std::fmt::Debug for FabricConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FabricConfig")
            .field("sql_endpoint", &self.sql_endpoint)
            .field("database", &self.database)
            .field("resource_url", &self.resource_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Default for FabricConfig {
    fn default() -> Self {
        Self {
            sql_endpoint: defaults::FABRIC_SQL_ENDPOINT.to_string(),
            database: defaults::FABRIC_DATABASE.to_string(),
            resource_url: defaults::FABRIC_RESOURCE_URL.to_string(),
            token: defaults::FABRIC_TOKEN.to_string(),
        }
    }
}

/// Azure SQL database used for data insertion.
#[derive(Clone, PartialEq, Eq)]
pub struct AzureSqlConfig {
    pub server: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl std::fmt::Debug for AzureSqlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureSqlConfig")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("port", &self.port)
            .finish()
    }
}

impl Default for AzureSqlConfig {
    fn default() -> Self {
        Self {
            server: defaults::AZURE_SQL_SERVER.to_string(),
            database: defaults::AZURE_SQL_DATABASE.to_string(),
            user: defaults::AZURE_SQL_USER.to_string(),
            password: defaults::AZURE_SQL_PASSWORD.to_string(),
            port: defaults::AZURE_SQL_PORT,
        }
    }
}

/// Web app and local runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Port the web app listens on.
    pub port: u16,
    pub debug: bool,
    /// Root directory for per-user memory storage.
    pub memory_base_path: PathBuf,
    /// ODBC driver name used in connection strings.
    pub sql_driver: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            port: defaults::APP_PORT,
            debug: defaults::APP_DEBUG,
            memory_base_path: PathBuf::from(defaults::MEMORY_BASE_PATH),
            sql_driver: defaults::SQL_DRIVER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `env`, substituting defaults for unset variables.
    ///
    /// Fails only when a port variable is set but is not a valid `u16`.
    pub fn load(env: &Env) -> Result<Self, ConfigError> {
        Ok(Self {
            openai: OpenAiConfig {
                api_key: string_var(env, ENV_OPENAI_API_KEY, defaults::OPENAI_API_KEY),
                model: string_var(env, ENV_OPENAI_MODEL, defaults::OPENAI_MODEL),
            },
            fabric: FabricConfig {
                sql_endpoint: string_var(env, ENV_FABRIC_SQL_ENDPOINT, defaults::FABRIC_SQL_ENDPOINT),
                database: string_var(env, ENV_FABRIC_DATABASE, defaults::FABRIC_DATABASE),
                resource_url: string_var(env, ENV_FABRIC_RESOURCE_URL, defaults::FABRIC_RESOURCE_URL),
                token: string_var(env, ENV_FABRIC_TOKEN, defaults::FABRIC_TOKEN),
            },
            azure_sql: AzureSqlConfig {
                server: string_var(env, ENV_AZURE_SQL_SERVER, defaults::AZURE_SQL_SERVER),
                database: string_var(env, ENV_AZURE_SQL_DATABASE, defaults::AZURE_SQL_DATABASE),
                user: string_var(env, ENV_AZURE_SQL_USER, defaults::AZURE_SQL_USER),
                password: string_var(env, ENV_AZURE_SQL_PASSWORD, defaults::AZURE_SQL_PASSWORD),
                port: port_var(env, ENV_AZURE_SQL_PORT, defaults::AZURE_SQL_PORT)?,
            },
            runtime: RuntimeConfig {
                port: port_var(env, ENV_APP_PORT, defaults::APP_PORT)?,
                debug: bool_var(env, ENV_APP_DEBUG, defaults::APP_DEBUG),
                memory_base_path: PathBuf::from(string_var(
                    env,
                    ENV_MEMORY_BASE_PATH,
                    defaults::MEMORY_BASE_PATH,
                )),
                sql_driver: string_var(env, ENV_SQL_DRIVER, defaults::SQL_DRIVER),
            },
        })
    }

    /// Current values of the fields that must be configured, keyed by
    /// environment variable name.
    pub fn required_fields(&self) -> [(&'static str, &str); 4] {
        [
            (ENV_OPENAI_API_KEY, self.openai.api_key.as_str()),
            (ENV_FABRIC_SQL_ENDPOINT, self.fabric.sql_endpoint.as_str()),
            (ENV_FABRIC_DATABASE, self.fabric.database.as_str()),
            (ENV_FABRIC_TOKEN, self.fabric.token.as_str()),
        ]
    }
}

fn string_var(env: &Env, var: &'static str, default: &str) -> String {
    match env.var(var) {
        Ok(val) => {
            tracing::debug!(var, "read from environment");
            val
        }
        Err(_) => {
            tracing::debug!(var, "not set, using default");
            default.to_string()
        }
    }
}

fn port_var(env: &Env, var: &'static str, default: u16) -> Result<u16, ConfigError> {
    let Ok(val) = env.var(var) else {
        tracing::debug!(var, default, "not set, using default");
        return Ok(default);
    };
    val.trim().parse().map_err(|e| ConfigError::InvalidNumber {
        var,
        value: val.clone(),
        source: e,
    })
}

// Only a case-insensitive "true" enables the flag.
fn bool_var(env: &Env, var: &'static str, default: bool) -> bool {
    match env.var(var) {
        Ok(val) => val.eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}
