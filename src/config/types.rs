// Configuration types module
// Defines the deployment settings and their error type

use thiserror::Error;

// Environment variables, listed in validation order.
pub const ENV_STORAGE_ACCOUNT_NAME: &str = "STORAGE_ACCOUNT_NAME";
pub const ENV_STORAGE_ACCOUNT_KEY: &str = "STORAGE_ACCOUNT_KEY";
pub const ENV_CONTAINER_NAME: &str = "CONTAINER_NAME";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_BASE_URL: &str = "BASE_URL";
pub const ENV_PORT: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

/// Deployment configuration, resolved once at startup.
///
/// After `validate()` succeeds all five storage settings are non-empty.
/// The struct is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_account_name: String,
    pub storage_account_key: String,
    pub container_name: String,
    pub api_key: String,
    pub base_url: String,
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Errors produced while resolving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting resolved to an empty value.
    #[error("{0} is required")]
    MissingSetting(&'static str),
    /// The custom handler port variable held a non-numeric value.
    #[error("{} is not a valid port: '{value}'", ENV_PORT)]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}
