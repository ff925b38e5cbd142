// Configuration module entry point
// Resolves deployment settings from the process environment and validates them

mod state;
mod types;

use std::env;
use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, ConfigError, ServerConfig};

/// Container used when `CONTAINER_NAME` is unset or empty. `$web` is the
/// static-website container of a blob storage account.
const DEFAULT_CONTAINER: &str = "$web";

/// Port used when `FUNCTIONS_CUSTOMHANDLER_PORT` is absent.
const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// Settings without a default resolve to the empty string when unset;
    /// [`Config::validate`] decides whether that is acceptable. The only
    /// error path here is an unparsable port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            storage_account_name: env_or_default(types::ENV_STORAGE_ACCOUNT_NAME, ""),
            storage_account_key: env_or_default(types::ENV_STORAGE_ACCOUNT_KEY, ""),
            container_name: env_or_default(types::ENV_CONTAINER_NAME, DEFAULT_CONTAINER),
            api_key: env_or_default(types::ENV_API_KEY, ""),
            base_url: env_or_default(types::ENV_BASE_URL, ""),
            server: ServerConfig::from_env()?,
        })
    }

    /// Check that every required setting is present.
    ///
    /// Settings are checked in a fixed order and the first empty one is
    /// reported by its environment variable; errors are not aggregated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            (types::ENV_STORAGE_ACCOUNT_NAME, &self.storage_account_name),
            (types::ENV_STORAGE_ACCOUNT_KEY, &self.storage_account_key),
            (types::ENV_CONTAINER_NAME, &self.container_name),
            (types::ENV_API_KEY, &self.api_key),
            (types::ENV_BASE_URL, &self.base_url),
        ];

        for (var, value) in required {
            if value.is_empty() {
                return Err(ConfigError::MissingSetting(var));
            }
        }
        Ok(())
    }

    /// Address the server listens on (all interfaces).
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.server.port))
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(types::ENV_PORT) {
            Ok(value) if !value.is_empty() => {
                value
                    .parse()
                    .map_err(|source| ConfigError::InvalidPort { value, source })?
            }
            _ => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

/// Return the environment value for `key` when set and non-empty, otherwise
/// `default` exactly (including an empty default).
pub fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
