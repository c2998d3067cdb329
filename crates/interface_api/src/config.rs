//! API configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use domain_claims::DEFAULT_FIXED_PAYOUT;

/// Identity allowed to administer the oracle allow-list unless overridden
pub const DEFAULT_ORACLE_OWNER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Log level
    pub log_level: String,
    /// Fixed owner identity of the oracle allow-list
    pub oracle_owner: String,
    /// Amount recorded on every filed claim
    pub claim_payout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
            oracle_owner: DEFAULT_ORACLE_OWNER.to_string(),
            claim_payout: DEFAULT_FIXED_PAYOUT,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables fall back to [`ApiConfig::default`].
    ///
    /// # Errors
    ///
    /// Fails if any set variable cannot be parsed. Nothing falls back to a
    /// default once a variable is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix("API"))
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("jwt_secret", defaults.jwt_secret)?
            .set_default("jwt_expiration_secs", 3600_i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("oracle_owner", defaults.oracle_owner)?
            .set_default("claim_payout", 1000_i64)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
