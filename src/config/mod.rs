//! Configuration management for the futures CLI.
//!
//! Loads credentials and environment selection from environment variables
//! (optionally via a `.env` file) and an optional `config.*` file.

use serde::Deserialize;
use thiserror::Error;

const FUTURES_BASE_URL: &str = "https://fapi.binance.com";
const FUTURES_TESTNET_URL: &str = "https://testnet.binancefuture.com";

/// Configuration errors, all fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API credentials: set BINANCE_API_KEY and BINANCE_API_SECRET")]
    MissingCredentials,

    #[error("invalid ENVIRONMENT '{0}': must be 'testnet' or 'production'")]
    InvalidEnvironment(String),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Target environment for the exchange endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Testnet,
    Production,
}

impl Environment {
    /// REST base URL for USDT-M futures in this environment.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Environment::Testnet => FUTURES_TESTNET_URL,
            Environment::Production => FUTURES_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Testnet => "testnet",
            Environment::Production => "production",
        }
    }
}

/// Connection settings handed to the REST client.
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// API key for authentication
    pub api_key: String,
    /// Secret key for signing requests
    pub secret_key: String,
    /// REST endpoint; derived from the environment, overridable in tests
    pub base_url: String,
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub binance: BinanceConfig,
}

/// Raw settings as they appear in the environment / config file.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default = "default_environment")]
    environment: String,
    #[serde(default)]
    binance_api_key: String,
    #[serde(default)]
    binance_api_secret: String,
}

fn default_environment() -> String {
    "testnet".to_string()
}

impl Config {
    /// Load configuration from environment variables and config files.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw: RawSettings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSettings) -> Result<Self, ConfigError> {
        let environment = match raw.environment.to_ascii_lowercase().as_str() {
            "testnet" => Environment::Testnet,
            "production" => Environment::Production,
            other => return Err(ConfigError::InvalidEnvironment(other.to_string())),
        };

        if raw.binance_api_key.is_empty() || raw.binance_api_secret.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }

        Ok(Self {
            environment,
            binance: BinanceConfig {
                api_key: raw.binance_api_key,
                secret_key: raw.binance_api_secret,
                base_url: environment.rest_base_url().to_string(),
            },
        })
    }
}
