//! Configuration management for the Crop Insurance Calculator
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CIS_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Currency;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub log: LogConfig,

    /// Quote presentation settings
    pub insurance: InsuranceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Default tracing filter, overridden by RUST_LOG
    pub filter: String,

    /// Emit JSON log lines instead of human-readable output
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InsuranceConfig {
    /// Currency code shown next to premium and claim amounts
    pub currency: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CIS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "log.filter",
                "cis_server=debug,crop_insurance_backend=debug,tower_http=debug",
            )?
            .set_default("log.json", false)?
            .set_default("insurance.currency", "INR")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CIS_ prefix)
            .add_source(
                Environment::with_prefix("CIS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.insurance.currency()?;
        Ok(config)
    }
}

impl InsuranceConfig {
    pub fn currency(&self) -> Result<Currency, ConfigError> {
        Currency::from_code(&self.currency).ok_or_else(|| {
            ConfigError::Message(format!("Unsupported currency: {}", self.currency))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            log: LogConfig::default(),
            insurance: InsuranceConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "cis_server=debug,crop_insurance_backend=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

impl Default for InsuranceConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default().code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.log.json);
        assert_eq!(config.insurance.currency().unwrap(), Currency::Inr);
    }

    #[test]
    fn test_unsupported_currency() {
        let insurance = InsuranceConfig {
            currency: "XYZ".to_string(),
        };
        assert!(insurance.currency().is_err());
    }
}
