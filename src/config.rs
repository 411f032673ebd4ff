//! Configuration management for the contact client.
//!
//! Every setting has a default, so an empty environment yields a working
//! configuration aimed at the production backend. A `.env` file is loaded
//! if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::ContactField;
use std::env;
use std::fmt;
use std::time::Duration;

/// Backend the portfolio site posts contact messages to.
pub const DEFAULT_API_BASE_URL: &str = "https://portfolio-backend-wt5.onrender.com";

/// Client-side timeout for a submission, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Deployment environment. Controls how much failure detail is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `development` or `production`.",
                other
            )),
        }
    }
}

/// Configuration for the contact client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend; submissions go to `<base>/contact`
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Which extra field the form carries (default: subject)
    pub contact_field: ContactField,

    /// Deployment environment (default: development)
    pub environment: Environment,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_API_BASE_URL`: Base URL of the backend
    /// - `CONTACT_REQUEST_TIMEOUT_SECS`: HTTP timeout in seconds (default: 30)
    /// - `CONTACT_FIELD`: `subject` or `phone` (default: subject)
    /// - `APP_ENVIRONMENT`: `development` or `production` (default: development)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_base_url =
            env::var("CONTACT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout =
            Self::parse_env_u64("CONTACT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_REQUEST_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let contact_field = match env::var("CONTACT_FIELD") {
            Ok(val) => val.parse::<ContactField>().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACT_FIELD".to_string(),
                reason,
            })?,
            Err(_) => ContactField::default(),
        };

        let environment = match env::var("APP_ENVIRONMENT") {
            Ok(val) => Environment::try_from(val).map_err(|reason| ConfigError::InvalidValue {
                var: "APP_ENVIRONMENT".to_string(),
                reason,
            })?,
            Err(_) => Environment::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            api_base_url,
            request_timeout,
            contact_field,
            environment,
            log_level,
        })
    }

    /// The request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            contact_field: ContactField::default(),
            environment: Environment::default(),
            log_level: "info".to_string(),
        }
    }
}
