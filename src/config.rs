//! # Config
//!
//! Settings come from built-in defaults, overridden by environment variables
//! (a `.env` file is read first when present).

use std::{path::PathBuf, time::Duration};

use config::Environment;
use dotenv::dotenv;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    DEFAULT_HORIZON_DAYS, DEFAULT_LOOKAHEAD_DAYS, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_ORIGIN,
};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WEATHER_API_KEY is not set; temperature lookups are unavailable")]
    MissingApiKey,
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub weather_api_key: Option<String>,

    /// base URL of the weather API, ending in `/`
    pub weather_base_url: String,

    /// provider calls allowed in flight per route
    pub max_concurrent_requests: usize,

    /// per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// how many days past today the forecast covers
    pub forecast_horizon_days: u8,

    /// how many following days the date comparison looks at
    pub lookahead_days: u8,

    /// label of the fixed origin
    pub origin_label: String,

    /// optional JSON route dataset replacing the bundled one
    #[serde(default)]
    pub routes_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            weather_api_key: None,
            weather_base_url: String::from(DEFAULT_WEATHER_BASE_URL),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            request_timeout_secs: 10,
            forecast_horizon_days: DEFAULT_HORIZON_DAYS,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            origin_label: String::from(DEFAULT_ORIGIN),
            routes_file: None,
        }
    }

    /// Builds a `Config` from defaults and environment variables.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Config::new();

        let config: Config = config::Config::builder()
            .set_default("weather_base_url", defaults.weather_base_url)?
            .set_default(
                "max_concurrent_requests",
                defaults.max_concurrent_requests as i64,
            )?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default(
                "forecast_horizon_days",
                i64::from(defaults.forecast_horizon_days),
            )?
            .set_default("lookahead_days", i64::from(defaults.lookahead_days))?
            .set_default("origin_label", defaults.origin_label)?
            .add_source(environment.separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The weather credential, or a blocking error when it is absent.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.weather_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
