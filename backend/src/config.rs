//! Configuration management for the weather proxy
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with MM_ prefix
//!
//! The provider credential can also come from the legacy
//! `OPENWEATHER_API_KEY` environment variable.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

/// Expected length of an OpenWeatherMap API key.
pub const API_KEY_LENGTH: usize = 32;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key (32 characters)
    pub api_key: String,

    /// Current-weather API base URL
    pub api_endpoint: String,

    /// Geocoding API base URL
    pub geo_endpoint: String,

    /// Default city when no coordinates are supplied
    pub city: String,

    /// Country code for the default city
    pub country_code: String,

    /// Altitude assumed when the provider reports no pressure data, meters
    pub default_altitude_m: i32,
}

impl WeatherConfig {
    /// Validate the provider credential: present and exactly 32 characters.
    pub fn validated_key(&self) -> Result<&str, AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::MissingApiKey);
        }
        if self.api_key.len() != API_KEY_LENGTH {
            tracing::error!("API key has length {}", self.api_key.len());
            return Err(AppError::MalformedApiKey);
        }
        Ok(&self.api_key)
    }

    /// Geocoding query for the default city, e.g. "Monterrey,MX".
    pub fn city_query(&self) -> String {
        format!("{},{}", self.city, self.country_code)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("MM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_key", "")?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default(
                "weather.geo_endpoint",
                "https://api.openweathermap.org/geo/1.0",
            )?
            .set_default("weather.city", "Monterrey")?
            .set_default("weather.country_code", "MX")?
            .set_default("weather.default_altitude_m", 540)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (MM_ prefix)
            .add_source(
                Environment::with_prefix("MM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;

        // Legacy credential variable used by earlier deployments
        if config.weather.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENWEATHER_API_KEY") {
                config.weather.api_key = key;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_config(api_key: &str) -> WeatherConfig {
        WeatherConfig {
            api_key: api_key.to_string(),
            api_endpoint: "http://localhost/data/2.5".to_string(),
            geo_endpoint: "http://localhost/geo/1.0".to_string(),
            city: "Monterrey".to_string(),
            country_code: "MX".to_string(),
            default_altitude_m: 540,
        }
    }

    #[test]
    fn missing_key_is_rejected() {
        let config = weather_config("");
        assert!(matches!(
            config.validated_key(),
            Err(AppError::MissingApiKey)
        ));
    }

    #[test]
    fn wrong_length_key_is_rejected() {
        let config = weather_config("abc123");
        assert!(matches!(
            config.validated_key(),
            Err(AppError::MalformedApiKey)
        ));
    }

    #[test]
    fn exact_length_key_passes() {
        let config = weather_config(&"a".repeat(API_KEY_LENGTH));
        assert!(config.validated_key().is_ok());
    }

    #[test]
    fn city_query_joins_city_and_country() {
        assert_eq!(weather_config("").city_query(), "Monterrey,MX");
    }
}
