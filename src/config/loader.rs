//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable consulted when the config file carries no API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file, then overlay the API
/// key from the environment when the file leaves it unset.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: ProxyConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;
    overlay_env(&mut config);

    Ok(config)
}

/// Default configuration plus the environment overlay, for running without
/// a config file.
pub fn from_env() -> ProxyConfig {
    let mut config = ProxyConfig::default();
    overlay_env(&mut config);
    config
}

fn overlay_env(config: &mut ProxyConfig) {
    if config.upstream.api_key.is_none() {
        config.upstream.api_key = env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_file_yields_defaults() {
        let path = write_temp_config("weather-proxy-empty.toml", "");
        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.forecast_days, 7);
        assert_eq!(config.cors.allow_origin, "*");
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_temp_config(
            "weather-proxy-partial.toml",
            r#"
[listener]
bind_address = "127.0.0.1:9100"

[upstream]
forecast_days = 3
include_aqi = false

[cors]
allow_origin = "https://weather.example.com"
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9100");
        assert_eq!(config.upstream.forecast_days, 3);
        assert!(!config.upstream.include_aqi);
        assert_eq!(config.cors.allow_origin, "https://weather.example.com");
        // untouched sections keep their defaults
        assert!(!config.upstream.error_map.is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let path = write_temp_config("weather-proxy-bad.toml", "listener = 12");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn semantic_violations_are_validation_errors() {
        let path = write_temp_config(
            "weather-proxy-invalid.toml",
            "[upstream]\nforecast_days = 99\n",
        );
        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors[0].field, "upstream.forecast_days");
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/weather-proxy.toml");
        assert!(matches!(load_config(path), Err(ConfigError::Io(_))));
    }
}
