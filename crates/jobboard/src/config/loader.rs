use std::path::Path;

use config::{Config, Environment, File, FileFormat};

use crate::config::schema::AppConfig;
use crate::error::ConfigError;

/// Environment variable prefix, e.g. `JOBBOARD_SERVER__PORT=9090`.
pub const ENV_PREFIX: &str = "JOBBOARD";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Loads configuration from an optional JSON file, then the environment.
///
/// Environment values override the file. Missing fields take their defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Json).required(true));
    }
    let config: AppConfig = builder.add_source(env_source()).build()?.try_deserialize()?;

    validate_config(&config)?;

    Ok(config)
}

/// Loads configuration from JSON text alone, ignoring the environment.
pub fn load_config_from_str(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = Config::builder()
        .add_source(File::from_str(content, FileFormat::Json))
        .build()?
        .try_deserialize()?;

    validate_config(&config)?;

    Ok(config)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("server.allowed_origins")
        .with_list_parse_key("reference.clients")
        .with_list_parse_key("reference.employees")
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::Validation {
            message: "server.port must be non-zero".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::Validation {
            message: format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join("|"),
                config.logging.level
            ),
        });
    }

    for (key, names) in [
        ("reference.clients", &config.reference.clients),
        ("reference.employees", &config.reference.employees),
    ] {
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Validation {
                message: format!("{} must not contain empty names", key),
            });
        }
    }

    Ok(())
}
