use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::config::schema::{Config, CONFIG_VERSION};
use crate::error::ConfigError;

const SCHEMA_JSON: &str = include_str!("../../schema/config-v1.json");

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MAILBRIEF_CONFIG";
/// Overrides `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Overrides `server.bind_address`.
pub const BIND_ADDRESS_ENV: &str = "MAILBRIEF_BIND_ADDRESS";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;

    validate_schema(&json_value)?;

    let config: Config = serde_json::from_value(json_value)?;

    validate_config(&config)?;

    Ok(config)
}

/// `~/.mailbrief`, when a home directory is known.
pub fn mailbrief_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mailbrief"))
}

/// Picks the config file to read: `MAILBRIEF_CONFIG` if set, otherwise
/// `~/.mailbrief/config.json` if it exists.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }

    mailbrief_home()
        .map(|home| home.join("config.json"))
        .filter(|path| path.is_file())
}

/// Loads the config the server runs with: file (if any) or defaults, then
/// environment overrides, then validation.
pub fn load_effective_config() -> Result<Config, ConfigError> {
    let mut config = match resolve_config_path() {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            load_config(&path)?
        }
        None => {
            log::info!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

pub fn apply_env_overrides(config: &mut Config) {
    if let Some(url) = env_non_empty(DATABASE_URL_ENV) {
        log::debug!("{} overrides database.url", DATABASE_URL_ENV);
        config.database.url = url;
    }
    if let Some(addr) = env_non_empty(BIND_ADDRESS_ENV) {
        log::debug!("{} overrides server.bind_address", BIND_ADDRESS_ENV);
        config.server.bind_address = addr;
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let error_messages: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| e.to_string())
        .collect();
    if !error_messages.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: error_messages.join("; "),
        });
    }

    Ok(())
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::Validation {
            message: format!(
                "server.bind_address '{}' is not a socket address",
                config.server.bind_address
            ),
        });
    }

    let url = &config.database.url;
    if !(url.starts_with("sqlite:") || url.starts_with("postgres://") || url.starts_with("postgresql://")) {
        return Err(ConfigError::Validation {
            message: "database.url must be a sqlite: or postgres:// URL".to_string(),
        });
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::Validation {
            message: "database.max_connections must be at least 1".to_string(),
        });
    }

    if config.analyzer.max_completion_tokens == 0 {
        return Err(ConfigError::Validation {
            message: "analyzer.max_completion_tokens must be at least 1".to_string(),
        });
    }

    Ok(())
}
