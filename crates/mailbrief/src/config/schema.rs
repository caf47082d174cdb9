use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ai::openai::{DEFAULT_MAX_COMPLETION_TOKENS, DEFAULT_MODEL, OPENAI_BASE_URL};

pub const CONFIG_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            analyzer: AnalyzerConfig::default(),
            sources: SourcesConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "0.0.0.0:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "crate::db::default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: crate::db::default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// Remote analyzer settings.
///
/// The credential is resolved from `api_key`, then `api_key_file`, then the
/// environment variable named by `api_key_env_var`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_completion_tokens")]
    pub max_completion_tokens: u32,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_file: Option<String>,
    #[serde(default = "default_api_key_env_var")]
    pub api_key_env_var: Option<String>,
}

fn default_base_url() -> String {
    OPENAI_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_completion_tokens() -> u32 {
    DEFAULT_MAX_COMPLETION_TOKENS
}

fn default_api_key_env_var() -> Option<String> {
    Some("OPENAI_API_KEY".to_string())
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_completion_tokens: default_max_completion_tokens(),
            api_key: None,
            api_key_file: None,
            api_key_env_var: default_api_key_env_var(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// JSON fixture replacing the built-in mock emails.
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}
