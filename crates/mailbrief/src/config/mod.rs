pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, load_config, load_config_from_str, load_effective_config,
    mailbrief_home, resolve_config_path,
};
pub use schema::{AnalyzerConfig, Config, DatabaseConfig, ServerConfig, SourcesConfig};
