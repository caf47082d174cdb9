pub mod ai;
pub mod api;
pub mod categorizer;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod email;
pub mod error;
pub mod pipeline;
pub mod sanitize;
pub mod secrets;

pub use ai::{AnalysisResult, AnalyzerError, DisabledAnalyzer, EmailAnalyzer, OpenAiAnalyzer};
pub use categorizer::{fallback_analysis, fallback_summary, Categorizer};
pub use config::{load_config, load_effective_config, Config};
pub use dashboard::{ApiClient, Dashboard, DashboardApi, DashboardError};
pub use db::{DatabaseError, EmailRepository, EmailSummary};
pub use email::{Category, SourceEmail};
pub use error::{ConfigError, MailbriefError, Result};
pub use pipeline::{EmailPipeline, PipelineError, ProcessOutcome};
pub use secrets::{resolve_secret, resolve_secret_optional, SecretError};
