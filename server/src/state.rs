use std::sync::Arc;

use log::{info, warn};

use mailbrief::config::{AnalyzerConfig, Config};
use mailbrief::db::{init_database, EmailRepository};
use mailbrief::email::configured_sources;
use mailbrief::{
    resolve_secret_optional, DisabledAnalyzer, EmailAnalyzer, EmailPipeline, MailbriefError,
    OpenAiAnalyzer,
};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<EmailPipeline>,
}

impl AppState {
    pub fn new(pipeline: EmailPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Connects the database, selects the analyzer and loads the source
    /// emails.
    pub async fn from_config(config: &Config) -> Result<Self, MailbriefError> {
        let conn = init_database(&config.database.url, config.database.max_connections).await?;
        let analyzer = build_analyzer(&config.analyzer)?;
        let sources = configured_sources(&config.sources)?;

        info!(
            "Pipeline ready: {} source emails, analyzer '{}'",
            sources.len(),
            analyzer.name()
        );

        Ok(Self::new(EmailPipeline::new(
            EmailRepository::new(conn),
            analyzer,
            sources,
        )))
    }
}

/// Uses the remote analyzer when a credential resolves. Without one every
/// analysis fails and batch runs fall back to the heuristic classifier.
pub fn build_analyzer(config: &AnalyzerConfig) -> Result<Arc<dyn EmailAnalyzer>, MailbriefError> {
    let key = resolve_secret_optional(
        config.api_key.as_deref(),
        config.api_key_file.as_deref(),
        config.api_key_env_var.as_deref(),
    )?;

    match key {
        Some(key) => {
            info!(
                "Using remote analyzer at {} (model {})",
                config.base_url, config.model
            );
            Ok(Arc::new(OpenAiAnalyzer::from_config(config, key)?))
        }
        None => {
            warn!("No analyzer API key configured; emails will be summarized heuristically");
            Ok(Arc::new(DisabledAnalyzer::new("no API key configured")))
        }
    }
}
