use async_trait::async_trait;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::email::{Category, SourceEmail};

/// Summary used when the model omits one.
pub const MISSING_SUMMARY: &str = "Unable to generate summary";

/// Category used when the model omits one or returns an unknown label.
pub const FALLBACK_CATEGORY: Category = Category::Other;

/// Errors that can occur while analyzing an email.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Analyzer not configured: {0}")]
    NotConfigured(String),
}

/// Summary and category produced for one email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub category: Category,
}

#[async_trait]
pub trait EmailAnalyzer: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    async fn analyze(
        &self,
        sender: &str,
        subject: &str,
        body: &str,
    ) -> Result<AnalysisResult, AnalyzerError>;
}

/// Analyzes every email concurrently.
///
/// All requests are started before any is awaited. Results come back in
/// input order and a failure only affects its own slot.
pub async fn analyze_batch(
    analyzer: &dyn EmailAnalyzer,
    emails: &[SourceEmail],
) -> Vec<Result<AnalysisResult, AnalyzerError>> {
    join_all(
        emails
            .iter()
            .map(|email| analyzer.analyze(&email.sender, &email.subject, &email.body)),
    )
    .await
}

/// Analyzer that always fails.
#[derive(Debug, Clone)]
pub struct DisabledAnalyzer {
    reason: String,
}

impl DisabledAnalyzer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl EmailAnalyzer for DisabledAnalyzer {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn analyze(
        &self,
        _sender: &str,
        _subject: &str,
        _body: &str,
    ) -> Result<AnalysisResult, AnalyzerError> {
        Err(AnalyzerError::NotConfigured(self.reason.clone()))
    }
}
