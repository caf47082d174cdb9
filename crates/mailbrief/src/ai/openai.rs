//! OpenAI-compatible chat-completions analyzer.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::analyzer::{
    AnalysisResult, AnalyzerError, EmailAnalyzer, FALLBACK_CATEGORY, MISSING_SUMMARY,
};
use super::prompt::{SanitizedEmail, SYSTEM_PROMPT};
use crate::config::AnalyzerConfig;
use crate::email::Category;
use crate::sanitize::truncate_for_log;

/// Default base URL for the OpenAI API.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Default cap on generated tokens.
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 500;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    max_completion_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Analyzer backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiAnalyzer {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    max_completion_tokens: u32,
}

impl OpenAiAnalyzer {
    /// Creates an analyzer for the public OpenAI API with default settings.
    pub fn new(api_key: SecretString) -> Result<Self, AnalyzerError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("mailbrief/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: OPENAI_BASE_URL.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
        })
    }

    pub fn from_config(config: &AnalyzerConfig, api_key: SecretString) -> Result<Self, AnalyzerError> {
        Ok(Self::new(api_key)?
            .with_base_url(&config.base_url)
            .with_model(&config.model)
            .with_max_completion_tokens(config.max_completion_tokens))
    }

    /// Points the analyzer at another compatible endpoint (a proxy, a local
    /// server, a test double).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_max_completion_tokens(mut self, tokens: u32) -> Self {
        self.max_completion_tokens = tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request<'a>(&'a self, user_prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            max_completion_tokens: self.max_completion_tokens,
        }
    }
}

/// Turns the model's message content into an analysis.
///
/// Absent content is treated as `{}`. Missing or blank fields get
/// placeholders; unknown category labels collapse to
/// [`FALLBACK_CATEGORY`]. Content that is not JSON is an error.
pub(crate) fn parse_analysis(content: Option<&str>) -> Result<AnalysisResult, AnalyzerError> {
    let content = content.filter(|c| !c.trim().is_empty()).unwrap_or("{}");
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        AnalyzerError::InvalidResponse(format!("Model returned non-JSON content: {}", e))
    })?;

    let field = |name: &str| {
        value
            .get(name)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let summary = field("summary").unwrap_or(MISSING_SUMMARY).to_string();
    let category = match field("category") {
        Some(label) => label.parse::<Category>().unwrap_or_else(|_| {
            warn!(label, "Model returned unknown category, using {}", FALLBACK_CATEGORY);
            FALLBACK_CATEGORY
        }),
        None => FALLBACK_CATEGORY,
    };

    Ok(AnalysisResult { summary, category })
}

#[async_trait]
impl EmailAnalyzer for OpenAiAnalyzer {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn analyze(
        &self,
        sender: &str,
        subject: &str,
        body: &str,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let email = SanitizedEmail::new(sender, subject, body);
        debug!(
            sender_chars = email.sender.len(),
            subject_chars = email.subject.len(),
            body_chars = email.body.len(),
            "Sanitized email for analysis"
        );

        let user_prompt = email.user_prompt();
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.build_request(&user_prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Api {
                status,
                message: truncate_for_log(&body),
            });
        }

        let envelope: ChatResponse = response.json().await.map_err(|e| {
            AnalyzerError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let choice = envelope
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AnalyzerError::InvalidResponse("No choices in response".to_string()))?;

        parse_analysis(choice.message.content.as_deref())
    }
}
