//! Remote email analysis.
//!
//! [`EmailAnalyzer`] is the seam the pipeline depends on. [`OpenAiAnalyzer`]
//! talks to an OpenAI-compatible chat-completions endpoint;
//! [`DisabledAnalyzer`] stands in when no credential is configured so every
//! batch item degrades to the fallback classifier.

pub mod analyzer;
pub mod openai;
pub mod prompt;

pub use analyzer::{
    analyze_batch, AnalysisResult, AnalyzerError, DisabledAnalyzer, EmailAnalyzer,
    FALLBACK_CATEGORY, MISSING_SUMMARY,
};
pub use openai::OpenAiAnalyzer;
