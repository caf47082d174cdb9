//! Deterministic fallback classifier used when the remote analyzer fails.

mod fallback;
mod matcher;

pub use fallback::{fallback_analysis, fallback_summary, PREVIEW_CHARS};
pub use matcher::{CategorizationResult, Categorizer, KeywordRule};
