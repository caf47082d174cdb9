//! Analyzer doubles with scripted outcomes.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use mailbrief::{AnalysisResult, AnalyzerError, Category, EmailAnalyzer};

/// Succeeds with `"AI summary of <subject>"` and a fixed category, except
/// for subjects listed in `failing`, which return an API error.
pub struct ScriptedAnalyzer {
    category: Category,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl ScriptedAnalyzer {
    pub fn always_ok(category: Category) -> Self {
        Self {
            category,
            failing: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails for the given subjects, succeeds otherwise.
    pub fn failing_on(category: Category, subjects: &[&str]) -> Self {
        Self {
            category,
            failing: subjects.iter().map(|s| s.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn summary_for(subject: &str) -> String {
        format!("AI summary of {}", subject)
    }
}

#[async_trait]
impl EmailAnalyzer for ScriptedAnalyzer {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn analyze(
        &self,
        _sender: &str,
        subject: &str,
        _body: &str,
    ) -> Result<AnalysisResult, AnalyzerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(subject) {
            return Err(AnalyzerError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            });
        }
        Ok(AnalysisResult {
            summary: Self::summary_for(subject),
            category: self.category,
        })
    }
}
