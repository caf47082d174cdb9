//! Test harness for isolated pipeline runs.
//!
//! Each `TestHarness` owns a fresh in-memory SQLite database, so tests never
//! share state.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use mailbrief::db::init_in_memory;
use mailbrief::email::mock_emails;
use mailbrief::pipeline::{ProgressEvent, ProgressReporter};
use mailbrief::{EmailAnalyzer, EmailPipeline, EmailRepository, SourceEmail};

/// Records every progress event for later assertions.
#[derive(Default)]
pub struct CollectingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl CollectingProgress {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("progress lock").clone()
    }
}

impl ProgressReporter for CollectingProgress {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().expect("progress lock").push(event);
    }
}

pub struct TestHarness {
    pub pipeline: EmailPipeline,
    pub progress: CollectingProgress,
}

impl TestHarness {
    /// Pipeline over the built-in mock inbox.
    pub async fn new(analyzer: Arc<dyn EmailAnalyzer>) -> Self {
        Self::with_sources(analyzer, mock_emails()).await
    }

    pub async fn with_sources(analyzer: Arc<dyn EmailAnalyzer>, sources: Vec<SourceEmail>) -> Self {
        let db = init_in_memory()
            .await
            .expect("Failed to open in-memory database");
        Self {
            pipeline: EmailPipeline::new(EmailRepository::new(db), analyzer, sources),
            progress: CollectingProgress::default(),
        }
    }

    pub fn repo(&self) -> &EmailRepository {
        self.pipeline.repository()
    }
}
