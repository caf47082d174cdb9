use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::ai::EmailAnalyzer;
use crate::categorizer::{fallback_analysis, Categorizer};
use crate::db::{EmailRepository, EmailSummary, NewEmailSummary};
use crate::email::SourceEmail;
use crate::sanitize;

use super::error::PipelineError;
use super::progress::{ProgressEvent, ProgressReporter};

/// Records created by a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    pub count: usize,
    pub emails: Vec<EmailSummary>,
}

/// Drives analysis and persistence of the source emails.
pub struct EmailPipeline {
    repo: EmailRepository,
    analyzer: Arc<dyn EmailAnalyzer>,
    categorizer: Categorizer,
    sources: Vec<SourceEmail>,
}

impl EmailPipeline {
    pub fn new(
        repo: EmailRepository,
        analyzer: Arc<dyn EmailAnalyzer>,
        sources: Vec<SourceEmail>,
    ) -> Self {
        Self {
            repo,
            analyzer,
            categorizer: Categorizer::default(),
            sources,
        }
    }

    pub fn with_categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = categorizer;
        self
    }

    pub fn repository(&self) -> &EmailRepository {
        &self.repo
    }

    pub fn analyzer_name(&self) -> &str {
        self.analyzer.name()
    }

    pub fn sources(&self) -> &[SourceEmail] {
        &self.sources
    }

    /// Deletes every stored record, then analyzes and stores each source
    /// email in order.
    ///
    /// An analysis failure falls back to the heuristic classifier; a failed
    /// insert is logged and the email skipped. Only the initial clear can
    /// fail the run.
    pub async fn clear_and_reprocess(
        &self,
        progress: &dyn ProgressReporter,
    ) -> Result<ProcessOutcome, PipelineError> {
        let total = self.sources.len();
        let span = info_span!("pipeline.process", analyzer = self.analyzer.name(), total);

        async move {
            progress.report(ProgressEvent::Clearing);
            let removed = self.repo.delete_all().await?;
            progress.report(ProgressEvent::Cleared { removed });

            let mut emails = Vec::with_capacity(total);
            for (index, source) in self.sources.iter().enumerate() {
                let item_span = info_span!(
                    "email",
                    index,
                    subject = %sanitize::truncate_for_log(&source.subject),
                    sender = %sanitize::redact_email(&source.sender_email),
                );
                if let Some(record) = self
                    .process_one(index, total, source, progress)
                    .instrument(item_span)
                    .await
                {
                    emails.push(record);
                }
            }

            info!(count = emails.len(), total, "Batch processing complete");
            progress.report(ProgressEvent::Done {
                count: emails.len(),
                total,
            });

            Ok(ProcessOutcome {
                count: emails.len(),
                emails,
            })
        }
        .instrument(span)
        .await
    }

    async fn process_one(
        &self,
        index: usize,
        total: usize,
        source: &SourceEmail,
        progress: &dyn ProgressReporter,
    ) -> Option<EmailSummary> {
        progress.report(ProgressEvent::Analyzing { index, total });

        let analysis = match self
            .analyzer
            .analyze(&source.sender, &source.subject, &source.body)
            .await
        {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "Analysis failed, using fallback");
                progress.report(ProgressEvent::Fallback {
                    index,
                    reason: e.to_string(),
                });
                fallback_analysis(&self.categorizer, &source.subject, &source.body)
            }
        };

        let new = NewEmailSummary {
            sender: source.sender.clone(),
            sender_email: source.sender_email.clone(),
            subject: source.subject.clone(),
            body: source.body.clone(),
            summary: analysis.summary,
            category: analysis.category,
        };

        match self.repo.create(new).await {
            Ok(record) => {
                debug!(id = record.id, category = %record.category, "Stored email");
                progress.report(ProgressEvent::Stored {
                    index,
                    id: record.id,
                });
                Some(record)
            }
            Err(e) => {
                error!(error = %e, "Failed to store email, skipping");
                progress.report(ProgressEvent::Skipped {
                    index,
                    error: e.to_string(),
                });
                None
            }
        }
    }

    /// Re-runs the remote analyzer for one stored email and overwrites its
    /// summary and category.
    ///
    /// There is no fallback here: an analyzer failure is returned to the
    /// caller and the record is left as it was.
    pub async fn resummarize(&self, id: i32) -> Result<EmailSummary, PipelineError> {
        let span = info_span!("pipeline.resummarize", id);

        async move {
            let existing = self
                .repo
                .get(id)
                .await?
                .ok_or(PipelineError::NotFound { id })?;

            let analysis = self
                .analyzer
                .analyze(&existing.sender, &existing.subject, &existing.body)
                .await?;

            let updated = self
                .repo
                .update_fields(id, analysis.summary, analysis.category, Utc::now())
                .await?
                // Deleted between the read and the write
                .ok_or(PipelineError::NotFound { id })?;

            info!(category = %updated.category, "Re-summarized email");
            Ok(updated)
        }
        .instrument(span)
        .await
    }

    /// Deletes one record. Returns whether it existed.
    pub async fn delete_one(&self, id: i32) -> Result<bool, PipelineError> {
        let existed = self.repo.delete(id).await?;
        if existed {
            info!(id, "Deleted email");
        }
        Ok(existed)
    }

    pub async fn delete_all(&self) -> Result<u64, PipelineError> {
        Ok(self.repo.delete_all().await?)
    }

    /// All stored records, newest first.
    pub async fn list(&self) -> Result<Vec<EmailSummary>, PipelineError> {
        Ok(self.repo.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AnalysisResult, AnalyzerError, DisabledAnalyzer};
    use crate::db::init_in_memory;
    use crate::email::{mock_emails, Category};
    use crate::pipeline::progress::{NoopProgress, ProcessPhase};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Returns a fixed analysis and counts calls.
    struct FixedAnalyzer {
        summary: String,
        category: Category,
        calls: AtomicUsize,
    }

    impl FixedAnalyzer {
        fn new(summary: &str, category: Category) -> Self {
            Self {
                summary: summary.to_string(),
                category,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EmailAnalyzer for FixedAnalyzer {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn analyze(
            &self,
            _sender: &str,
            _subject: &str,
            _body: &str,
        ) -> Result<AnalysisResult, AnalyzerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AnalysisResult {
                summary: self.summary.clone(),
                category: self.category,
            })
        }
    }

    /// Fails for subjects containing "Invoice".
    struct FlakyAnalyzer;

    #[async_trait]
    impl EmailAnalyzer for FlakyAnalyzer {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn analyze(
            &self,
            _sender: &str,
            subject: &str,
            _body: &str,
        ) -> Result<AnalysisResult, AnalyzerError> {
            if subject.contains("Invoice") {
                return Err(AnalyzerError::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                });
            }
            Ok(AnalysisResult {
                summary: "AI summary".to_string(),
                category: Category::Personal,
            })
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<ProgressEvent>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn report(&self, event: ProgressEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    async fn pipeline(analyzer: Arc<dyn EmailAnalyzer>) -> EmailPipeline {
        let repo = EmailRepository::new(init_in_memory().await.unwrap());
        EmailPipeline::new(repo, analyzer, mock_emails())
    }

    #[tokio::test]
    async fn test_all_failures_still_store_every_email() {
        let pipeline = pipeline(Arc::new(DisabledAnalyzer::new("no key"))).await;

        let outcome = pipeline.clear_and_reprocess(&NoopProgress).await.unwrap();

        assert_eq!(outcome.count, 10);
        assert_eq!(outcome.emails.len(), 10);
        assert_eq!(pipeline.repository().count().await.unwrap(), 10);

        let first = &outcome.emails[0];
        assert_eq!(first.subject, "Q4 Planning Meeting - Tuesday 2PM");
        assert_eq!(first.category, Category::Meeting);
        assert!(first.summary.starts_with("Q4 Planning Meeting - Tuesday 2PM. "));
    }

    #[tokio::test]
    async fn test_reprocess_clears_previous_records() {
        let pipeline = pipeline(Arc::new(DisabledAnalyzer::new("no key"))).await;

        let first = pipeline.clear_and_reprocess(&NoopProgress).await.unwrap();
        let second = pipeline.clear_and_reprocess(&NoopProgress).await.unwrap();

        assert_eq!(pipeline.repository().count().await.unwrap(), 10);
        let old_ids: Vec<i32> = first.emails.iter().map(|e| e.id).collect();
        assert!(second.emails.iter().all(|e| !old_ids.contains(&e.id)));
    }

    #[tokio::test]
    async fn test_partial_failures_fall_back_per_item() {
        let pipeline = pipeline(Arc::new(FlakyAnalyzer)).await;
        let progress = RecordingProgress::default();

        let outcome = pipeline.clear_and_reprocess(&progress).await.unwrap();
        assert_eq!(outcome.count, 10);

        for email in &outcome.emails {
            if email.subject.contains("Invoice") {
                assert_eq!(email.category, Category::Invoice);
                assert!(email.summary.starts_with(&email.subject));
            } else {
                assert_eq!(email.summary, "AI summary");
                assert_eq!(email.category, Category::Personal);
            }
        }

        let events = progress.events.lock().unwrap();
        assert_eq!(events.first(), Some(&ProgressEvent::Clearing));
        assert_eq!(
            events.last(),
            Some(&ProgressEvent::Done {
                count: 10,
                total: 10
            })
        );
        let fallbacks = events
            .iter()
            .filter(|e| e.phase() == ProcessPhase::Fallback)
            .count();
        let invoices = mock_emails()
            .iter()
            .filter(|e| e.subject.contains("Invoice"))
            .count();
        assert_eq!(fallbacks, invoices);
    }

    #[tokio::test]
    async fn test_outcome_preserves_source_order() {
        let pipeline = pipeline(Arc::new(FixedAnalyzer::new("s", Category::Other))).await;
        let outcome = pipeline.clear_and_reprocess(&NoopProgress).await.unwrap();

        let subjects: Vec<&str> = outcome.emails.iter().map(|e| e.subject.as_str()).collect();
        let expected: Vec<String> = mock_emails().into_iter().map(|e| e.subject).collect();
        assert_eq!(subjects, expected);
    }

    #[tokio::test]
    async fn test_resummarize_updates_analysis_fields_only() {
        let seed = pipeline(Arc::new(DisabledAnalyzer::new("no key"))).await;
        let outcome = seed.clear_and_reprocess(&NoopProgress).await.unwrap();
        let original = outcome.emails[1].clone();

        let analyzer = Arc::new(FixedAnalyzer::new("Fresh summary.", Category::Announcement));
        let pipeline = EmailPipeline::new(seed.repository().clone(), analyzer.clone(), vec![]);

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = pipeline.resummarize(original.id).await.unwrap();

        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.sender, original.sender);
        assert_eq!(updated.subject, original.subject);
        assert_eq!(updated.body, original.body);
        assert_eq!(updated.processed_at, original.processed_at);
        assert_eq!(updated.summary, "Fresh summary.");
        assert_eq!(updated.category, Category::Announcement);
        assert!(updated.updated_at > original.updated_at);
    }

    #[tokio::test]
    async fn test_resummarize_missing_is_not_found() {
        let pipeline = pipeline(Arc::new(FixedAnalyzer::new("s", Category::Other))).await;
        let err = pipeline.resummarize(12345).await.unwrap_err();
        assert!(matches!(err, PipelineError::NotFound { id: 12345 }));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_resummarize_has_no_fallback() {
        let pipeline = pipeline(Arc::new(DisabledAnalyzer::new("no key"))).await;
        let outcome = pipeline.clear_and_reprocess(&NoopProgress).await.unwrap();
        let original = &outcome.emails[0];

        let err = pipeline.resummarize(original.id).await.unwrap_err();
        assert!(matches!(err, PipelineError::Analysis(_)));

        let unchanged = pipeline.repository().get(original.id).await.unwrap().unwrap();
        assert_eq!(&unchanged, original);
    }

    #[tokio::test]
    async fn test_delete_one_and_all() {
        let pipeline = pipeline(Arc::new(DisabledAnalyzer::new("no key"))).await;
        let outcome = pipeline.clear_and_reprocess(&NoopProgress).await.unwrap();
        let id = outcome.emails[0].id;

        assert!(pipeline.delete_one(id).await.unwrap());
        assert!(!pipeline.delete_one(id).await.unwrap());
        assert_eq!(pipeline.list().await.unwrap().len(), 9);

        assert_eq!(pipeline.delete_all().await.unwrap(), 9);
        assert!(pipeline.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let pipeline = pipeline(Arc::new(DisabledAnalyzer::new("no key"))).await;
        pipeline.clear_and_reprocess(&NoopProgress).await.unwrap();

        let listed = pipeline.list().await.unwrap();
        assert_eq!(listed.len(), 10);
        for pair in listed.windows(2) {
            assert!(
                (pair[0].processed_at, pair[0].id) > (pair[1].processed_at, pair[1].id)
            );
        }
    }
}
