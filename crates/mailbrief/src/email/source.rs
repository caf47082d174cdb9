//! Source emails: the raw input to the processing pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::mock::MOCK_EMAILS;
use crate::config::SourcesConfig;
use crate::error::SourceError;

/// An unprocessed email as it enters the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEmail {
    /// Display name of the sender.
    pub sender: String,
    /// Sender address. Not validated.
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

impl SourceEmail {
    pub fn new(
        sender: impl Into<String>,
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            sender_email: sender_email.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Returns the built-in sample inbox, in processing order.
pub fn mock_emails() -> Vec<SourceEmail> {
    MOCK_EMAILS
        .iter()
        .map(|(sender, sender_email, subject, body)| {
            SourceEmail::new(*sender, *sender_email, *subject, *body)
        })
        .collect()
}

/// Loads source emails from a JSON fixture file (an array of
/// `{sender, senderEmail, subject, body}` objects).
pub fn load_source_emails(path: &Path) -> Result<Vec<SourceEmail>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SourceError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let emails: Vec<SourceEmail> =
        serde_json::from_str(&content).map_err(|e| SourceError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    if emails.is_empty() {
        return Err(SourceError::Empty(path.to_path_buf()));
    }

    log::info!(
        "Loaded {} source emails from {}",
        emails.len(),
        path.display()
    );
    Ok(emails)
}

/// The fixture named in `sources.fixture_path`, or the built-in mock inbox.
pub fn configured_sources(config: &SourcesConfig) -> Result<Vec<SourceEmail>, SourceError> {
    match &config.fixture_path {
        Some(path) => load_source_emails(path),
        None => Ok(mock_emails()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mock_emails_has_ten_entries() {
        let emails = mock_emails();
        assert_eq!(emails.len(), 10);
        assert_eq!(emails[0].sender, "Sarah Johnson");
        assert_eq!(emails[9].sender_email, "notifications@linkedin.com");
    }

    #[test]
    fn test_mock_emails_are_ascii() {
        for email in mock_emails() {
            assert!(email.body.is_ascii(), "non-ASCII body in '{}'", email.subject);
            assert!(email.subject.is_ascii());
        }
    }

    #[test]
    fn test_load_source_emails_from_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"sender":"Ann","senderEmail":"ann@example.com","subject":"Hello","body":"Hi"}}]"#
        )
        .unwrap();

        let emails = load_source_emails(file.path()).unwrap();
        assert_eq!(
            emails,
            vec![SourceEmail::new("Ann", "ann@example.com", "Hello", "Hi")]
        );
    }

    #[test]
    fn test_load_source_emails_rejects_empty_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = load_source_emails(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Empty(_)));
    }

    #[test]
    fn test_configured_sources_defaults_to_mock_inbox() {
        let emails = configured_sources(&SourcesConfig::default()).unwrap();
        assert_eq!(emails, mock_emails());
    }

    #[test]
    fn test_load_source_emails_missing_file() {
        let err = load_source_emails(Path::new("/nonexistent/fixture.json")).unwrap_err();
        assert!(matches!(err, SourceError::ReadFile { .. }));
    }
}
