//! Prompt text sent to the remote model.

use crate::sanitize::sanitize_text;

pub const SYSTEM_PROMPT: &str = r#"You are an expert email assistant that analyzes emails and provides concise summaries with accurate categorization.

Your task:
1. Read the email content carefully
2. Generate a concise 2-3 sentence summary that captures the key points and action items
3. Classify the email into one of these categories: Meeting, Invoice, Support Request, Newsletter, Announcement, Personal, or Other

Respond with JSON in this exact format:
{
  "summary": "2-3 sentence summary here",
  "category": "Category Name"
}

Categories guide:
- Meeting: Scheduling, invitations, meeting notes, calendar events
- Invoice: Bills, payments, financial documents, receipts
- Support Request: Help requests, bug reports, technical issues
- Newsletter: Marketing emails, updates, digests, subscriptions
- Announcement: Company news, product launches, important updates
- Personal: Direct personal communication, casual messages
- Other: Anything that doesn't fit the above categories"#;

/// Email fields after ASCII sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedEmail {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl SanitizedEmail {
    pub fn new(sender: &str, subject: &str, body: &str) -> Self {
        Self {
            sender: sanitize_text(sender),
            subject: sanitize_text(subject),
            body: sanitize_text(body),
        }
    }

    pub fn user_prompt(&self) -> String {
        format!(
            "Analyze this email:\n\nFrom: {}\nSubject: {}\n\nBody:\n{}",
            self.sender, self.subject, self.body
        )
    }
}
