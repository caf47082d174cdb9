use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::filter::{CategoryFilter, EmailFilter};
use super::format::{count_label, processed_label};
use super::DashboardApi;
use crate::db::EmailSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Destructive,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn success(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn destructive(title: &str, description: String) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.to_string(),
            description,
        }
    }
}

/// One displayable list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRow {
    pub id: i32,
    pub subject: String,
    pub sender: String,
    pub sender_email: String,
    pub summary: String,
    pub category: &'static str,
    pub processed: String,
    pub body: String,
}

impl EmailRow {
    pub fn new(email: &EmailSummary, now: DateTime<Utc>) -> Self {
        Self {
            id: email.id,
            subject: email.subject.clone(),
            sender: email.sender.clone(),
            sender_email: email.sender_email.clone(),
            summary: email.summary.clone(),
            category: email.category.label(),
            processed: processed_label(email.processed_at, now),
            body: email.body.clone(),
        }
    }
}

/// What the dashboard should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    /// Initial fetch failed; offer "Try again" (see [`Dashboard::retry`]).
    LoadFailed { message: String },
    /// Nothing stored; offer "Process Mock Emails".
    Empty,
    /// Emails exist but none pass the filter.
    NoMatches { count_label: String },
    List {
        count_label: String,
        rows: Vec<EmailRow>,
    },
}

enum LoadState {
    Loading,
    Loaded(Vec<EmailSummary>),
    Failed(String),
}

/// Presentation state for the email list.
///
/// Holds the cached list, the current filter and pending notifications.
/// Every successful mutation invalidates the cache and refetches; a failed
/// mutation only queues a notification.
pub struct Dashboard<A> {
    api: A,
    state: LoadState,
    filter: EmailFilter,
    notifications: VecDeque<Notification>,
    processing: bool,
}

impl<A: DashboardApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: LoadState::Loading,
            filter: EmailFilter::default(),
            notifications: VecDeque::new(),
            processing: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetches the full list and replaces the cache.
    pub async fn refresh(&mut self) {
        self.state = match self.api.list_emails().await {
            Ok(emails) => LoadState::Loaded(emails),
            Err(e) => {
                log::warn!("Failed to load emails: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub async fn retry(&mut self) {
        self.state = LoadState::Loading;
        self.refresh().await;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn filter(&self) -> &EmailFilter {
        &self.filter
    }

    /// True while a batch run is in flight.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Cached records, if loaded.
    pub fn emails(&self) -> Option<&[EmailSummary]> {
        match &self.state {
            LoadState::Loaded(emails) => Some(emails),
            _ => None,
        }
    }

    pub fn view(&self, now: DateTime<Utc>) -> View {
        let emails = match &self.state {
            LoadState::Loading => return View::Loading,
            LoadState::Failed(message) => {
                return View::LoadFailed {
                    message: message.clone(),
                }
            }
            LoadState::Loaded(emails) => emails,
        };

        if emails.is_empty() {
            return View::Empty;
        }

        let visible = self.filter.apply(emails);
        let count_label = count_label(visible.len(), emails.len());
        if visible.is_empty() {
            return View::NoMatches { count_label };
        }

        View::List {
            count_label,
            rows: visible.into_iter().map(|e| EmailRow::new(e, now)).collect(),
        }
    }

    pub async fn process(&mut self) -> bool {
        self.processing = true;
        let result = self.api.process_emails().await;
        self.processing = false;

        match result {
            Ok(_) => {
                self.refresh().await;
                self.notify(Notification::success(
                    "Processing complete",
                    "Mock emails have been summarized and categorized successfully.",
                ));
                true
            }
            Err(e) => {
                self.notify(Notification::destructive("Processing failed", e.to_string()));
                false
            }
        }
    }

    pub async fn resummarize(&mut self, id: i32) -> bool {
        match self.api.resummarize(id).await {
            Ok(_) => {
                self.refresh().await;
                self.notify(Notification::success(
                    "Re-summarization complete",
                    "The email has been re-analyzed successfully.",
                ));
                true
            }
            Err(e) => {
                self.notify(Notification::destructive(
                    "Re-summarization failed",
                    e.to_string(),
                ));
                false
            }
        }
    }

    pub async fn delete(&mut self, id: i32) -> bool {
        match self.api.delete_email(id).await {
            Ok(()) => {
                self.refresh().await;
                self.notify(Notification::success(
                    "Email deleted",
                    "The email summary has been removed.",
                ));
                true
            }
            Err(e) => {
                self.notify(Notification::destructive("Delete failed", e.to_string()));
                false
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// Drains queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}
