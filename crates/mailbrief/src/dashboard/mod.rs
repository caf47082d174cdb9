//! Presentation logic for the email dashboard.
//!
//! Rendering is left to the front end. This module owns what it renders:
//! the cached list, search and category filtering, the count and relative
//! time labels, the view state and toast notifications. It talks to the
//! server through [`DashboardApi`]; [`ApiClient`] is the HTTP implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::ProcessResponse;
use crate::db::EmailSummary;

pub mod client;
pub mod filter;
pub mod format;
pub mod state;

pub use client::ApiClient;
pub use filter::{filter_chips, CategoryFilter, EmailFilter};
pub use format::{count_label, distance_in_words, processed_label};
pub use state::{Dashboard, EmailRow, Notification, NotificationKind, View};

#[derive(Error, Debug)]
pub enum DashboardError {
    /// Non-2xx response; displays as `"{status}: {body}"`.
    #[error("{status}: {body}")]
    Api { status: u16, body: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Operations the dashboard needs from the server.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn list_emails(&self) -> Result<Vec<EmailSummary>, DashboardError>;

    async fn process_emails(&self) -> Result<ProcessResponse, DashboardError>;

    async fn resummarize(&self, id: i32) -> Result<EmailSummary, DashboardError>;

    async fn delete_email(&self, id: i32) -> Result<(), DashboardError>;
}
