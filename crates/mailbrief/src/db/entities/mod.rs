//! Database entities.

pub mod email_summary;

pub use email_summary::Entity as EmailSummaries;
pub use email_summary::Model as EmailSummary;
