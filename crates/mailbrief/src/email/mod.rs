//! Email domain types: the category taxonomy and the static source emails
//! fed into the processing pipeline.

pub mod category;
mod mock;
pub mod source;

pub use category::{Category, UnknownCategory};
pub use source::{configured_sources, load_source_emails, mock_emails, SourceEmail};
