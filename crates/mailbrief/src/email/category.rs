//! Closed category taxonomy for processed emails.
//!
//! Stored as its human label (`"Support Request"`) in a text column and
//! serialized the same way over the wire. Anything outside the seven labels
//! is rejected at parse time; callers that must accept arbitrary remote
//! output use [`Category::from_label_lossy`].

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Category {
    #[sea_orm(string_value = "Meeting")]
    #[serde(rename = "Meeting")]
    Meeting,
    #[sea_orm(string_value = "Invoice")]
    #[serde(rename = "Invoice")]
    Invoice,
    #[sea_orm(string_value = "Support Request")]
    #[serde(rename = "Support Request")]
    SupportRequest,
    #[sea_orm(string_value = "Newsletter")]
    #[serde(rename = "Newsletter")]
    Newsletter,
    #[sea_orm(string_value = "Announcement")]
    #[serde(rename = "Announcement")]
    Announcement,
    #[sea_orm(string_value = "Personal")]
    #[serde(rename = "Personal")]
    Personal,
    #[sea_orm(string_value = "Other")]
    #[serde(rename = "Other")]
    Other,
}

/// A label that does not name any known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown email category '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Meeting,
        Category::Invoice,
        Category::SupportRequest,
        Category::Newsletter,
        Category::Announcement,
        Category::Personal,
        Category::Other,
    ];

    /// Canonical label, as stored and serialized.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Meeting => "Meeting",
            Category::Invoice => "Invoice",
            Category::SupportRequest => "Support Request",
            Category::Newsletter => "Newsletter",
            Category::Announcement => "Announcement",
            Category::Personal => "Personal",
            Category::Other => "Other",
        }
    }

    /// Compact label used on filter chips.
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::SupportRequest => "Support",
            other => other.label(),
        }
    }

    /// Parses a label, mapping anything unrecognized to [`Category::Other`].
    pub fn from_label_lossy(label: &str) -> Self {
        label.parse().unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive, whitespace-trimmed match against the labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
