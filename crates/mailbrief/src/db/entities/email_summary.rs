//! Email summary entity: one analyzed source email.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::email::Category;

/// A processed email as stored and as served over HTTP.
///
/// Serialized with camelCase keys and the category's display label.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "email_summaries")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name of the sender.
    pub sender: String,

    /// Sender address. Not validated.
    pub sender_email: String,

    pub subject: String,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    /// Generated by the remote analyzer or the fallback classifier.
    #[sea_orm(column_type = "Text")]
    pub summary: String,

    pub category: Category,

    /// Set once at creation.
    pub processed_at: DateTimeUtc,

    /// Set at creation, refreshed on every re-summarization.
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
