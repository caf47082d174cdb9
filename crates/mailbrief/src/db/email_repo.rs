//! Email summary repository: CRUD operations for the `email_summaries` table.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder, Set,
};

use super::entities::email_summary::{ActiveModel, Column, Entity};
use super::entities::EmailSummary;
use super::DatabaseError;
use crate::email::Category;

/// Fields supplied by the caller when inserting a record. `id` and both
/// timestamps are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmailSummary {
    pub sender: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
    pub summary: String,
    pub category: Category,
}

/// Persistence gateway for processed emails.
///
/// Each method is a single round trip; none of them wrap work in a
/// transaction. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct EmailRepository {
    db: DatabaseConnection,
}

impl EmailRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// All records, newest `processed_at` first, ties broken by higher id.
    pub async fn list_all(&self) -> Result<Vec<EmailSummary>, DatabaseError> {
        let rows = Entity::find()
            .order_by_desc(Column::ProcessedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Option<EmailSummary>, DatabaseError> {
        Ok(Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Inserts a record and returns it with its generated id and timestamps.
    pub async fn create(&self, new: NewEmailSummary) -> Result<EmailSummary, DatabaseError> {
        let now = Utc::now();
        let model = ActiveModel {
            id: NotSet,
            sender: Set(new.sender),
            sender_email: Set(new.sender_email),
            subject: Set(new.subject),
            body: Set(new.body),
            summary: Set(new.summary),
            category: Set(new.category),
            processed_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&self.db).await?;
        log::debug!("Created email summary {}", created.id);
        Ok(created)
    }

    /// Overwrites the analysis fields of one record.
    ///
    /// Returns `None` if no record has this id. Identity fields and
    /// `processed_at` are left untouched.
    pub async fn update_fields(
        &self,
        id: i32,
        summary: String,
        category: Category,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<EmailSummary>, DatabaseError> {
        let model = ActiveModel {
            id: Set(id),
            summary: Set(summary),
            category: Set(category),
            updated_at: Set(updated_at),
            sender: NotSet,
            sender_email: NotSet,
            subject: NotSet,
            body: NotSet,
            processed_at: NotSet,
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes one record. Returns whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        let result = Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Deletes every record. Returns how many were removed.
    pub async fn delete_all(&self) -> Result<u64, DatabaseError> {
        let result = Entity::delete_many().exec(&self.db).await?;
        if result.rows_affected > 0 {
            log::info!("Deleted {} email summaries", result.rows_affected);
        }
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DatabaseError> {
        Ok(Entity::find().count(&self.db).await?)
    }
}
