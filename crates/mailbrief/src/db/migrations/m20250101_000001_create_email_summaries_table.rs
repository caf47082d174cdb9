//! Migration to create the email_summaries table.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailSummaries::Table)
                    .if_not_exists()
                    .col(pk_auto(EmailSummaries::Id))
                    .col(string(EmailSummaries::Sender).not_null())
                    .col(string(EmailSummaries::SenderEmail).not_null())
                    .col(string(EmailSummaries::Subject).not_null())
                    .col(text(EmailSummaries::Body).not_null())
                    .col(text(EmailSummaries::Summary).not_null())
                    .col(text(EmailSummaries::Category).not_null())
                    .col(timestamp_with_time_zone(EmailSummaries::ProcessedAt).not_null())
                    .col(timestamp_with_time_zone(EmailSummaries::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // The list endpoint sorts newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_email_summaries_processed_at")
                    .table(EmailSummaries::Table)
                    .col(EmailSummaries::ProcessedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailSummaries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmailSummaries {
    Table,
    Id,
    Sender,
    SenderEmail,
    Subject,
    Body,
    Summary,
    Category,
    ProcessedAt,
    UpdatedAt,
}
