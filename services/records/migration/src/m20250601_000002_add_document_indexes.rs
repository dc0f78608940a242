use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_documents::Documents;

#[derive(DeriveMigrationName)]
pub struct Migration;

const IDX_COLLECTION_DATE: &str = "idx_documents_collection_business_date";
const IDX_COLLECTION_SUBJECT: &str = "idx_documents_collection_subject_id";
const IDX_COLLECTION_CATEGORY: &str = "idx_documents_collection_category";
const IDX_COLLECTION_ACTIVE: &str = "idx_documents_collection_active";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // List reads: WHERE collection = $1 ORDER BY business_date DESC NULLS LAST, created_at DESC
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_COLLECTION_DATE)
                    .table(Documents::Table)
                    .col(Documents::Collection)
                    .col(Documents::BusinessDate)
                    .col(Documents::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_COLLECTION_SUBJECT)
                    .table(Documents::Table)
                    .col(Documents::Collection)
                    .col(Documents::SubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_COLLECTION_CATEGORY)
                    .table(Documents::Table)
                    .col(Documents::Collection)
                    .col(Documents::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_COLLECTION_ACTIVE)
                    .table(Documents::Table)
                    .col(Documents::Collection)
                    .col(Documents::Active)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_COLLECTION_ACTIVE,
            IDX_COLLECTION_CATEGORY,
            IDX_COLLECTION_SUBJECT,
            IDX_COLLECTION_DATE,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Documents::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}
