use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Documents::Collection).text().not_null())
                    .col(ColumnDef::new(Documents::Id).text().not_null())
                    .col(ColumnDef::new(Documents::HexId).text().null())
                    .col(ColumnDef::new(Documents::SubjectId).text().null())
                    .col(ColumnDef::new(Documents::Category).text().null())
                    .col(ColumnDef::new(Documents::Active).boolean().null())
                    .col(
                        ColumnDef::new(Documents::BusinessDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Documents::Data).json_binary().not_null())
                    .col(
                        ColumnDef::new(Documents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Documents::Collection)
                            .col(Documents::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Documents {
    Table,
    Collection,
    Id,
    HexId,
    SubjectId,
    Category,
    Active,
    BusinessDate,
    Data,
    CreatedAt,
}
