use sea_orm::entity::prelude::*;

/// One stored document. `collection` + `id` form the document key; the typed
/// body lives in `data`, and the remaining columns are indexes extracted from
/// the body at write time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub hex_id: Option<String>,
    pub subject_id: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
    pub business_date: Option<chrono::DateTime<chrono::Utc>>,
    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
