use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Database, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, Insert, IntoActiveModel as _, QueryFilter,
    QueryOrder, Select, TransactionTrait, sea_query::OnConflict,
};
use tracing::warn;
use uuid::Uuid;

use casework_core::sea_ext::OrderNewestFirst;
use casework_domain::collection::Collection;
use casework_domain::id::HexId;
use casework_records_schema::documents;

use crate::config::RecordsConfig;
use crate::domain::repository::DocumentStore;
use crate::domain::types::{DocumentFilter, DocumentWrite, StoredDocument, WriteBatch, WriteOp};
use crate::error::RecordsServiceError;

// ── Document store ───────────────────────────────────────────────────────────

/// PostgreSQL-backed document store. Holds no connection when disabled.
#[derive(Clone, Debug)]
pub struct DbDocumentStore {
    pub db: Option<DatabaseConnection>,
}

impl DbDocumentStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = Database::connect(database_url)
            .await
            .context("connect to database")?;
        Ok(Self { db: Some(db) })
    }

    /// A store whose every operation fails with `StoreDisabled`.
    pub fn disabled() -> Self {
        Self { db: None }
    }

    /// Build the store described by `config`. No connection is attempted when
    /// the store is disabled.
    pub async fn open(config: &RecordsConfig) -> anyhow::Result<Self> {
        if !config.store_enabled {
            warn!("document store disabled by configuration");
            return Ok(Self::disabled());
        }
        let url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL is required when STORE_ENABLED is true")?;
        Self::connect(url).await
    }

    fn conn(&self) -> Result<&DatabaseConnection, RecordsServiceError> {
        self.db.as_ref().ok_or(RecordsServiceError::StoreDisabled)
    }
}

impl DocumentStore for DbDocumentStore {
    async fn ping(&self) -> Result<(), RecordsServiceError> {
        self.conn()?.ping().await.context("ping database")?;
        Ok(())
    }

    async fn insert(
        &self,
        collection: Collection,
        id: Option<&str>,
        doc: DocumentWrite,
    ) -> Result<StoredDocument, RecordsServiceError> {
        let db = self.conn()?;
        let id = id.map_or_else(|| Uuid::now_v7().to_string(), str::to_owned);
        let now = Utc::now();
        let inserted = insert_new(active_model(collection, &id, &doc, now))
            .exec_without_returning(db)
            .await
            .context("insert document")?;
        if inserted == 0 {
            return Err(RecordsServiceError::RecordAlreadyExists);
        }
        Ok(StoredDocument {
            id,
            hex_id: doc.hex_id,
            data: doc.data,
            created_at: now,
        })
    }

    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<StoredDocument>, RecordsServiceError> {
        let model = documents::Entity::find_by_id((collection.name().to_owned(), id.to_owned()))
            .one(self.conn()?)
            .await
            .context("find document by id")?;
        model.map(stored_from_model).transpose()
    }

    async fn list(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Vec<StoredDocument>, RecordsServiceError> {
        let db = self.conn()?;
        let models = list_query(collection, filter)
            .all(db)
            .await
            .with_context(|| format!("list {collection} documents"))?;
        models.into_iter().map(stored_from_model).collect()
    }

    async fn replace(
        &self,
        collection: Collection,
        id: &str,
        doc: DocumentWrite,
    ) -> Result<bool, RecordsServiceError> {
        let db = self.conn()?;
        let existing = documents::Entity::find_by_id((collection.name().to_owned(), id.to_owned()))
            .one(db)
            .await
            .context("find document for replace")?;
        let Some(row) = existing else {
            return Ok(false);
        };
        let mut am = row.into_active_model();
        if let Some(hex_id) = doc.hex_id {
            am.hex_id = Set(Some(hex_id.into()));
        }
        am.subject_id = Set(doc.index.subject_id);
        am.category = Set(doc.index.category);
        am.active = Set(doc.index.active);
        am.business_date = Set(doc.index.business_date);
        am.data = Set(doc.data);
        am.update(db).await.context("replace document")?;
        Ok(true)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), RecordsServiceError> {
        documents::Entity::delete_many()
            .filter(documents::Column::Collection.eq(collection.name()))
            .filter(documents::Column::Id.eq(id))
            .exec(self.conn()?)
            .await
            .context("delete document")?;
        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), RecordsServiceError> {
        let db = self.conn()?;
        if batch.is_empty() {
            return Ok(());
        }
        let ops = batch.into_ops();
        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                let now = Utc::now();
                for op in ops {
                    apply_op(txn, op, now).await?;
                }
                Ok(())
            })
        })
        .await
        .context("commit write batch")?;
        Ok(())
    }
}

async fn apply_op(txn: &DatabaseTransaction, op: WriteOp, now: DateTime<Utc>) -> Result<(), DbErr> {
    match op {
        WriteOp::Put {
            collection,
            id,
            doc,
        } => {
            upsert(active_model(collection, &id, &doc, now))
                .exec_without_returning(txn)
                .await?;
        }
        WriteOp::Delete { collection, id } => {
            documents::Entity::delete_many()
                .filter(documents::Column::Collection.eq(collection.name()))
                .filter(documents::Column::Id.eq(id))
                .exec(txn)
                .await?;
        }
    }
    Ok(())
}

/// Documents of `collection` matching `filter`, newest business date first,
/// undated last, then newest write first.
fn list_query(collection: Collection, filter: &DocumentFilter) -> Select<documents::Entity> {
    let mut query =
        documents::Entity::find().filter(documents::Column::Collection.eq(collection.name()));
    if let Some(subject_id) = &filter.subject_id {
        query = query.filter(documents::Column::SubjectId.eq(subject_id.as_str()));
    }
    if let Some(category) = &filter.category {
        query = query.filter(documents::Column::Category.eq(category.as_str()));
    }
    if let Some(active) = filter.active {
        query = query.filter(documents::Column::Active.eq(active));
    }
    query
        .order_newest_first(documents::Column::BusinessDate)
        .order_by_desc(documents::Column::CreatedAt)
}

/// Insert that leaves an existing row untouched; zero affected rows means the
/// key was taken.
fn insert_new(am: documents::ActiveModel) -> Insert<documents::ActiveModel> {
    documents::Entity::insert(am).on_conflict(
        OnConflict::columns([documents::Column::Collection, documents::Column::Id])
            .do_nothing()
            .to_owned(),
    )
}

/// Insert or overwrite everything except `created_at`.
fn upsert(am: documents::ActiveModel) -> Insert<documents::ActiveModel> {
    documents::Entity::insert(am).on_conflict(
        OnConflict::columns([documents::Column::Collection, documents::Column::Id])
            .update_columns([
                documents::Column::HexId,
                documents::Column::SubjectId,
                documents::Column::Category,
                documents::Column::Active,
                documents::Column::BusinessDate,
                documents::Column::Data,
            ])
            .to_owned(),
    )
}

fn active_model(
    collection: Collection,
    id: &str,
    doc: &DocumentWrite,
    created_at: DateTime<Utc>,
) -> documents::ActiveModel {
    documents::ActiveModel {
        collection: Set(collection.name().to_owned()),
        id: Set(id.to_owned()),
        hex_id: Set(doc.hex_id.clone().map(String::from)),
        subject_id: Set(doc.index.subject_id.clone()),
        category: Set(doc.index.category.clone()),
        active: Set(doc.index.active),
        business_date: Set(doc.index.business_date),
        data: Set(doc.data.clone()),
        created_at: Set(created_at),
    }
}

fn stored_from_model(model: documents::Model) -> Result<StoredDocument, RecordsServiceError> {
    let hex_id = model
        .hex_id
        .as_deref()
        .map(HexId::parse)
        .transpose()
        .with_context(|| format!("stored hex id of {}/{}", model.collection, model.id))?;
    Ok(StoredDocument {
        id: model.id,
        hex_id,
        data: model.data,
        created_at: model.created_at,
    })
}
