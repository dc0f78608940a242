use serde_json::{Map, Value};

use crate::domain::repository::DocumentStore;
use crate::domain::types::{Document, DocumentFilter, DocumentWrite, Stored};
use crate::error::RecordsServiceError;

// ── CreateRecord ─────────────────────────────────────────────────────────────

pub struct CreateRecordUseCase<S: DocumentStore> {
    pub store: S,
}

impl<S: DocumentStore> CreateRecordUseCase<S> {
    /// Store a new record. Naturally keyed records (students) fail with
    /// `RecordAlreadyExists` when the key is taken; other records get a
    /// generated id.
    pub async fn execute<T: Document>(&self, record: T) -> Result<Stored<T>, RecordsServiceError> {
        let natural_id = record.natural_id();
        if natural_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(RecordsServiceError::InvalidRecord(
                "document key must not be empty".into(),
            ));
        }
        let (doc, record) = DocumentWrite::encode(&record, None)?;
        let stored = self
            .store
            .insert(T::COLLECTION, natural_id.as_deref(), doc)
            .await?;
        Ok(Stored {
            id: stored.id,
            hex_id: stored.hex_id,
            created_at: stored.created_at,
            record,
        })
    }
}

// ── ListRecords ──────────────────────────────────────────────────────────────

pub struct ListRecordsUseCase<S: DocumentStore> {
    pub store: S,
}

impl<S: DocumentStore> ListRecordsUseCase<S> {
    /// Records matching `filter`, newest business date first. Collections
    /// without subject or category columns reject those filters.
    pub async fn execute<T: Document>(
        &self,
        filter: &DocumentFilter,
    ) -> Result<Vec<Stored<T>>, RecordsServiceError> {
        if !T::FILTERABLE && filter.narrows_by_content() {
            return Err(RecordsServiceError::InvalidQuery(format!(
                "{} cannot be filtered by subject or category",
                T::COLLECTION
            )));
        }
        self.store
            .list(T::COLLECTION, filter)
            .await?
            .into_iter()
            .map(Stored::decode)
            .collect()
    }
}

// ── GetRecord ────────────────────────────────────────────────────────────────

pub struct GetRecordUseCase<S: DocumentStore> {
    pub store: S,
}

impl<S: DocumentStore> GetRecordUseCase<S> {
    pub async fn execute<T: Document>(
        &self,
        id: &str,
    ) -> Result<Option<Stored<T>>, RecordsServiceError> {
        self.store
            .get(T::COLLECTION, id)
            .await?
            .map(Stored::decode)
            .transpose()
    }
}

// ── UpdateRecord ─────────────────────────────────────────────────────────────

pub struct UpdateRecordUseCase<S: DocumentStore> {
    pub store: S,
}

impl<S: DocumentStore> UpdateRecordUseCase<S> {
    /// Merge `patch` into the stored body one top-level field at a time and
    /// validate the result as `T`. Nested objects are replaced, not merged.
    pub async fn execute<T: Document>(
        &self,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<Stored<T>, RecordsServiceError> {
        if patch.is_empty() {
            return Err(RecordsServiceError::MissingData);
        }
        let existing = self
            .store
            .get(T::COLLECTION, id)
            .await?
            .ok_or(RecordsServiceError::RecordNotFound)?;

        let Value::Object(mut body) = existing.data else {
            return Err(anyhow::anyhow!("{} document {id} is not an object", T::COLLECTION).into());
        };
        body.extend(patch);
        let record: T = serde_json::from_value(Value::Object(body))
            .map_err(|e| RecordsServiceError::InvalidRecord(e.to_string()))?;

        if let Some(natural_id) = record.natural_id() {
            if natural_id != id {
                return Err(RecordsServiceError::InvalidRecord(format!(
                    "document key cannot change from {id} to {natural_id}"
                )));
            }
        }

        let (doc, record) = DocumentWrite::encode(&record, None)?;
        if !self.store.replace(T::COLLECTION, id, doc).await? {
            return Err(RecordsServiceError::RecordNotFound);
        }
        Ok(Stored {
            id: id.to_owned(),
            hex_id: existing.hex_id,
            created_at: existing.created_at,
            record,
        })
    }
}

// ── DeleteRecord ─────────────────────────────────────────────────────────────

pub struct DeleteRecordUseCase<S: DocumentStore> {
    pub store: S,
}

impl<S: DocumentStore> DeleteRecordUseCase<S> {
    /// Remove the record if it exists.
    pub async fn execute<T: Document>(&self, id: &str) -> Result<(), RecordsServiceError> {
        self.store.delete(T::COLLECTION, id).await
    }
}
