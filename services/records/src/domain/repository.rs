#![allow(async_fn_in_trait)]

use casework_domain::collection::Collection;

use crate::domain::types::{DocumentFilter, DocumentWrite, StoredDocument, WriteBatch};
use crate::error::RecordsServiceError;

/// Port to the document store holding every collection.
///
/// Implementations that are disabled must fail every call with
/// [`RecordsServiceError::StoreDisabled`] without touching any backend.
pub trait DocumentStore: Send + Sync {
    /// Check that the store is enabled and reachable.
    async fn ping(&self) -> Result<(), RecordsServiceError>;

    /// Write a new document. A generated identifier is used when `id` is `None`.
    /// Fails with `RecordAlreadyExists` if `id` is already taken.
    async fn insert(
        &self,
        collection: Collection,
        id: Option<&str>,
        doc: DocumentWrite,
    ) -> Result<StoredDocument, RecordsServiceError>;

    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<StoredDocument>, RecordsServiceError>;

    /// Documents matching `filter`, newest business date first. Documents
    /// without a business date come last; ties fall back to `created_at`
    /// descending.
    async fn list(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Vec<StoredDocument>, RecordsServiceError>;

    /// Replace the body of an existing document, keeping its `created_at` and
    /// `hex_id` unless `doc` carries a new one. Returns `false` if absent.
    async fn replace(
        &self,
        collection: Collection,
        id: &str,
        doc: DocumentWrite,
    ) -> Result<bool, RecordsServiceError>;

    /// Delete a document. Deleting an absent document is not an error.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), RecordsServiceError>;

    /// Apply every operation of `batch` atomically.
    async fn commit(&self, batch: WriteBatch) -> Result<(), RecordsServiceError>;
}
