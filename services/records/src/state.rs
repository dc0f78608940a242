use crate::infra::db::DbDocumentStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: DbDocumentStore,
}

impl AppState {
    pub fn store(&self) -> DbDocumentStore {
        self.store.clone()
    }
}
