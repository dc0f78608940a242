use axum::{extract::State, http::StatusCode};
use tracing::warn;

use crate::domain::repository::DocumentStore;
use crate::state::AppState;

/// Handler for `GET /readyz`: ready when the document store answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.store().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            warn!(error = %e.detail(), kind = e.kind(), "document store not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
