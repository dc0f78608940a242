use axum::{Json, extract::State, http::StatusCode};

use crate::fixtures::FixtureSet;
use crate::state::AppState;
use crate::usecase::reset::{ResetDatabaseUseCase, ResetOutcome};

// ── POST /admin/reset ────────────────────────────────────────────────────────

pub async fn reset_database(State(state): State<AppState>) -> (StatusCode, Json<ResetOutcome>) {
    let usecase = ResetDatabaseUseCase {
        store: state.store(),
        fixtures: FixtureSet::builtin(),
    };
    let result = usecase.execute().await;
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => e.status(),
    };
    (status, Json(ResetOutcome::from(&result)))
}
