use axum::http::StatusCode;

/// Handler for `GET /healthz`. Services provide their own `/readyz`, since
/// readiness depends on their backing store.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
