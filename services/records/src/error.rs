use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Records service error variants.
#[derive(Debug, thiserror::Error)]
pub enum RecordsServiceError {
    #[error("record not found")]
    RecordNotFound,
    #[error("record already exists")]
    RecordAlreadyExists,
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("missing data")]
    MissingData,
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
    #[error("document store is disabled or not initialized")]
    StoreDisabled,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecordsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::RecordAlreadyExists => "RECORD_ALREADY_EXISTS",
            Self::InvalidRecord(_) => "INVALID_RECORD",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidFixture(_) => "INVALID_FIXTURE",
            Self::StoreDisabled => "STORE_DISABLED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::RecordNotFound => StatusCode::NOT_FOUND,
            Self::RecordAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidRecord(_) | Self::MissingData | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::StoreDisabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidFixture(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message including the underlying cause, for operator-facing output.
    /// `Display` hides the cause of `Internal` from API clients.
    pub fn detail(&self) -> String {
        match self {
            Self::Internal(e) => format!("{e:#}"),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RecordsServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
