use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use casework_domain::id::HexId;

use crate::domain::types::{Document, DocumentFilter, Stored};
use crate::error::RecordsServiceError;
use crate::state::AppState;
use crate::usecase::record::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordUseCase, ListRecordsUseCase,
    UpdateRecordUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// A record body with its store metadata alongside the record's own fields.
#[derive(Debug, Serialize)]
pub struct RecordResponse<T> {
    pub id: String,
    #[serde(rename = "hexId", skip_serializing_if = "Option::is_none")]
    pub hex_id: Option<HexId>,
    #[serde(
        rename = "createdAt",
        serialize_with = "casework_core::serde::to_rfc3339_ms"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: T,
}

impl<T> From<Stored<T>> for RecordResponse<T> {
    fn from(stored: Stored<T>) -> Self {
        Self {
            id: stored.id,
            hex_id: stored.hex_id,
            created_at: stored.created_at,
            record: stored.record,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RecordListQuery {
    /// Subject identifier: student, family or institution id.
    pub subject: Option<String>,
    pub category: Option<String>,
}

impl From<RecordListQuery> for DocumentFilter {
    fn from(query: RecordListQuery) -> Self {
        Self {
            subject_id: query.subject,
            category: query.category,
            active: None,
        }
    }
}

// ── GET /{collection} ────────────────────────────────────────────────────────

pub async fn list_records<T: Document>(
    State(state): State<AppState>,
    Query(query): Query<RecordListQuery>,
) -> Result<Json<Vec<RecordResponse<T>>>, RecordsServiceError> {
    let usecase = ListRecordsUseCase {
        store: state.store(),
    };
    let records = usecase.execute::<T>(&query.into()).await?;
    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

// ── POST /{collection} ───────────────────────────────────────────────────────

pub async fn create_record<T: Document>(
    State(state): State<AppState>,
    Json(record): Json<T>,
) -> Result<(StatusCode, Json<RecordResponse<T>>), RecordsServiceError> {
    let usecase = CreateRecordUseCase {
        store: state.store(),
    };
    let stored = usecase.execute(record).await?;
    Ok((StatusCode::CREATED, Json(stored.into())))
}

// ── GET /{collection}/{id} ───────────────────────────────────────────────────

pub async fn get_record<T: Document>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse<T>>, RecordsServiceError> {
    let usecase = GetRecordUseCase {
        store: state.store(),
    };
    let stored = usecase
        .execute::<T>(&id)
        .await?
        .ok_or(RecordsServiceError::RecordNotFound)?;
    Ok(Json(stored.into()))
}

// ── PATCH /{collection}/{id} ─────────────────────────────────────────────────

pub async fn update_record<T: Document>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<RecordResponse<T>>, RecordsServiceError> {
    let usecase = UpdateRecordUseCase {
        store: state.store(),
    };
    let stored = usecase.execute::<T>(&id, patch).await?;
    Ok(Json(stored.into()))
}

// ── DELETE /{collection}/{id} ────────────────────────────────────────────────

pub async fn delete_record<T: Document>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, RecordsServiceError> {
    let usecase = DeleteRecordUseCase {
        store: state.store(),
    };
    usecase.execute::<T>(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
