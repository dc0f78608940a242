use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use casework_domain::student::{Student, StudentStatus};

use crate::error::RecordsServiceError;
use crate::handlers::record::RecordResponse;
use crate::state::AppState;
use crate::usecase::student::{ListStudentsUseCase, SetStudentStatusUseCase};

// ── GET /students ────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct StudentListQuery {
    /// `active` or `inactive`; omitted lists every student.
    pub status: Option<StudentStatus>,
}

pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> Result<Json<Vec<RecordResponse<Student>>>, RecordsServiceError> {
    let usecase = ListStudentsUseCase {
        store: state.store(),
    };
    let students = usecase.execute(query.status).await?;
    Ok(Json(students.into_iter().map(RecordResponse::from).collect()))
}

// ── PUT /students/{id}/status ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: StudentStatus,
}

pub async fn set_student_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SetStatusRequest>,
) -> Result<Json<RecordResponse<Student>>, RecordsServiceError> {
    let usecase = SetStudentStatusUseCase {
        store: state.store(),
    };
    let stored = usecase.execute(&id, body.status).await?;
    Ok(Json(stored.into()))
}
