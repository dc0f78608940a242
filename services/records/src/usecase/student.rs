use tracing::info;

use casework_domain::student::{Student, StudentStatus};

use crate::domain::repository::DocumentStore;
use crate::domain::types::{Document, DocumentFilter, DocumentWrite, Stored};
use crate::error::RecordsServiceError;

// ── ListStudents ─────────────────────────────────────────────────────────────

pub struct ListStudentsUseCase<S: DocumentStore> {
    pub store: S,
}

impl<S: DocumentStore> ListStudentsUseCase<S> {
    /// Students in one status view, or all of them when `status` is `None`.
    pub async fn execute(
        &self,
        status: Option<StudentStatus>,
    ) -> Result<Vec<Stored<Student>>, RecordsServiceError> {
        let filter = status
            .map(|s| DocumentFilter::active(s.is_active()))
            .unwrap_or_default();
        self.store
            .list(Student::COLLECTION, &filter)
            .await?
            .into_iter()
            .map(Stored::decode)
            .collect()
    }
}

// ── SetStudentStatus ─────────────────────────────────────────────────────────

pub struct SetStudentStatusUseCase<S: DocumentStore> {
    pub store: S,
}

impl<S: DocumentStore> SetStudentStatusUseCase<S> {
    /// Archive (`Inactive`) or restore (`Active`) a student. The student keeps
    /// its `Documento`, so references to it stay valid.
    pub async fn execute(
        &self,
        id: &str,
        status: StudentStatus,
    ) -> Result<Stored<Student>, RecordsServiceError> {
        let collection = Student::COLLECTION;
        let existing = self
            .store
            .get(collection, id)
            .await?
            .ok_or(RecordsServiceError::RecordNotFound)?;
        let mut stored = Stored::<Student>::decode(existing)?;
        if stored.record.status() == status {
            return Ok(stored);
        }
        stored.record.active = status.is_active();
        let doc = DocumentWrite::from_record(&stored.record, None)?;
        if !self.store.replace(collection, id, doc).await? {
            return Err(RecordsServiceError::RecordNotFound);
        }
        info!(student = id, view = status.view_name(), "student status changed");
        Ok(stored)
    }
}
