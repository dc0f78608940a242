//! Student records.

use serde::{Deserialize, Serialize};

use crate::collection::{INACTIVE_STUDENTS, STUDENTS};
use crate::id::{FamilyId, StudentId};
use crate::reference::StudentRef;

/// A student. Keyed in the store by [`Student::document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "Documento")]
    pub document: StudentId,
    #[serde(rename = "Nombre Completo")]
    pub full_name: String,
    #[serde(rename = "Nombres", default)]
    pub given_names: String,
    #[serde(rename = "Apellidos", default)]
    pub surnames: String,
    #[serde(rename = "Curso", default)]
    pub grade: String,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(
        rename = "familiaId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub family_id: Option<FamilyId>,
}

impl Student {
    pub fn status(&self) -> StudentStatus {
        StudentStatus::from_active(self.active)
    }

    pub fn to_ref(&self) -> StudentRef {
        StudentRef {
            id: self.document.clone(),
            label: self.full_name.clone(),
        }
    }
}

/// Active/inactive partition of the student set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl StudentStatus {
    pub fn from_active(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Name under which this partition is reported in logs and summaries.
    pub fn view_name(self) -> &'static str {
        match self {
            Self::Active => STUDENTS,
            Self::Inactive => INACTIVE_STUDENTS,
        }
    }
}
