//! References between records.
//!
//! A reference carries the target identifier plus a display label cached at
//! the moment the reference was written. Labels are point-in-time snapshots:
//! renaming the target later does not update references that already exist,
//! and nothing guarantees the target still exists.

use serde::{Deserialize, Serialize};

use crate::id::{FamilyId, InstitutionId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef<I> {
    pub id: I,
    #[serde(rename = "nombre")]
    pub label: String,
}

impl<I> EntityRef<I> {
    pub fn new(id: impl Into<I>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

pub type StudentRef = EntityRef<StudentId>;
pub type FamilyRef = EntityRef<FamilyId>;
pub type InstitutionRef = EntityRef<InstitutionId>;
