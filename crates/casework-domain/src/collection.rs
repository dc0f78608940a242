//! Fixed collection names shared by every reader and writer.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const STUDENTS: &str = "students";
/// View name of the inactive student partition. Inactive students live in
/// [`STUDENTS`] with `activo = false`.
pub const INACTIVE_STUDENTS: &str = "inactive_students";
pub const FAMILIES: &str = "familias";
pub const INDIVIDUAL_INTERVENTIONS: &str = "intervencionesIndividuales";
pub const FAMILY_INTERVENTIONS: &str = "intervencionesFamiliares";
pub const INSTITUTIONAL_INTERVENTIONS: &str = "intervencionesInstituciones";

/// A named document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Students,
    Families,
    IndividualInterventions,
    FamilyInterventions,
    InstitutionalInterventions,
}

impl Collection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Students => STUDENTS,
            Self::Families => FAMILIES,
            Self::IndividualInterventions => INDIVIDUAL_INTERVENTIONS,
            Self::FamilyInterventions => FAMILY_INTERVENTIONS,
            Self::InstitutionalInterventions => INSTITUTIONAL_INTERVENTIONS,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
