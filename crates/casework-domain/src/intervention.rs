//! Intervention records: case-work events concerning a student, a family or
//! an institution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::family::FamilyMember;
use crate::reference::{FamilyRef, InstitutionRef, StudentRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionStatus {
    Pendiente,
    EnProceso,
    Completada,
    Cancelada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterventionKind {
    Individual,
    Family,
    Institutional,
}

impl InterventionKind {
    pub const fn collection(self) -> Collection {
        match self {
            Self::Individual => Collection::IndividualInterventions,
            Self::Family => Collection::FamilyInterventions,
            Self::Institutional => Collection::InstitutionalInterventions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub nombre: String,
    #[serde(default)]
    pub rol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub nombre: String,
    pub url: String,
}

/// A tracked indicator and its recorded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub nombre: String,
    pub valor: String,
}

/// Fields shared by every intervention kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionDetails {
    /// Business date; list reads sort on it, newest first.
    #[serde(rename = "fecha", with = "crate::date::rfc3339_ms")]
    pub date: DateTime<Utc>,
    #[serde(rename = "tipo")]
    pub category: String,
    #[serde(rename = "estado")]
    pub status: InterventionStatus,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "acuerdos", default)]
    pub agreements: String,
    #[serde(rename = "observaciones", default)]
    pub observations: String,
    #[serde(rename = "registradoPor", default)]
    pub recorded_by: String,
    #[serde(rename = "participantes", default)]
    pub participants: Vec<Participant>,
    #[serde(rename = "adjuntos", default)]
    pub attachments: Vec<Attachment>,
    #[serde(rename = "indicadores", default)]
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualIntervention {
    #[serde(rename = "estudiante")]
    pub student: StudentRef,
    #[serde(flatten)]
    pub details: InterventionDetails,
}

/// Intervention concerning a family. `members` is the family's member list as
/// it was when the intervention was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyIntervention {
    #[serde(rename = "familia")]
    pub family: FamilyRef,
    #[serde(rename = "miembros", default)]
    pub members: Vec<FamilyMember>,
    #[serde(flatten)]
    pub details: InterventionDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionalIntervention {
    #[serde(rename = "institucion")]
    pub institution: InstitutionRef,
    #[serde(flatten)]
    pub details: InterventionDetails,
}
