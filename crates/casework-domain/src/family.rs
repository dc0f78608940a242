//! Family records.

use serde::{Deserialize, Serialize};

use crate::reference::StudentRef;

/// A family. The member list is a denormalized snapshot; the family does not
/// own its students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "miembros", default)]
    pub members: Vec<FamilyMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    #[serde(rename = "estudiante")]
    pub student: StudentRef,
    #[serde(rename = "parentesco")]
    pub relationship: String,
}
