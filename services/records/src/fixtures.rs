//! Built-in sample data written by the reset operation.
//!
//! Fixtures refer to each other by authoring-time keys: students by
//! `Documento`, families by [`FamilyFixture::key`]. References are resolved
//! and checked when the seed plan is built.

use chrono::{DateTime, Utc};

use casework_domain::date;
use casework_domain::intervention::{
    Attachment, Indicator, InterventionDetails, InterventionStatus, Participant,
};
use casework_domain::student::Student;

use crate::error::RecordsServiceError;

#[derive(Debug, Clone)]
pub struct StudentFixture {
    pub document: &'static str,
    pub full_name: &'static str,
    pub given_names: &'static str,
    pub surnames: &'static str,
    pub grade: &'static str,
    pub active: bool,
    /// Store id of the student's family, if it has a fixed one.
    pub family_id: Option<&'static str>,
}

impl StudentFixture {
    pub fn to_record(&self) -> Student {
        Student {
            document: self.document.into(),
            full_name: self.full_name.to_owned(),
            given_names: self.given_names.to_owned(),
            surnames: self.surnames.to_owned(),
            grade: self.grade.to_owned(),
            active: self.active,
            family_id: self.family_id.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FamilyFixture {
    /// Authoring-time key used by family intervention fixtures.
    pub key: &'static str,
    /// Fixed store id. Families without one are keyed by their `hexId`.
    pub id: Option<&'static str>,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    /// `(Documento, parentesco)` pairs.
    pub members: Vec<(&'static str, &'static str)>,
}

#[derive(Debug, Clone)]
pub struct DetailsFixture {
    /// RFC 3339 business date.
    pub date: &'static str,
    pub category: &'static str,
    pub status: InterventionStatus,
    pub description: &'static str,
    pub agreements: &'static str,
    pub observations: &'static str,
    pub recorded_by: &'static str,
    /// `(nombre, rol)` pairs.
    pub participants: Vec<(&'static str, &'static str)>,
    /// `(nombre, url)` pairs.
    pub attachments: Vec<(&'static str, &'static str)>,
    /// `(nombre, valor)` pairs.
    pub indicators: Vec<(&'static str, &'static str)>,
}

impl DetailsFixture {
    pub fn to_details(&self) -> Result<InterventionDetails, RecordsServiceError> {
        let date: DateTime<Utc> = date::parse(self.date).map_err(|e| {
            RecordsServiceError::InvalidFixture(format!("fecha {:?}: {e}", self.date))
        })?;
        Ok(InterventionDetails {
            date,
            category: self.category.to_owned(),
            status: self.status,
            description: self.description.to_owned(),
            agreements: self.agreements.to_owned(),
            observations: self.observations.to_owned(),
            recorded_by: self.recorded_by.to_owned(),
            participants: self
                .participants
                .iter()
                .map(|(nombre, rol)| Participant {
                    nombre: (*nombre).to_owned(),
                    rol: (*rol).to_owned(),
                })
                .collect(),
            attachments: self
                .attachments
                .iter()
                .map(|(nombre, url)| Attachment {
                    nombre: (*nombre).to_owned(),
                    url: (*url).to_owned(),
                })
                .collect(),
            indicators: self
                .indicators
                .iter()
                .map(|(nombre, valor)| Indicator {
                    nombre: (*nombre).to_owned(),
                    valor: (*valor).to_owned(),
                })
                .collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct IndividualInterventionFixture {
    /// `Documento` of the student.
    pub student: &'static str,
    /// Display name as written when the fixture was authored.
    pub student_name: &'static str,
    pub details: DetailsFixture,
}

#[derive(Debug, Clone)]
pub struct FamilyInterventionFixture {
    /// [`FamilyFixture::key`] of the family.
    pub family: &'static str,
    pub details: DetailsFixture,
}

#[derive(Debug, Clone)]
pub struct InstitutionalInterventionFixture {
    pub institution_id: &'static str,
    pub institution_name: &'static str,
    pub details: DetailsFixture,
}

/// Every fixture the reset operation writes, in write order.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub students: Vec<StudentFixture>,
    pub families: Vec<FamilyFixture>,
    pub individual_interventions: Vec<IndividualInterventionFixture>,
    pub family_interventions: Vec<FamilyInterventionFixture>,
    pub institutional_interventions: Vec<InstitutionalInterventionFixture>,
}

impl FixtureSet {
    pub fn builtin() -> Self {
        Self {
            students: builtin_students(),
            families: builtin_families(),
            individual_interventions: builtin_individual_interventions(),
            family_interventions: builtin_family_interventions(),
            institutional_interventions: builtin_institutional_interventions(),
        }
    }
}

// ── Built-in data ────────────────────────────────────────────────────────────

fn builtin_students() -> Vec<StudentFixture> {
    vec![
        StudentFixture {
            document: "12345678",
            full_name: "Juan Pérez",
            given_names: "Juan",
            surnames: "Pérez",
            grade: "5° Básico",
            active: true,
            family_id: Some("fam-perez"),
        },
        StudentFixture {
            document: "23456789",
            full_name: "María González",
            given_names: "María",
            surnames: "González",
            grade: "3° Medio",
            active: true,
            family_id: Some("fam-gonzalez"),
        },
        StudentFixture {
            document: "34567890",
            full_name: "Carlos Rodríguez",
            given_names: "Carlos",
            surnames: "Rodríguez",
            grade: "8° Básico",
            active: false,
            family_id: None,
        },
    ]
}

fn builtin_families() -> Vec<FamilyFixture> {
    vec![
        FamilyFixture {
            key: "perez",
            id: Some("fam-perez"),
            name: "Familia Pérez",
            address: "Calle Los Aromos 123",
            phone: "+56 9 1234 5678",
            members: vec![("12345678", "Hijo")],
        },
        FamilyFixture {
            key: "gonzalez",
            id: Some("fam-gonzalez"),
            name: "Familia González",
            address: "Av. Central 456",
            phone: "+56 9 2345 6789",
            members: vec![("23456789", "Hija")],
        },
        FamilyFixture {
            key: "rodriguez",
            id: None,
            name: "Familia Rodríguez",
            address: "Pasaje El Roble 789",
            phone: "+56 9 3456 7890",
            members: vec![("34567890", "Hijo")],
        },
    ]
}

fn builtin_individual_interventions() -> Vec<IndividualInterventionFixture> {
    vec![
        IndividualInterventionFixture {
            student: "12345678",
            student_name: "Juan Pérez",
            details: DetailsFixture {
                date: "2024-03-04T09:00:00.000Z",
                category: "academica",
                status: InterventionStatus::EnProceso,
                description: "Bajo rendimiento en matemáticas durante el primer mes.",
                agreements: "Reforzamiento dos veces por semana.",
                observations: "El estudiante muestra interés en mejorar.",
                recorded_by: "Laura Gómez",
                participants: vec![("Laura Gómez", "Psicopedagoga"), ("Juan Pérez", "Estudiante")],
                attachments: vec![],
                indicators: vec![("Asistencia", "92%"), ("Promedio matemáticas", "4.1")],
            },
        },
        IndividualInterventionFixture {
            student: "23456789",
            student_name: "María González",
            details: DetailsFixture {
                date: "2024-04-15T10:30:00.000Z",
                category: "conductual",
                status: InterventionStatus::Completada,
                description: "Conflicto con compañeros en el recreo.",
                agreements: "Mediación entre las partes y seguimiento semanal.",
                observations: "",
                recorded_by: "Pedro Soto",
                participants: vec![("Pedro Soto", "Orientador")],
                attachments: vec![("Acta de mediación", "https://example.org/actas/mediacion-0415.pdf")],
                indicators: vec![],
            },
        },
        IndividualInterventionFixture {
            student: "12345678",
            student_name: "Juan Pérez",
            details: DetailsFixture {
                date: "2024-05-20T15:00:00.000Z",
                category: "psicosocial",
                status: InterventionStatus::Pendiente,
                description: "Derivación a evaluación psicológica.",
                agreements: "",
                observations: "Pendiente confirmación de hora con el CESFAM.",
                recorded_by: "Laura Gómez",
                participants: vec![],
                attachments: vec![],
                indicators: vec![],
            },
        },
    ]
}

fn builtin_family_interventions() -> Vec<FamilyInterventionFixture> {
    vec![
        FamilyInterventionFixture {
            family: "perez",
            details: DetailsFixture {
                date: "2024-03-18T16:00:00.000Z",
                category: "visita_domiciliaria",
                status: InterventionStatus::Completada,
                description: "Visita para conocer el contexto familiar.",
                agreements: "Los apoderados asistirán a reunión mensual.",
                observations: "",
                recorded_by: "Ana Muñoz",
                participants: vec![("Ana Muñoz", "Trabajadora social"), ("Rosa Pérez", "Madre")],
                attachments: vec![],
                indicators: vec![],
            },
        },
        FamilyInterventionFixture {
            family: "rodriguez",
            details: DetailsFixture {
                date: "2024-04-02T11:00:00.000Z",
                category: "entrevista_familiar",
                status: InterventionStatus::Pendiente,
                description: "Entrevista por inasistencias reiteradas.",
                agreements: "",
                observations: "No se ha logrado contacto telefónico.",
                recorded_by: "Ana Muñoz",
                participants: vec![],
                attachments: vec![],
                indicators: vec![("Inasistencias del mes", "7")],
            },
        },
    ]
}

fn builtin_institutional_interventions() -> Vec<InstitutionalInterventionFixture> {
    vec![
        InstitutionalInterventionFixture {
            institution_id: "inst-cesfam",
            institution_name: "CESFAM Los Aromos",
            details: DetailsFixture {
                date: "2024-02-27T13:00:00.000Z",
                category: "coordinacion_redes",
                status: InterventionStatus::Completada,
                description: "Reunión de coordinación para derivaciones de salud mental.",
                agreements: "Canal directo de derivación vía correo.",
                observations: "",
                recorded_by: "Pedro Soto",
                participants: vec![("Pedro Soto", "Orientador"), ("Dra. Carmen Vidal", "Psicóloga CESFAM")],
                attachments: vec![],
                indicators: vec![],
            },
        },
        InstitutionalInterventionFixture {
            institution_id: "inst-opd",
            institution_name: "OPD Comunal",
            details: DetailsFixture {
                date: "2024-05-06T09:30:00.000Z",
                category: "derivacion",
                status: InterventionStatus::EnProceso,
                description: "Derivación de caso para evaluación de vulneración de derechos.",
                agreements: "OPD informará avances en 30 días.",
                observations: "",
                recorded_by: "Ana Muñoz",
                participants: vec![],
                attachments: vec![],
                indicators: vec![],
            },
        },
    ]
}
