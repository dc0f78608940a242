use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use uuid::Uuid;

use casework_domain::collection::Collection;
use casework_domain::family::{Family, FamilyMember};
use casework_domain::id::FamilyId;
use casework_domain::intervention::{
    FamilyIntervention, IndividualIntervention, InstitutionalIntervention,
};
use casework_domain::reference::{FamilyRef, InstitutionRef, StudentRef};
use casework_domain::student::Student;

use crate::domain::types::{Document, DocumentWrite, WriteBatch, generate_hex_id};
use crate::error::RecordsServiceError;
use crate::fixtures::FixtureSet;

/// Number of documents written per category by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub active_students: usize,
    pub inactive_students: usize,
    pub families: usize,
    pub individual_interventions: usize,
    pub family_interventions: usize,
    pub institutional_interventions: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.active_students
            + self.inactive_students
            + self.families
            + self.individual_interventions
            + self.family_interventions
            + self.institutional_interventions
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} active students, {} inactive students, {} families, \
             {} individual interventions, {} family interventions, \
             {} institutional interventions",
            self.active_students,
            self.inactive_students,
            self.families,
            self.individual_interventions,
            self.family_interventions,
            self.institutional_interventions,
        )
    }
}

/// Every write of a seeding run, with references resolved.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub batch: WriteBatch,
    pub summary: SeedSummary,
}

impl SeedPlan {
    /// Resolve fixture references and stamp a fresh `hexId` on every document.
    ///
    /// Writes are queued in seeding order: active students, inactive
    /// students, families, then individual, family and institutional
    /// interventions. Any dangling or duplicate reference fails with
    /// `InvalidFixture`.
    pub fn build(fixtures: &FixtureSet) -> Result<Self, RecordsServiceError> {
        let mut batch = WriteBatch::default();
        let mut summary = SeedSummary::default();

        // Students, active partition first.
        let (active, inactive): (Vec<_>, Vec<_>) =
            fixtures.students.iter().partition(|s| s.active);
        let mut students: BTreeMap<&str, Student> = BTreeMap::new();
        for fixture in active.iter().chain(inactive.iter()) {
            let student = fixture.to_record();
            if students.contains_key(fixture.document) {
                return Err(invalid(format!(
                    "duplicate student Documento {}",
                    fixture.document
                )));
            }
            put(&mut batch, fixture.document.to_owned(), &student)?;
            students.insert(fixture.document, student);
        }
        summary.active_students = active.len();
        summary.inactive_students = inactive.len();

        // Families, members taken from the student fixtures.
        let mut families: HashMap<&str, (FamilyId, Family)> = HashMap::new();
        let mut family_ids: HashSet<FamilyId> = HashSet::new();
        for fixture in &fixtures.families {
            let hex_id = generate_hex_id();
            let id = FamilyId::from(fixture.id.unwrap_or(hex_id.as_str()));
            let members = fixture
                .members
                .iter()
                .map(|(document, relationship)| {
                    let student = students.get(document).ok_or_else(|| {
                        invalid(format!(
                            "family {} lists unknown student {document}",
                            fixture.key
                        ))
                    })?;
                    Ok(FamilyMember {
                        student: student.to_ref(),
                        relationship: (*relationship).to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, RecordsServiceError>>()?;
            let family = Family {
                name: fixture.name.to_owned(),
                address: fixture.address.to_owned(),
                phone: fixture.phone.to_owned(),
                members,
            };
            if families.contains_key(fixture.key) || !family_ids.insert(id.clone()) {
                return Err(invalid(format!("duplicate family {}", fixture.key)));
            }
            batch.put(
                Collection::Families,
                id.as_str(),
                DocumentWrite::from_record(&family, Some(hex_id))?,
            );
            families.insert(fixture.key, (id, family));
        }
        summary.families = families.len();

        for student in students.values() {
            if let Some(family_id) = &student.family_id {
                if !family_ids.contains(family_id) {
                    return Err(invalid(format!(
                        "student {} belongs to unknown family {family_id}",
                        student.document
                    )));
                }
            }
        }

        // Individual interventions keep the name captured at authoring time.
        for fixture in &fixtures.individual_interventions {
            if !students.contains_key(fixture.student) {
                return Err(invalid(format!(
                    "individual intervention references unknown student {}",
                    fixture.student
                )));
            }
            let record = IndividualIntervention {
                student: StudentRef::new(fixture.student, fixture.student_name),
                details: fixture.details.to_details()?,
            };
            put(&mut batch, Uuid::now_v7().to_string(), &record)?;
            summary.individual_interventions += 1;
        }

        // Family interventions snapshot the family's member list.
        for fixture in &fixtures.family_interventions {
            let (family_id, family) = families.get(fixture.family).ok_or_else(|| {
                invalid(format!(
                    "family intervention references unknown family {}",
                    fixture.family
                ))
            })?;
            let record = FamilyIntervention {
                family: FamilyRef::new(family_id.clone(), family.name.clone()),
                members: family.members.clone(),
                details: fixture.details.to_details()?,
            };
            put(&mut batch, Uuid::now_v7().to_string(), &record)?;
            summary.family_interventions += 1;
        }

        for fixture in &fixtures.institutional_interventions {
            let record = InstitutionalIntervention {
                institution: InstitutionRef::new(fixture.institution_id, fixture.institution_name),
                details: fixture.details.to_details()?,
            };
            put(&mut batch, Uuid::now_v7().to_string(), &record)?;
            summary.institutional_interventions += 1;
        }

        Ok(Self { batch, summary })
    }
}

fn put<T: Document>(batch: &mut WriteBatch, id: String, record: &T) -> Result<(), RecordsServiceError> {
    let doc = DocumentWrite::from_record(record, Some(generate_hex_id()))?;
    batch.put(T::COLLECTION, id, doc);
    Ok(())
}

fn invalid(reason: String) -> RecordsServiceError {
    RecordsServiceError::InvalidFixture(reason)
}
