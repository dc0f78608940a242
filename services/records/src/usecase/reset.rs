use serde::Serialize;
use tracing::{error, info};

use casework_domain::collection::{
    Collection, FAMILIES, FAMILY_INTERVENTIONS, INACTIVE_STUDENTS, INDIVIDUAL_INTERVENTIONS,
    INSTITUTIONAL_INTERVENTIONS, STUDENTS,
};

use crate::domain::repository::DocumentStore;
use crate::domain::types::{DocumentFilter, WriteBatch};
use crate::error::RecordsServiceError;
use crate::fixtures::FixtureSet;
use crate::usecase::seed::{SeedPlan, SeedSummary};

// ── Clear targets ────────────────────────────────────────────────────────────

/// One named target of the clear phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTarget {
    pub name: &'static str,
    pub collection: Collection,
    /// Restricts a student target to one status partition.
    pub active: Option<bool>,
}

impl ClearTarget {
    fn filter(&self) -> DocumentFilter {
        match self.active {
            Some(active) => DocumentFilter::active(active),
            None => DocumentFilter::default(),
        }
    }
}

/// Targets cleared by a reset, in order.
pub const CLEAR_ORDER: [ClearTarget; 6] = [
    ClearTarget {
        name: STUDENTS,
        collection: Collection::Students,
        active: Some(true),
    },
    ClearTarget {
        name: INACTIVE_STUDENTS,
        collection: Collection::Students,
        active: Some(false),
    },
    ClearTarget {
        name: FAMILIES,
        collection: Collection::Families,
        active: None,
    },
    ClearTarget {
        name: INDIVIDUAL_INTERVENTIONS,
        collection: Collection::IndividualInterventions,
        active: None,
    },
    ClearTarget {
        name: FAMILY_INTERVENTIONS,
        collection: Collection::FamilyInterventions,
        active: None,
    },
    ClearTarget {
        name: INSTITUTIONAL_INTERVENTIONS,
        collection: Collection::InstitutionalInterventions,
        active: None,
    },
];

// ── ResetDatabase ────────────────────────────────────────────────────────────

/// Clear every collection and repopulate it from `fixtures`.
///
/// The seed plan is built before anything is deleted, so a broken fixture
/// leaves the store untouched. The clear phase and the seed phase are each
/// one atomic batch; a failure while seeding leaves the collections empty.
pub struct ResetDatabaseUseCase<S: DocumentStore> {
    pub store: S,
    pub fixtures: FixtureSet,
}

impl<S: DocumentStore> ResetDatabaseUseCase<S> {
    pub async fn execute(&self) -> Result<SeedSummary, RecordsServiceError> {
        self.store.ping().await?;

        let plan = SeedPlan::build(&self.fixtures)?;

        let cleared = self.clear().await?;
        info!(documents = cleared, "collections cleared");

        let summary = plan.summary;
        self.store.commit(plan.batch).await?;
        info!(documents = summary.total(), %summary, "collections seeded");

        Ok(summary)
    }

    async fn clear(&self) -> Result<usize, RecordsServiceError> {
        let mut batch = WriteBatch::default();
        for target in &CLEAR_ORDER {
            let docs = self.store.list(target.collection, &target.filter()).await?;
            info!(collection = target.name, documents = docs.len(), "clearing");
            for doc in docs {
                batch.delete(target.collection, doc.id);
            }
        }
        let cleared = batch.len();
        self.store.commit(batch).await?;
        Ok(cleared)
    }
}

// ── Outcome ──────────────────────────────────────────────────────────────────

/// Result record shown to whoever triggered the reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetOutcome {
    pub success: bool,
    pub message: String,
}

impl From<&Result<SeedSummary, RecordsServiceError>> for ResetOutcome {
    fn from(result: &Result<SeedSummary, RecordsServiceError>) -> Self {
        match result {
            Ok(summary) => Self {
                success: true,
                message: format!("database reset complete: seeded {summary}"),
            },
            Err(e) => {
                error!(error = %e.detail(), kind = e.kind(), "database reset failed");
                Self {
                    success: false,
                    message: format!("database reset failed: {}", e.detail()),
                }
            }
        }
    }
}
