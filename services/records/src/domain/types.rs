use chrono::{DateTime, Utc};
use rand::RngExt;
use serde::Serialize;
use serde::de::DeserializeOwned;

use casework_domain::collection::Collection;
use casework_domain::family::Family;
use casework_domain::id::{HEX_ID_LEN, HexId};
use casework_domain::intervention::{
    FamilyIntervention, IndividualIntervention, InstitutionalIntervention, InterventionKind,
};
use casework_domain::student::Student;

use crate::error::RecordsServiceError;

/// Columns extracted from a document body so the store can filter and order
/// without looking inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentIndex {
    pub subject_id: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
    pub business_date: Option<DateTime<Utc>>,
}

/// A typed record stored in exactly one collection.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// Whether list reads accept subject and category filters.
    const FILTERABLE: bool = true;

    fn index(&self) -> DocumentIndex;

    /// Key derived from the record itself, if the collection uses natural keys.
    fn natural_id(&self) -> Option<String> {
        None
    }
}

impl Document for Student {
    const COLLECTION: Collection = Collection::Students;

    fn index(&self) -> DocumentIndex {
        DocumentIndex {
            subject_id: self.family_id.as_ref().map(|id| id.0.clone()),
            active: Some(self.active),
            ..Default::default()
        }
    }

    fn natural_id(&self) -> Option<String> {
        Some(self.document.0.clone())
    }
}

impl Document for Family {
    const COLLECTION: Collection = Collection::Families;
    const FILTERABLE: bool = false;

    fn index(&self) -> DocumentIndex {
        DocumentIndex::default()
    }
}

impl Document for IndividualIntervention {
    const COLLECTION: Collection = InterventionKind::Individual.collection();

    fn index(&self) -> DocumentIndex {
        DocumentIndex {
            subject_id: Some(self.student.id.0.clone()),
            category: Some(self.details.category.clone()),
            active: None,
            business_date: Some(self.details.date),
        }
    }
}

impl Document for FamilyIntervention {
    const COLLECTION: Collection = InterventionKind::Family.collection();

    fn index(&self) -> DocumentIndex {
        DocumentIndex {
            subject_id: Some(self.family.id.0.clone()),
            category: Some(self.details.category.clone()),
            active: None,
            business_date: Some(self.details.date),
        }
    }
}

impl Document for InstitutionalIntervention {
    const COLLECTION: Collection = InterventionKind::Institutional.collection();

    fn index(&self) -> DocumentIndex {
        DocumentIndex {
            subject_id: Some(self.institution.id.0.clone()),
            category: Some(self.details.category.clone()),
            active: None,
            business_date: Some(self.details.date),
        }
    }
}

/// A serialized document body ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentWrite {
    pub hex_id: Option<HexId>,
    pub index: DocumentIndex,
    pub data: serde_json::Value,
}

impl DocumentWrite {
    pub fn from_record<T: Document>(
        record: &T,
        hex_id: Option<HexId>,
    ) -> Result<Self, RecordsServiceError> {
        Self::encode(record, hex_id).map(|(doc, _)| doc)
    }

    /// Serialize `record` and read the body back, so the index columns and
    /// the returned record match what a later read of the document yields.
    pub fn encode<T: Document>(
        record: &T,
        hex_id: Option<HexId>,
    ) -> Result<(Self, T), RecordsServiceError> {
        let data = serde_json::to_value(record)
            .map_err(|e| RecordsServiceError::InvalidRecord(e.to_string()))?;
        let canonical: T = serde_json::from_value(data.clone())
            .map_err(|e| RecordsServiceError::InvalidRecord(e.to_string()))?;
        let doc = Self {
            hex_id,
            index: canonical.index(),
            data,
        };
        Ok((doc, canonical))
    }
}

/// A document as read back from the store, body still untyped.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub hex_id: Option<HexId>,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// A typed record together with its store metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<T> {
    pub id: String,
    pub hex_id: Option<HexId>,
    pub created_at: DateTime<Utc>,
    pub record: T,
}

impl<T: Document> Stored<T> {
    /// Validate a stored body against `T`. A body that no longer matches its
    /// record type is a data fault, not a client error.
    pub fn decode(doc: StoredDocument) -> Result<Self, RecordsServiceError> {
        let record = serde_json::from_value(doc.data).map_err(|e| {
            anyhow::anyhow!(e).context(format!("decode {} document {}", T::COLLECTION, doc.id))
        })?;
        Ok(Self {
            id: doc.id,
            hex_id: doc.hex_id,
            created_at: doc.created_at,
            record,
        })
    }
}

/// Equality predicates pushed down to the store. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub subject_id: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
}

impl DocumentFilter {
    pub fn active(active: bool) -> Self {
        Self {
            active: Some(active),
            ..Default::default()
        }
    }

    /// True when a subject or category predicate is set.
    pub fn narrows_by_content(&self) -> bool {
        self.subject_id.is_some() || self.category.is_some()
    }

    pub fn matches(&self, index: &DocumentIndex) -> bool {
        fn eq<V: PartialEq>(wanted: &Option<V>, actual: &Option<V>) -> bool {
            wanted.is_none() || wanted == actual
        }
        eq(&self.subject_id, &index.subject_id)
            && eq(&self.category, &index.category)
            && eq(&self.active, &index.active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Create or overwrite the document at `id`.
    Put {
        collection: Collection,
        id: String,
        doc: DocumentWrite,
    },
    Delete {
        collection: Collection,
        id: String,
    },
}

/// Ordered write operations committed atomically: either every operation is
/// applied or none is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn put(&mut self, collection: Collection, id: impl Into<String>, doc: DocumentWrite) {
        self.ops.push(WriteOp::Put {
            collection,
            id: id.into(),
            doc,
        });
    }

    pub fn delete(&mut self, collection: Collection, id: impl Into<String>) {
        self.ops.push(WriteOp::Delete {
            collection,
            id: id.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}

/// Generate a fresh advisory uniqueness token (96 random bits).
pub fn generate_hex_id() -> HexId {
    let mut rng = rand::rng();
    let mut bytes = [0u8; HEX_ID_LEN / 2];
    for b in &mut bytes {
        *b = rng.random_range(0..=u8::MAX);
    }
    HexId::from_bytes(bytes)
}
