use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use casework_domain::collection::Collection;
use casework_domain::id::HexId;
use casework_domain::intervention::{
    IndividualIntervention, InterventionDetails, InterventionStatus,
};
use casework_domain::reference::StudentRef;
use casework_domain::student::Student;
use casework_records::domain::repository::DocumentStore;
use casework_records::domain::types::{
    DocumentFilter, DocumentIndex, DocumentWrite, StoredDocument, WriteBatch, WriteOp,
};
use casework_records::error::RecordsServiceError;

// ── MemoryStore ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct MemoryEntry {
    hex_id: Option<HexId>,
    index: DocumentIndex,
    data: serde_json::Value,
    created_at: DateTime<Utc>,
    seq: u64,
}

impl MemoryEntry {
    fn to_stored(&self, id: &str) -> StoredDocument {
        StoredDocument {
            id: id.to_owned(),
            hex_id: self.hex_id.clone(),
            data: self.data.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    docs: BTreeMap<(Collection, String), MemoryEntry>,
    next_seq: u64,
}

impl MemoryState {
    fn put(&mut self, collection: Collection, id: String, doc: DocumentWrite) {
        self.next_seq += 1;
        let seq = self.next_seq;
        let key = (collection, id);
        let (created_at, seq) = match self.docs.get(&key) {
            Some(existing) => (existing.created_at, existing.seq),
            None => (Utc::now(), seq),
        };
        self.docs.insert(
            key,
            MemoryEntry {
                hex_id: doc.hex_id,
                index: doc.index,
                data: doc.data,
                created_at,
                seq,
            },
        );
    }
}

/// In-memory `DocumentStore` with an enable switch and commit-failure
/// injection. Clones share the same documents.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
    enabled: Arc<AtomicBool>,
    commits: Arc<AtomicUsize>,
    fail_commit: Arc<Mutex<Option<usize>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState::default())),
            enabled: Arc::new(AtomicBool::new(true)),
            commits: Arc::new(AtomicUsize::new(0)),
            fail_commit: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Make the `n`-th commit from now (1-based) fail without applying.
    pub fn fail_nth_commit(&self, n: usize) {
        let target = self.commits.load(Ordering::SeqCst) + n;
        *self.fail_commit.lock().unwrap() = Some(target);
    }

    /// Every stored document of `collection`, in key order.
    pub fn documents(&self, collection: Collection) -> Vec<StoredDocument> {
        self.state
            .lock()
            .unwrap()
            .docs
            .iter()
            .filter(|((c, _), _)| *c == collection)
            .map(|((_, id), entry)| entry.to_stored(id))
            .collect()
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.documents(collection).len()
    }

    pub fn total(&self) -> usize {
        self.state.lock().unwrap().docs.len()
    }

    fn check_enabled(&self) -> Result<(), RecordsServiceError> {
        if self.enabled.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RecordsServiceError::StoreDisabled)
        }
    }
}

impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<(), RecordsServiceError> {
        self.check_enabled()
    }

    async fn insert(
        &self,
        collection: Collection,
        id: Option<&str>,
        doc: DocumentWrite,
    ) -> Result<StoredDocument, RecordsServiceError> {
        self.check_enabled()?;
        let id = id.map_or_else(|| Uuid::now_v7().to_string(), str::to_owned);
        let mut state = self.state.lock().unwrap();
        if state.docs.contains_key(&(collection, id.clone())) {
            return Err(RecordsServiceError::RecordAlreadyExists);
        }
        state.put(collection, id.clone(), doc);
        Ok(state.docs[&(collection, id.clone())].to_stored(&id))
    }

    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<StoredDocument>, RecordsServiceError> {
        self.check_enabled()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .docs
            .get(&(collection, id.to_owned()))
            .map(|entry| entry.to_stored(id)))
    }

    async fn list(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Vec<StoredDocument>, RecordsServiceError> {
        self.check_enabled()?;
        let state = self.state.lock().unwrap();
        let mut entries: Vec<(&String, &MemoryEntry)> = state
            .docs
            .iter()
            .filter(|((c, _), entry)| *c == collection && filter.matches(&entry.index))
            .map(|((_, id), entry)| (id, entry))
            .collect();
        // Newest business date first, undated last, then newest write first.
        entries.sort_by(|(_, a), (_, b)| {
            match (a.index.business_date, b.index.business_date) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
            .then(b.created_at.cmp(&a.created_at))
            .then(b.seq.cmp(&a.seq))
        });
        Ok(entries
            .into_iter()
            .map(|(id, entry)| entry.to_stored(id))
            .collect())
    }

    async fn replace(
        &self,
        collection: Collection,
        id: &str,
        doc: DocumentWrite,
    ) -> Result<bool, RecordsServiceError> {
        self.check_enabled()?;
        let mut state = self.state.lock().unwrap();
        let Some(entry) = state.docs.get_mut(&(collection, id.to_owned())) else {
            return Ok(false);
        };
        if doc.hex_id.is_some() {
            entry.hex_id = doc.hex_id;
        }
        entry.index = doc.index;
        entry.data = doc.data;
        Ok(true)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), RecordsServiceError> {
        self.check_enabled()?;
        self.state
            .lock()
            .unwrap()
            .docs
            .remove(&(collection, id.to_owned()));
        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), RecordsServiceError> {
        self.check_enabled()?;
        let n = self.commits.fetch_add(1, Ordering::SeqCst) + 1;
        if *self.fail_commit.lock().unwrap() == Some(n) {
            return Err(anyhow::anyhow!("injected commit failure").into());
        }
        let mut state = self.state.lock().unwrap();
        for op in batch.into_ops() {
            match op {
                WriteOp::Put {
                    collection,
                    id,
                    doc,
                } => state.put(collection, id, doc),
                WriteOp::Delete { collection, id } => {
                    state.docs.remove(&(collection, id));
                }
            }
        }
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_student(document: &str, full_name: &str, active: bool) -> Student {
    Student {
        document: document.into(),
        full_name: full_name.to_owned(),
        given_names: String::new(),
        surnames: String::new(),
        grade: "1° Medio".into(),
        active,
        family_id: None,
    }
}

pub fn test_details(date: DateTime<Utc>, category: &str) -> InterventionDetails {
    InterventionDetails {
        date,
        category: category.to_owned(),
        status: InterventionStatus::Pendiente,
        description: String::new(),
        agreements: String::new(),
        observations: String::new(),
        recorded_by: "Laura Gómez".into(),
        participants: vec![],
        attachments: vec![],
        indicators: vec![],
    }
}

pub fn test_individual_intervention(
    student: &str,
    day: u32,
    category: &str,
) -> IndividualIntervention {
    IndividualIntervention {
        student: StudentRef::new(student, "Test Student"),
        details: test_details(
            Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
            category,
        ),
    }
}
