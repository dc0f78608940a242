use serde_json::{Map, Value, json};

use casework_domain::family::Family;
use casework_domain::intervention::IndividualIntervention;
use casework_domain::student::{Student, StudentStatus};
use casework_records::domain::types::DocumentFilter;
use casework_records::error::RecordsServiceError;
use casework_records::usecase::record::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordUseCase, ListRecordsUseCase,
    UpdateRecordUseCase,
};
use casework_records::usecase::student::{ListStudentsUseCase, SetStudentStatusUseCase};

use crate::helpers::{MemoryStore, test_individual_intervention, test_student};

fn patch(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("patch must be an object"),
    }
}

fn family(name: &str) -> Family {
    Family {
        name: name.to_owned(),
        address: String::new(),
        phone: String::new(),
        members: vec![],
    }
}

#[tokio::test]
async fn should_list_interventions_newest_business_date_first() {
    let store = MemoryStore::new();
    let create = CreateRecordUseCase {
        store: store.clone(),
    };
    for day in [4, 20, 11] {
        create
            .execute(test_individual_intervention("12345678", day, "academica"))
            .await
            .unwrap();
    }

    let list = ListRecordsUseCase { store };
    let records = list
        .execute::<IndividualIntervention>(&DocumentFilter::default())
        .await
        .unwrap();
    let days: Vec<String> = records
        .iter()
        .map(|r| r.record.details.date.format("%d").to_string())
        .collect();
    assert_eq!(days, vec!["20", "11", "04"]);
}

#[tokio::test]
async fn should_list_undated_records_newest_first() {
    let store = MemoryStore::new();
    let create = CreateRecordUseCase {
        store: store.clone(),
    };
    let first = create.execute(family("Familia Uno")).await.unwrap();
    let second = create.execute(family("Familia Dos")).await.unwrap();

    let list = ListRecordsUseCase { store };
    let records = list
        .execute::<Family>(&DocumentFilter::default())
        .await
        .unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
}

#[tokio::test]
async fn should_return_empty_list_for_empty_collection() {
    let list = ListRecordsUseCase {
        store: MemoryStore::new(),
    };
    let records = list
        .execute::<Family>(&DocumentFilter::default())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn should_filter_interventions_by_subject_and_category() {
    let store = MemoryStore::new();
    let create = CreateRecordUseCase {
        store: store.clone(),
    };
    create
        .execute(test_individual_intervention("12345678", 4, "academica"))
        .await
        .unwrap();
    create
        .execute(test_individual_intervention("12345678", 5, "conductual"))
        .await
        .unwrap();
    create
        .execute(test_individual_intervention("23456789", 6, "academica"))
        .await
        .unwrap();

    let list = ListRecordsUseCase { store };
    let by_subject = list
        .execute::<IndividualIntervention>(&DocumentFilter {
            subject_id: Some("12345678".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_subject.len(), 2);

    let by_both = list
        .execute::<IndividualIntervention>(&DocumentFilter {
            subject_id: Some("12345678".into()),
            category: Some("academica".into()),
            active: None,
        })
        .await
        .unwrap();
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].record.details.category, "academica");
}

#[tokio::test]
async fn should_return_none_for_missing_id() {
    let get = GetRecordUseCase {
        store: MemoryStore::new(),
    };
    let found = get.execute::<IndividualIntervention>("missing").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn should_return_none_after_delete() {
    let store = MemoryStore::new();
    let created = CreateRecordUseCase {
        store: store.clone(),
    }
    .execute(test_individual_intervention("12345678", 4, "academica"))
    .await
    .unwrap();

    let delete = DeleteRecordUseCase {
        store: store.clone(),
    };
    delete
        .execute::<IndividualIntervention>(&created.id)
        .await
        .unwrap();
    // Deleting again is a no-op.
    delete
        .execute::<IndividualIntervention>(&created.id)
        .await
        .unwrap();

    let get = GetRecordUseCase { store };
    let found = get
        .execute::<IndividualIntervention>(&created.id)
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn should_reject_duplicate_student_documento() {
    let create = CreateRecordUseCase {
        store: MemoryStore::new(),
    };
    create
        .execute(test_student("12345678", "Juan Pérez", true))
        .await
        .unwrap();
    let result = create
        .execute(test_student("12345678", "Otro Nombre", true))
        .await;
    assert!(
        matches!(result, Err(RecordsServiceError::RecordAlreadyExists)),
        "expected RecordAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_merge_update_and_keep_metadata() {
    let store = MemoryStore::new();
    let created = CreateRecordUseCase {
        store: store.clone(),
    }
    .execute(family("Familia Pérez"))
    .await
    .unwrap();

    let update = UpdateRecordUseCase {
        store: store.clone(),
    };
    let updated = update
        .execute::<Family>(&created.id, patch(json!({"telefono": "+56 9 0000 0000"})))
        .await
        .unwrap();
    assert_eq!(updated.record.phone, "+56 9 0000 0000");
    assert_eq!(updated.record.name, "Familia Pérez");
    assert_eq!(updated.created_at, created.created_at);

    let get = GetRecordUseCase { store };
    let stored = get.execute::<Family>(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.record, updated.record);
}

#[tokio::test]
async fn should_not_create_on_update_of_missing_record() {
    let store = MemoryStore::new();
    let update = UpdateRecordUseCase {
        store: store.clone(),
    };
    let result = update
        .execute::<Family>("missing", patch(json!({"nombre": "Nueva"})))
        .await;
    assert!(matches!(result, Err(RecordsServiceError::RecordNotFound)));
    assert_eq!(store.total(), 0);
}

#[tokio::test]
async fn should_move_student_between_status_views() {
    let store = MemoryStore::new();
    CreateRecordUseCase {
        store: store.clone(),
    }
    .execute(test_student("34567890", "Carlos Rodríguez", true))
    .await
    .unwrap();

    let set_status = SetStudentStatusUseCase {
        store: store.clone(),
    };
    let archived = set_status
        .execute("34567890", StudentStatus::Inactive)
        .await
        .unwrap();
    assert!(!archived.record.active);

    let list = ListStudentsUseCase { store };
    let active = list.execute(Some(StudentStatus::Active)).await.unwrap();
    let inactive = list.execute(Some(StudentStatus::Inactive)).await.unwrap();
    let all = list.execute(None).await.unwrap();
    assert!(active.is_empty());
    assert_eq!(inactive.len(), 1);
    assert_eq!(all.len(), 1);
    assert_eq!(inactive[0].record.document.as_str(), "34567890");
}

#[tokio::test]
async fn should_return_not_found_for_status_of_unknown_student() {
    let set_status = SetStudentStatusUseCase {
        store: MemoryStore::new(),
    };
    let result = set_status.execute("00000000", StudentStatus::Active).await;
    assert!(matches!(result, Err(RecordsServiceError::RecordNotFound)));
}

#[tokio::test]
async fn should_fail_fast_when_store_disabled() {
    let store = MemoryStore::new();
    store.set_enabled(false);

    let get = GetRecordUseCase {
        store: store.clone(),
    };
    let result = get.execute::<Student>("12345678").await;
    assert!(matches!(result, Err(RecordsServiceError::StoreDisabled)));

    let create = CreateRecordUseCase { store };
    let result = create.execute(family("Familia Pérez")).await;
    assert!(matches!(result, Err(RecordsServiceError::StoreDisabled)));
}
