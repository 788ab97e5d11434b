use std::collections::HashSet;

use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::json;
use thgc::{
    Acknowledgement, ContactDesk, FileStore, Immediate, InquiryDraft, KeyValueStore, MemoryStore,
    ServiceKind,
};

const KEY: &str = "contactSubmissions";

fn jane() -> InquiryDraft {
    InquiryDraft::new("Jane Doe", "8325551234", "jane@example.com")
        .with_service(ServiceKind::Roofing)
        .with_message("Leak")
}

fn desk() -> ContactDesk<MemoryStore> {
    ContactDesk::new(MemoryStore::new(), Immediate)
}

#[tokio::test]
async fn valid_draft_is_acknowledged_and_stored_once() {
    let desk = desk();
    let before = Utc::now();

    let ack = desk.submit(jane()).await.expect("submit");

    assert_eq!(ack, Acknowledgement::received());
    let stored = desk.inquiries().expect("inquiries");
    assert_eq!(stored.len(), 1);

    let record = &stored[0];
    assert_eq!(record.draft(), jane());
    assert!(record.timestamp >= before - chrono::Duration::milliseconds(1));
    assert!(record.timestamp <= Utc::now());
    assert!(record.id >= u64::try_from(before.timestamp_millis()).unwrap());
}

#[test]
fn retrieval_before_any_submission_is_empty() {
    assert!(desk().inquiries().expect("inquiries").is_empty());
}

#[tokio::test]
async fn sequential_submissions_keep_order_and_distinct_ids() {
    let desk = desk();
    let names: Vec<String> = (0..12).map(|i| format!("Visitor {i}")).collect();

    for name in &names {
        let draft = InquiryDraft::new(name.clone(), "8320000000", "v@example.com");
        assert!(desk.submit(draft).await.expect("submit").success);
    }

    let stored = desk.inquiries().expect("inquiries");
    assert_eq!(stored.len(), names.len());
    let stored_names: Vec<_> = stored.iter().map(|r| r.name.clone()).collect();
    assert_eq!(stored_names, names);

    let ids: HashSet<u64> = stored.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), stored.len());
    assert!(stored.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test]
async fn optional_fields_are_present_but_empty() {
    let desk = desk();
    desk.submit(InquiryDraft::new("Sam", "8325550000", "sam@example.com"))
        .await
        .expect("submit");

    let raw = desk.store().get_item(KEY).unwrap().expect("stored value");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value[0];

    assert_eq!(record["service"], "");
    assert_eq!(record["message"], "");
    assert!(record["id"].as_u64().is_some());
    assert!(record["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}

#[tokio::test]
async fn retrieval_is_idempotent() {
    let desk = desk();
    desk.submit(jane()).await.expect("submit");

    let first = desk.inquiries().expect("first read");
    let second = desk.inquiries().expect("second read");
    assert_eq!(first, second);
}

fn stored_array(desk: &ContactDesk<MemoryStore>) -> Vec<serde_json::Value> {
    let raw = desk.store().get_item(KEY).unwrap().expect("stored value");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn append_preserves_entries_written_by_earlier_builds() {
    let legacy = json!([{
        "name": "Old",
        "phone": "1",
        "email": "o@x.com",
        "service": "Other",
        "message": "hi",
        "zip": "77338",
        "id": 1_700_000_000_000u64,
        "timestamp": "2023-11-14T22:13:20Z"
    }]);
    let desk = ContactDesk::new(
        MemoryStore::new().seeded(KEY, legacy.to_string()),
        Immediate,
    );

    desk.submit(jane()).await.expect("submit");

    let stored = stored_array(&desk);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], legacy[0]);
    assert_eq!(stored[1]["name"], "Jane Doe");

    let typed = desk.inquiries().expect("inquiries");
    assert_eq!(typed[0].service, Some(ServiceKind::Other));
    assert_eq!(typed[0].timestamp.timestamp(), 1_700_000_000);
}

#[tokio::test]
async fn append_tolerates_entries_the_current_model_cannot_read() {
    let legacy = json!([
        { "name": "Nulls", "phone": "1", "email": "n@x.com", "service": null, "message": null, "id": 1, "timestamp": "2023-11-14T22:13:20Z" },
        { "name": "Plumber", "phone": "2", "email": "p@x.com", "service": "Plumbing", "id": 2, "timestamp": "2023-11-14T22:13:21Z" },
        { "note": "no contact fields at all" }
    ]);
    let desk = ContactDesk::new(
        MemoryStore::new().seeded(KEY, legacy.to_string()),
        Immediate,
    );

    desk.submit(jane()).await.expect("submit");

    let stored = stored_array(&desk);
    assert_eq!(stored.len(), 4);
    assert_eq!(&stored[..3], legacy.as_array().unwrap().as_slice());
    assert_eq!(stored[3]["name"], "Jane Doe");
}

#[tokio::test]
async fn null_and_unknown_optionals_read_as_unset() {
    let legacy = json!([
        { "name": "Nulls", "phone": "1", "email": "n@x.com", "service": null, "message": null, "id": 1, "timestamp": "2023-11-14T22:13:20Z" },
        { "name": "Plumber", "phone": "2", "email": "p@x.com", "service": "Plumbing", "id": 2, "timestamp": "2023-11-14T22:13:21Z" }
    ]);
    let desk = ContactDesk::new(
        MemoryStore::new().seeded(KEY, legacy.to_string()),
        Immediate,
    );

    desk.submit(jane()).await.expect("submit");

    let typed = desk.inquiries().expect("inquiries");
    assert_eq!(typed.len(), 3);
    assert_eq!(typed[0].message, "");
    assert_eq!(typed[1].service, None);
    assert!(typed[2].id > 2);
}

#[tokio::test]
async fn stored_value_is_always_a_json_array() {
    let desk = desk();
    for _ in 0..3 {
        desk.submit(jane()).await.expect("submit");
        let raw = desk.store().get_item(KEY).unwrap().expect("stored value");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
    }
}

#[tokio::test]
async fn file_backed_desk_survives_reload() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    {
        let desk = ContactDesk::new(FileStore::open(dir.path()).unwrap(), Immediate);
        desk.submit(jane()).await.expect("submit");
    }

    let reloaded = ContactDesk::new(FileStore::open(dir.path()).unwrap(), Immediate);
    reloaded
        .submit(InquiryDraft::new("Second", "2", "s@x.com"))
        .await
        .expect("submit");

    let stored = reloaded.inquiries().expect("inquiries");
    let names: Vec<_> = stored.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Jane Doe", "Second"]);
}
