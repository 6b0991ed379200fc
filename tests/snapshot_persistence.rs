use calltrail::{
    CallDirection, CallPriority, CallStatus, CallStore, Filter, FilterUpdate, NewCall,
    SnapshotStore, SCHEMA_VERSION,
};
use std::fs;
use tempfile::tempdir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn payload(name: &str) -> NewCall {
    NewCall {
        contact_name: name.to_string(),
        phone_number: "+91 98000 11000".to_string(),
        direction: CallDirection::Outgoing,
        status: CallStatus::New,
        priority: CallPriority::High,
        scheduled_at: None,
        duration_minutes: Some(7),
        tags: vec!["sales".to_string()],
        notes: "left voicemail".to_string(),
        follow_up_action: Some("try again tomorrow".to_string()),
    }
}

#[test]
fn state_survives_a_restart() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("calls.json");

    let first_id = {
        let mut store = CallStore::open(SnapshotStore::new(path.clone())).expect("open");
        store.add_call(payload("Meera Iyer")).expect("add call");
        store
            .set_filters(FilterUpdate {
                status: Some(Filter::Only(CallStatus::New)),
                ..FilterUpdate::default()
            })
            .expect("set filters");
        store.calls()[0].id.clone()
    };

    let reopened = CallStore::open(SnapshotStore::new(path)).expect("reopen");
    assert_eq!(reopened.calls()[0].id, first_id);
    assert_eq!(reopened.calls()[0].contact_name, "Meera Iyer");
    assert_eq!(
        reopened.filters().status,
        Filter::Only(CallStatus::New),
        "filter configuration is part of the snapshot"
    );
}

#[test]
fn snapshot_round_trip_preserves_state_exactly() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let storage = SnapshotStore::new(dir.path().join("calls.json"));

    let state = {
        let mut store = CallStore::open(SnapshotStore::new(storage.path().to_path_buf()))
            .expect("open");
        store.add_call(payload("Meera Iyer")).expect("add call");
        store.state().clone()
    };

    let loaded = storage.load().expect("snapshot present");
    assert_eq!(loaded, state);
}

#[test]
fn corrupt_snapshot_falls_back_to_seeded_default() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("calls.json");
    fs::write(&path, "{ not json").expect("write garbage");

    let store = CallStore::open(SnapshotStore::new(path)).expect("open");
    assert!(
        !store.calls().is_empty(),
        "fallback state is seeded with example calls"
    );
    assert_eq!(store.filters(), &Default::default());
}

#[test]
fn version_mismatch_discards_the_snapshot() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("calls.json");

    {
        let mut store = CallStore::open(SnapshotStore::new(path.clone())).expect("open");
        store.add_call(payload("Meera Iyer")).expect("add call");
    }

    // Rewrite the envelope with a bumped version; the payload itself is valid.
    let contents = fs::read_to_string(&path).expect("read snapshot");
    let mut envelope: serde_json::Value = serde_json::from_str(&contents).expect("parse");
    envelope["version"] = serde_json::json!(SCHEMA_VERSION + 1);
    fs::write(&path, envelope.to_string()).expect("rewrite");

    let store = CallStore::open(SnapshotStore::new(path)).expect("reopen");
    assert!(
        store.calls().iter().all(|call| call.contact_name != "Meera Iyer"),
        "stale-version snapshot must not be loaded"
    );
}

#[test]
fn missing_snapshot_reads_as_not_found() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let storage = SnapshotStore::new(dir.path().join("never-written.json"));
    assert!(storage.load().is_none());
}

#[test]
fn seeding_only_happens_when_the_collection_is_empty() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("calls.json");

    // A snapshot with one call must never be topped up with examples.
    let mut store = CallStore::open(SnapshotStore::new(path.clone())).expect("open");
    let seeded = store.calls().len();
    assert!(seeded > 0, "first launch seeds example calls");
    store.add_call(payload("Meera Iyer")).expect("add call");
    let total = store.calls().len();
    drop(store);

    let reopened = CallStore::open(SnapshotStore::new(path)).expect("reopen");
    assert_eq!(reopened.calls().len(), total);
}

#[test]
fn every_mutation_is_persisted_immediately() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("calls.json");
    let mut store = CallStore::open(SnapshotStore::new(path.clone())).expect("open");

    store.add_call(payload("Meera Iyer")).expect("add call");
    let id = store.calls()[0].id.clone();
    store
        .update_notes(&id, "reached at second attempt".to_string(), None)
        .expect("update notes");

    let on_disk = SnapshotStore::new(path).load().expect("snapshot present");
    assert_eq!(on_disk.calls[0].notes, "reached at second attempt");
    assert_eq!(
        on_disk.calls[0].follow_up_action.as_deref(),
        Some("try again tomorrow")
    );
    assert_eq!(&on_disk, store.state());
}
