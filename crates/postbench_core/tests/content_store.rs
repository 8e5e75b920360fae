use postbench_core::db::open_db_in_memory;
use postbench_core::{
    AttachmentRef, ContentKind, ContentRecord, ContentStore, SqliteContentStore, StoreError,
};

#[test]
fn create_assigns_increasing_ids_and_list_follows_backend_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let first = store.create(&ContentRecord::new_normal("A", "x")).unwrap();
    let second = store.create(&ContentRecord::new_normal("B", "y")).unwrap();
    assert!(second > first);

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, Some(first));
    assert_eq!(listed[0].title, "A");
    assert_eq!(listed[1].id, Some(second));
}

#[test]
fn create_rejects_record_that_already_has_an_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let mut record = ContentRecord::new_normal("A", "x");
    record.id = Some(42);

    let err = store.create(&record).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn attachments_survive_a_store_round_trip_in_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let mut record = ContentRecord::new_normal("A", "x");
    record.attachments = vec![
        AttachmentRef {
            name: "one.png".to_string(),
            url: "blob:one".to_string(),
        },
        AttachmentRef {
            name: "two.png".to_string(),
            url: "blob:two".to_string(),
        },
    ];
    store.create(&record).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed[0].attachments, record.attachments);
}

#[test]
fn update_replaces_stored_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let id = store.create(&ContentRecord::new_normal("A", "x")).unwrap();

    let mut changed = ContentRecord::new_normal("A", "rewritten");
    changed.id = Some(id);
    store.update(&changed).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].body, "rewritten");
}

#[test]
fn update_without_id_is_a_contract_violation() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let err = store.update(&ContentRecord::new_normal("A", "x")).unwrap_err();
    assert!(matches!(err, StoreError::MissingId));
}

#[test]
fn update_of_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let mut record = ContentRecord::new_normal("A", "x");
    record.id = Some(999);

    let err = store.update(&record).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(999)));
}

#[test]
fn delete_is_idempotent_per_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let id = store.create(&ContentRecord::new_normal("A", "x")).unwrap();
    store.delete(id).unwrap();
    store.delete(id).unwrap();

    assert!(store.list().unwrap().is_empty());
}

#[test]
fn recreate_after_delete_never_reuses_the_old_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let record = ContentRecord::new_normal("A", "x");
    let old_id = store.create(&record).unwrap();
    store.delete(old_id).unwrap();

    let new_id = store.create(&record).unwrap();
    assert_ne!(new_id, old_id);
}

#[test]
fn theme_record_persists_its_designator() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let id = store
        .create(&ContentRecord::new_theme("T", "", "wechat-post-2"))
        .unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed[0].id, Some(id));
    assert_eq!(listed[0].kind, ContentKind::ThemeContent);
    assert_eq!(listed[0].theme.as_deref(), Some("wechat-post-2"));
}

#[test]
fn theme_record_without_designator_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContentStore::new(&conn);

    let mut record = ContentRecord::new_theme("T", "", "wechat-post-2");
    record.theme = None;

    let err = store.create(&record).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}
