use postbench_core::db::{open_db_in_memory, DbError};
use postbench_core::{
    ContentId, ContentKind, ContentRecord, ContentStore, DraftAction, DraftForm, DraftState,
    MemoryNotifier, SqliteContentStore, SqliteSettingsStore, StoreError, StoreResult, Workbench,
};
use rusqlite::Connection;

struct OfflineStore;

impl ContentStore for OfflineStore {
    fn list(&self) -> StoreResult<Vec<ContentRecord>> {
        Err(offline())
    }
    fn create(&self, _record: &ContentRecord) -> StoreResult<ContentId> {
        Err(offline())
    }
    fn update(&self, _record: &ContentRecord) -> StoreResult<()> {
        Err(offline())
    }
    fn delete(&self, _id: ContentId) -> StoreResult<()> {
        Err(offline())
    }
}

fn offline() -> StoreError {
    StoreError::Unavailable(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
}

fn workbench(
    conn: &Connection,
) -> Workbench<SqliteContentStore<'_>, SqliteSettingsStore<'_>, MemoryNotifier> {
    Workbench::new(
        SqliteContentStore::new(conn),
        SqliteSettingsStore::new(conn),
        MemoryNotifier::new(),
    )
}

#[test]
fn add_mode_submit_persists_resets_and_keeps_editor_open() {
    let conn = open_db_in_memory().unwrap();
    let mut bench = workbench(&conn);
    bench.initialize().unwrap();

    let mut form = DraftForm::new();
    form.dispatch(DraftAction::SetTitle("A".to_string()));
    form.dispatch(DraftAction::SetBody("x".to_string()));

    let outcome = form.submit(&mut bench).unwrap();

    assert!(!outcome.close_editor);
    assert!(outcome.record.id.is_some());
    assert_eq!(outcome.record.title, "A");
    assert_eq!(form.state(), &DraftState::default());
    assert_eq!(bench.contents().len(), 1);
}

#[test]
fn edit_mode_prefills_fields_and_carries_the_original_id() {
    let mut stored = ContentRecord::new_normal("A", "x");
    stored.id = Some(3);

    let form = DraftForm::edit(&stored);
    assert!(form.is_editing());
    assert_eq!(form.state().title, "A");
    assert_eq!(form.state().body, "x");

    let packaged = form.to_record();
    assert_eq!(packaged.id, Some(3));
    assert_eq!(packaged.kind, ContentKind::NormalContent);
}

#[test]
fn edit_mode_submit_replaces_record_and_closes_editor() {
    let conn = open_db_in_memory().unwrap();
    let mut bench = workbench(&conn);
    bench.initialize().unwrap();

    let stored = bench.submit(ContentRecord::new_normal("A", "x")).unwrap();

    let mut form = DraftForm::edit(&stored);
    form.dispatch(DraftAction::SetBody("rewritten".to_string()));

    let outcome = form.submit(&mut bench).unwrap();

    assert!(outcome.close_editor);
    assert!(!form.is_editing());
    assert_eq!(bench.contents().len(), 1);
    assert_eq!(bench.contents()[0].body, "rewritten");
}

#[test]
fn failed_submit_retains_the_draft_for_resubmission() {
    let conn = open_db_in_memory().unwrap();
    let mut bench = Workbench::new(
        OfflineStore,
        SqliteSettingsStore::new(&conn),
        MemoryNotifier::new(),
    );

    let mut form = DraftForm::new();
    form.dispatch(DraftAction::SetTitle("A".to_string()));
    form.dispatch(DraftAction::SetBody("x".to_string()));

    assert!(form.submit(&mut bench).is_err());

    assert_eq!(form.state().title, "A");
    assert_eq!(form.state().body, "x");
    assert!(bench.contents().is_empty());
}

#[test]
fn theme_draft_packages_a_theme_record() {
    let form = DraftForm::new_theme("wechat-post-2");
    let packaged = form.to_record();

    assert_eq!(packaged.kind, ContentKind::ThemeContent);
    assert_eq!(packaged.theme.as_deref(), Some("wechat-post-2"));
    assert_eq!(packaged.id, None);
}
