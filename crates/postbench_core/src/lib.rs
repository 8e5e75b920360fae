//! Local content store and optimistic synchronization core.
//! This crate is the single source of truth for persistence invariants.

pub mod db;
pub mod draft;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod settings;
pub mod workspace;

pub use draft::{DraftAction, DraftForm, DraftState, SubmitOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::content::{
    AttachmentRef, ContentId, ContentKind, ContentRecord, ContentValidationError,
};
pub use notify::{LogNotifier, MemoryNotifier, Notice, NoticeAction, Notifier};
pub use repo::content_store::{ContentStore, SqliteContentStore, StoreError, StoreResult};
pub use settings::{SettingsStore, SqliteSettingsStore, ThemeColor, ThemeSettings};
pub use workspace::{UndoOutcome, Workbench, DEFAULT_UNDO_WINDOW};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
