//! Content synchronization workbench.
//!
//! # Responsibility
//! - Own the in-memory authoritative list of content records shown to
//!   the UI, in arrival order.
//! - Mediate every mutation through the [`ContentStore`] adapter and
//!   reconcile the list with each outcome.
//! - Coordinate the time-bounded undo of the last delete.
//!
//! # Invariants
//! - The list holds at most one record per id.
//! - Create is pessimistic: a record is appended only after the store
//!   confirms the write and assigns an id.
//! - Delete is optimistic: the record leaves the list before the store
//!   confirms; a failed confirmation re-inserts it from the tombstone
//!   at its former position.
//! - No mutation is retried automatically; every failure surfaces once
//!   through the notifier and leaves the application usable.

mod undo;

pub use undo::{UndoOutcome, DEFAULT_UNDO_WINDOW};

use crate::model::content::{ContentKind, ContentRecord};
use crate::notify::{Notice, NoticeAction, Notifier};
use crate::repo::content_store::{ContentStore, StoreError, StoreResult};
use crate::settings::{SettingsStore, ThemeColor, ThemeSettings};
use log::{info, warn};
use std::time::Duration;
use undo::UndoSlot;

/// In-memory synchronization layer between the authoring UI and the
/// persistent content store.
pub struct Workbench<S, C, N> {
    store: S,
    settings: C,
    notifier: N,
    contents: Vec<ContentRecord>,
    theme: ThemeSettings,
    undo_slot: Option<UndoSlot>,
    undo_window: Duration,
}

impl<S, C, N> Workbench<S, C, N>
where
    S: ContentStore,
    C: SettingsStore,
    N: Notifier,
{
    /// Creates a workbench with an empty list and default theme snapshot.
    ///
    /// Call [`Workbench::initialize`] before serving reads.
    pub fn new(store: S, settings: C, notifier: N) -> Self {
        Self {
            store,
            settings,
            notifier,
            contents: Vec::new(),
            theme: ThemeSettings::default(),
            undo_slot: None,
            undo_window: DEFAULT_UNDO_WINDOW,
        }
    }

    /// Overrides how long a delete stays reversible.
    pub fn with_undo_window(mut self, window: Duration) -> Self {
        self.undo_window = window;
        self
    }

    /// Loads the theme snapshot and the persisted content list.
    ///
    /// On list failure the list stays empty, a load-failure notice is
    /// emitted exactly once and the error is returned; the operation is
    /// not retried automatically.
    pub fn initialize(&mut self) -> StoreResult<()> {
        self.theme = match self.settings.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                // Theme is cosmetic; an unreadable settings store must
                // not block the content list.
                warn!("event=settings_load module=workspace status=error error={err}");
                ThemeSettings::default()
            }
        };

        match self.store.list() {
            Ok(records) => {
                info!(
                    "event=contents_load module=workspace status=ok count={}",
                    records.len()
                );
                self.contents = records;
                Ok(())
            }
            Err(err) => {
                warn!("event=contents_load module=workspace status=error error={err}");
                self.contents.clear();
                self.notifier.notify(Notice::plain(
                    "Failed to load contents",
                    "Please refresh the page.",
                ));
                Err(err)
            }
        }
    }

    /// Persists a submitted record and reconciles the list.
    ///
    /// A record with an id is updated in place; an id-less record is
    /// created, receives its store-assigned id and is appended to the
    /// end. Creating a theme record additionally switches the active
    /// theme snapshot and writes it through to settings.
    ///
    /// On failure the list is untouched and a recoverable-error notice
    /// is emitted; the caller keeps its draft and may retry.
    pub fn submit(&mut self, record: ContentRecord) -> StoreResult<ContentRecord> {
        if record.id.is_some() {
            self.submit_update(record)
        } else {
            self.submit_create(record)
        }
    }

    fn submit_update(&mut self, record: ContentRecord) -> StoreResult<ContentRecord> {
        if let Err(err) = self.store.update(&record) {
            self.notify_write_failure(record.kind);
            return Err(err);
        }

        if let Some(entry) = self
            .contents
            .iter_mut()
            .find(|candidate| candidate.id == record.id)
        {
            *entry = record.clone();
        }
        Ok(record)
    }

    fn submit_create(&mut self, mut record: ContentRecord) -> StoreResult<ContentRecord> {
        let id = match self.store.create(&record) {
            Ok(id) => id,
            Err(err) => {
                self.notify_write_failure(record.kind);
                return Err(err);
            }
        };

        record.id = Some(id);
        if record.kind == ContentKind::ThemeContent {
            if let Some(theme) = record.theme.clone() {
                self.switch_theme(theme);
            }
        }

        self.contents.push(record.clone());
        Ok(record)
    }

    /// Optimistically removes a record, then requests the backend delete.
    ///
    /// The record leaves the list before the store confirms. If the
    /// store then fails, the record is re-inserted from its tombstone at
    /// the former position and a failure notice is emitted. On success a
    /// deletion notice carrying an undo action is emitted and the record
    /// stays reversible for the undo window.
    pub fn delete(&mut self, record: &ContentRecord) -> StoreResult<()> {
        let id = record.id.ok_or(StoreError::MissingId)?;
        let Some(position) = self
            .contents
            .iter()
            .position(|candidate| candidate.id == Some(id))
        else {
            return Ok(());
        };

        let removed = self.contents.remove(position);

        if let Err(err) = self.store.delete(id) {
            self.contents.insert(position, removed);
            self.notifier.notify(Notice::plain(
                "Failed to delete content",
                "Please try again.",
            ));
            return Err(err);
        }

        self.undo_slot = Some(UndoSlot::new(removed, self.undo_window));
        self.notifier.notify(Notice::with_action(
            "Content deleted",
            "Content deleted successfully",
            NoticeAction::Undo,
        ));
        Ok(())
    }

    /// Reverses the last successful delete, if still offered.
    ///
    /// The captured record is re-created with its old id stripped; the
    /// store assigns a fresh one and the restored record is appended to
    /// the list. A closed window is not an error.
    pub fn undo_delete(&mut self) -> StoreResult<UndoOutcome> {
        let Some(slot) = self.undo_slot.take() else {
            return Ok(UndoOutcome::WindowClosed);
        };
        if slot.is_expired() {
            return Ok(UndoOutcome::WindowClosed);
        }

        let mut record = slot.into_record().without_id();
        match self.store.create(&record) {
            Ok(id) => {
                record.id = Some(id);
                self.contents.push(record);
                Ok(UndoOutcome::Restored(id))
            }
            Err(err) => {
                // The record is now gone from both store and list; all
                // that is left is telling the user.
                self.notifier
                    .notify(Notice::plain("Failed to add content", "Please try again."));
                Err(err)
            }
        }
    }

    /// Withdraws the current undo offer, if any.
    pub fn dismiss_undo(&mut self) {
        self.undo_slot = None;
    }

    /// Returns whether a delete is currently reversible.
    pub fn undo_available(&self) -> bool {
        self.undo_slot
            .as_ref()
            .is_some_and(|slot| !slot.is_expired())
    }

    /// Switches the active theme by name and persists it.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.switch_theme(theme.into());
    }

    /// Switches the active theme color and persists it.
    pub fn set_theme_color(&mut self, color: ThemeColor) {
        self.theme = ThemeSettings {
            theme: self.theme.theme.clone(),
            theme_color: color,
        };
        if let Err(err) = self.settings.store_theme_color(color) {
            warn!("event=settings_store module=workspace status=error key=theme_color error={err}");
        }
    }

    /// The in-memory authoritative content list, in arrival order.
    pub fn contents(&self) -> &[ContentRecord] {
        &self.contents
    }

    /// Current theme snapshot.
    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    /// Access to the notification collaborator, e.g. to drain collected
    /// notices.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    fn switch_theme(&mut self, theme: String) {
        if let Err(err) = self.settings.store_theme(&theme) {
            warn!("event=settings_store module=workspace status=error key=theme error={err}");
        }
        self.theme = ThemeSettings {
            theme,
            theme_color: self.theme.theme_color,
        };
    }

    fn notify_write_failure(&mut self, kind: ContentKind) {
        let title = match kind {
            ContentKind::ThemeContent => "Failed to add theme content",
            ContentKind::NormalContent => "Failed to add content",
        };
        self.notifier
            .notify(Notice::plain(title, "Please try again."));
    }
}
