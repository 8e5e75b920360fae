//! Draft editor state machine.
//!
//! # Responsibility
//! - Hold ephemeral per-authoring-session field state (title, body,
//!   pending attachments) independent of the persisted list.
//! - Package the current fields as a [`ContentRecord`] on submit and
//!   reconcile the draft with the synchronization outcome.
//!
//! # Invariants
//! - Transitions are pure and synchronous; no backend interaction
//!   happens below the submit boundary.
//! - A successful submit resets the draft; a failed submit retains
//!   every field so the user can retry.

use crate::model::content::{AttachmentRef, ContentId, ContentKind, ContentRecord};
use crate::notify::Notifier;
use crate::repo::content_store::{ContentStore, StoreResult};
use crate::settings::SettingsStore;
use crate::workspace::Workbench;

/// One field transition of the draft reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    SetTitle(String),
    SetBody(String),
    SetAttachments(Vec<AttachmentRef>),
    Reset,
}

/// Current field values of an authoring session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    pub title: String,
    pub body: String,
    pub attachments: Vec<AttachmentRef>,
}

impl DraftState {
    /// Pure reducer: consumes the current state and one action,
    /// produces the next state.
    pub fn apply(self, action: DraftAction) -> Self {
        match action {
            DraftAction::SetTitle(title) => Self { title, ..self },
            DraftAction::SetBody(body) => Self { body, ..self },
            DraftAction::SetAttachments(attachments) => Self {
                attachments,
                ..self
            },
            DraftAction::Reset => Self::default(),
        }
    }
}

/// Outcome of a successful draft submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The persisted record, id assigned or preserved.
    pub record: ContentRecord,
    /// Whether the editing surface should close (edits only).
    pub close_editor: bool,
}

/// Controller-facing boundary around one draft session.
///
/// Created either empty (add mode) or from an existing record (edit
/// mode, carrying the original id and kind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    state: DraftState,
    editing: Option<ContentId>,
    kind: ContentKind,
    theme: Option<String>,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftForm {
    /// Starts an empty draft for a plain fragment.
    pub fn new() -> Self {
        Self {
            state: DraftState::default(),
            editing: None,
            kind: ContentKind::NormalContent,
            theme: None,
        }
    }

    /// Starts an empty draft for a theme-selecting fragment.
    pub fn new_theme(theme: impl Into<String>) -> Self {
        Self {
            state: DraftState::default(),
            editing: None,
            kind: ContentKind::ThemeContent,
            theme: Some(theme.into()),
        }
    }

    /// Starts a draft pre-filled from an existing record (edit mode).
    pub fn edit(record: &ContentRecord) -> Self {
        Self {
            state: DraftState {
                title: record.title.clone(),
                body: record.body.clone(),
                attachments: record.attachments.clone(),
            },
            editing: record.id,
            kind: record.kind,
            theme: record.theme.clone(),
        }
    }

    /// Applies one reducer action to the draft fields.
    pub fn dispatch(&mut self, action: DraftAction) {
        self.state = std::mem::take(&mut self.state).apply(action);
    }

    /// Current field values.
    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// Whether this draft edits an already-persisted record.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Packages the current fields as a content record, carrying the
    /// original id when editing.
    pub fn to_record(&self) -> ContentRecord {
        ContentRecord {
            id: self.editing,
            kind: self.kind,
            title: self.state.title.clone(),
            body: self.state.body.clone(),
            theme: self.theme.clone(),
            attachments: self.state.attachments.clone(),
        }
    }

    /// Submits the draft through the workbench.
    ///
    /// On success the draft resets to empty defaults and the outcome
    /// says whether the editing surface should close. On failure the
    /// draft is left untouched for resubmission.
    pub fn submit<S, C, N>(
        &mut self,
        workbench: &mut Workbench<S, C, N>,
    ) -> StoreResult<SubmitOutcome>
    where
        S: ContentStore,
        C: SettingsStore,
        N: Notifier,
    {
        let record = workbench.submit(self.to_record())?;
        let close_editor = self.editing.is_some();

        self.state = DraftState::default();
        self.editing = None;

        Ok(SubmitOutcome {
            record,
            close_editor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftAction, DraftState};
    use crate::model::content::AttachmentRef;

    #[test]
    fn reducer_replaces_one_field_per_action() {
        let state = DraftState::default()
            .apply(DraftAction::SetTitle("A".to_string()))
            .apply(DraftAction::SetBody("x".to_string()));

        assert_eq!(state.title, "A");
        assert_eq!(state.body, "x");
        assert!(state.attachments.is_empty());
    }

    #[test]
    fn reset_returns_empty_defaults() {
        let state = DraftState::default()
            .apply(DraftAction::SetTitle("A".to_string()))
            .apply(DraftAction::SetAttachments(vec![AttachmentRef {
                name: "cover.png".to_string(),
                url: "blob:cover".to_string(),
            }]))
            .apply(DraftAction::Reset);

        assert_eq!(state, DraftState::default());
    }
}
