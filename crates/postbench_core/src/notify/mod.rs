//! Notification collaborator boundary.
//!
//! The core never renders notifications; it emits `(title, description,
//! optional action)` tuples through the [`Notifier`] seam and lets the
//! presentation layer decide what a toast looks like.

use log::info;

/// Durable action a notification may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    /// Reverse the delete the notice reports on.
    Undo,
}

/// One notification tuple emitted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    /// Present only on delete-success notices.
    pub action: Option<NoticeAction>,
}

impl Notice {
    pub fn plain(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            action: None,
        }
    }

    pub fn with_action(
        title: impl Into<String>,
        description: impl Into<String>,
        action: NoticeAction,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            action: Some(action),
        }
    }
}

/// Receiver for core-emitted notifications.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Default collaborator: forwards notices to the structured log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        info!(
            "event=notice module=notify title={:?} description={:?} action={:?}",
            notice.title, notice.description, notice.action
        );
    }
}

/// Collects notices in memory; used by embedders that drain them into a
/// UI queue, and by tests asserting on emitted notifications.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Vec<Notice>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notices emitted so far, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Removes and returns all collected notices.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
