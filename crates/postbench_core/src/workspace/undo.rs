//! Time-bounded undo slot for the last successful delete.

use crate::model::content::{ContentId, ContentRecord};
use std::time::{Duration, Instant};

/// How long a delete stays reversible by default. A policy knob, not a
/// correctness requirement.
pub const DEFAULT_UNDO_WINDOW: Duration = Duration::from_secs(5);

/// Outcome of an undo attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The record was re-created under a fresh store-assigned id and is
    /// visible in the workbench again.
    Restored(ContentId),
    /// No delete is currently reversible: nothing was deleted, the
    /// window elapsed, or the offer was dismissed.
    WindowClosed,
}

/// Captured copy of the most recently deleted record.
///
/// Holds the full former value, old id included, so the offer can be
/// re-created verbatim. The old id itself is never reused on restore.
#[derive(Debug)]
pub(crate) struct UndoSlot {
    record: ContentRecord,
    captured_at: Instant,
    window: Duration,
}

impl UndoSlot {
    pub(crate) fn new(record: ContentRecord, window: Duration) -> Self {
        Self {
            record,
            captured_at: Instant::now(),
            window,
        }
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.captured_at.elapsed() >= self.window
    }

    pub(crate) fn into_record(self) -> ContentRecord {
        self.record
    }
}
