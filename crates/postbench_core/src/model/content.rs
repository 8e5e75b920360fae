//! Content record domain model.
//!
//! # Responsibility
//! - Define the unit of persistence for the content store.
//! - Provide lifecycle helpers for the persisted/unpersisted split.
//!
//! # Invariants
//! - `id` is absent until the store assigns one and never changes after.
//! - `kind == ThemeContent` requires a non-empty theme designator.
//! - `title` and `body` may both be empty; emptiness is not an error.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier for a persisted content record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContentId = i64;

/// Category of an authored fragment.
///
/// A theme record carries a theme designator and, when first persisted,
/// switches the globally active theme as a side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Plain authored fragment.
    NormalContent,
    /// Fragment that selects the active visual theme.
    ThemeContent,
}

/// Opaque reference to an uploaded attachment.
///
/// Produced by the file-upload collaborator; the core never interprets
/// these beyond preserving their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    /// Display name of the attached file.
    pub name: String,
    /// Collaborator-provided location of the file.
    pub url: String,
}

/// The unit of persistence: one authored post fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Store-assigned identity. `None` until the first successful create.
    pub id: Option<ContentId>,
    /// Serialized as `type` to match the external schema naming.
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Fragment title; may be empty.
    pub title: String,
    /// Fragment body text; may be empty.
    pub body: String,
    /// Theme designator, meaningful only when `kind == ThemeContent`.
    pub theme: Option<String>,
    /// Ordered attachment references, opaque to the core.
    pub attachments: Vec<AttachmentRef>,
}

/// Validation failures for content records on write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    /// A theme record without a usable theme designator.
    MissingThemeDesignator,
    /// A normal record carrying a theme designator.
    UnexpectedThemeDesignator,
}

impl Display for ContentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingThemeDesignator => {
                write!(f, "theme content requires a non-empty theme designator")
            }
            Self::UnexpectedThemeDesignator => {
                write!(f, "normal content must not carry a theme designator")
            }
        }
    }
}

impl Error for ContentValidationError {}

impl ContentRecord {
    /// Creates an unpersisted plain fragment.
    pub fn new_normal(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: ContentKind::NormalContent,
            title: title.into(),
            body: body.into(),
            theme: None,
            attachments: Vec::new(),
        }
    }

    /// Creates an unpersisted theme-selecting fragment.
    pub fn new_theme(
        title: impl Into<String>,
        body: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            kind: ContentKind::ThemeContent,
            title: title.into(),
            body: body.into(),
            theme: Some(theme.into()),
            attachments: Vec::new(),
        }
    }

    /// Returns whether the store has assigned an identity to this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks kind/designator consistency.
    ///
    /// # Invariants
    /// - `ThemeContent` requires `theme` to be present and non-blank.
    /// - `NormalContent` requires `theme` to be absent.
    pub fn validate(&self) -> Result<(), ContentValidationError> {
        match self.kind {
            ContentKind::ThemeContent => match self.theme.as_deref() {
                Some(value) if !value.trim().is_empty() => Ok(()),
                _ => Err(ContentValidationError::MissingThemeDesignator),
            },
            ContentKind::NormalContent => {
                if self.theme.is_some() {
                    Err(ContentValidationError::UnexpectedThemeDesignator)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns a copy stripped of store identity.
    ///
    /// Used when re-creating a deleted record: the old `id` is not
    /// reusable, the store assigns a fresh one.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentKind, ContentRecord, ContentValidationError};

    #[test]
    fn normal_record_with_empty_fields_is_valid() {
        let record = ContentRecord::new_normal("", "");
        assert!(record.validate().is_ok());
        assert!(!record.is_persisted());
    }

    #[test]
    fn theme_record_requires_designator() {
        let mut record = ContentRecord::new_theme("t", "b", "wechat-post-1");
        assert!(record.validate().is_ok());

        record.theme = Some("   ".to_string());
        assert_eq!(
            record.validate(),
            Err(ContentValidationError::MissingThemeDesignator)
        );
    }

    #[test]
    fn normal_record_rejects_designator() {
        let mut record = ContentRecord::new_normal("t", "b");
        record.theme = Some("wechat-post-1".to_string());
        assert_eq!(
            record.validate(),
            Err(ContentValidationError::UnexpectedThemeDesignator)
        );
    }

    #[test]
    fn without_id_strips_identity_only() {
        let mut record = ContentRecord::new_normal("keep", "me");
        record.id = Some(7);

        let stripped = record.without_id();
        assert_eq!(stripped.id, None);
        assert_eq!(stripped.title, "keep");
        assert_eq!(stripped.kind, ContentKind::NormalContent);
    }
}
