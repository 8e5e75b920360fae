//! Content store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the four-operation persistence contract: list, create,
//!   update, delete.
//! - Keep SQL and row-mapping details inside the persistence boundary.
//!
//! # Invariants
//! - `create` never accepts a record that already carries an id.
//! - `update`/`delete` require an id; calling without one is a caller
//!   contract violation, not a storage failure.
//! - `list` returns rows in backend enumeration order (ascending id).

use crate::db::DbError;
use crate::model::content::{
    AttachmentRef, ContentId, ContentKind, ContentRecord, ContentValidationError,
};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTENT_SELECT_SQL: &str = "SELECT
    id,
    type,
    title,
    body,
    theme,
    attachments
FROM contents";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store adapter error taxonomy.
#[derive(Debug)]
pub enum StoreError {
    /// Backend missing, write rejected, or transaction aborted.
    Unavailable(DbError),
    /// Update target does not exist.
    NotFound(ContentId),
    /// Update/delete called for a record that was never persisted.
    MissingId,
    /// Record failed kind/designator validation.
    Validation(ContentValidationError),
    /// Persisted state cannot be mapped back to a record.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "storage unavailable: {err}"),
            Self::NotFound(id) => write!(f, "content not found: {id}"),
            Self::MissingId => write!(f, "operation requires a store-assigned id"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted content data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Unavailable(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Unavailable(DbError::Sqlite(value))
    }
}

impl From<ContentValidationError> for StoreError {
    fn from(value: ContentValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Persistence contract the synchronization workbench mediates through.
///
/// Implementations must be all-or-nothing per call: a returned error
/// means backend state is unchanged.
pub trait ContentStore {
    /// Enumerates all records in backend order.
    fn list(&self) -> StoreResult<Vec<ContentRecord>>;
    /// Inserts an id-less record and returns the assigned id.
    fn create(&self, record: &ContentRecord) -> StoreResult<ContentId>;
    /// Replaces the record stored under `record.id`.
    fn update(&self, record: &ContentRecord) -> StoreResult<()>;
    /// Removes the record stored under `id`. Idempotent per id.
    fn delete(&self, id: ContentId) -> StoreResult<()>;
}

/// SQLite-backed content store.
pub struct SqliteContentStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContentStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContentStore for SqliteContentStore<'_> {
    fn list(&self) -> StoreResult<Vec<ContentRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_content_row(row)?);
        }

        Ok(records)
    }

    fn create(&self, record: &ContentRecord) -> StoreResult<ContentId> {
        if record.id.is_some() {
            return Err(StoreError::InvalidData(
                "create must not receive a record that already carries an id".to_string(),
            ));
        }
        record.validate()?;

        self.conn.execute(
            "INSERT INTO contents (type, title, body, theme, attachments)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                kind_to_db(record.kind),
                record.title.as_str(),
                record.body.as_str(),
                record.theme.as_deref(),
                encode_attachments(&record.attachments)?,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, record: &ContentRecord) -> StoreResult<()> {
        let id = record.id.ok_or(StoreError::MissingId)?;
        record.validate()?;

        let changed = self.conn.execute(
            "UPDATE contents
             SET
                type = ?1,
                title = ?2,
                body = ?3,
                theme = ?4,
                attachments = ?5
             WHERE id = ?6;",
            params![
                kind_to_db(record.kind),
                record.title.as_str(),
                record.body.as_str(),
                record.theme.as_deref(),
                encode_attachments(&record.attachments)?,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: ContentId) -> StoreResult<()> {
        // Deleting an already-absent id is not an error: two rapid
        // deletes on the same record must both settle cleanly.
        self.conn
            .execute("DELETE FROM contents WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_content_row(row: &Row<'_>) -> StoreResult<ContentRecord> {
    let type_text: String = row.get("type")?;
    let kind = parse_kind(&type_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid content type `{type_text}` in contents.type"))
    })?;

    let attachments_text: String = row.get("attachments")?;
    let attachments = decode_attachments(&attachments_text)?;

    let record = ContentRecord {
        id: Some(row.get("id")?),
        kind,
        title: row.get("title")?,
        body: row.get("body")?,
        theme: row.get("theme")?,
        attachments,
    };
    record.validate()?;
    Ok(record)
}

fn kind_to_db(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::NormalContent => "normal_content",
        ContentKind::ThemeContent => "theme_content",
    }
}

fn parse_kind(value: &str) -> Option<ContentKind> {
    match value {
        "normal_content" => Some(ContentKind::NormalContent),
        "theme_content" => Some(ContentKind::ThemeContent),
        _ => None,
    }
}

fn encode_attachments(attachments: &[AttachmentRef]) -> StoreResult<String> {
    serde_json::to_string(attachments).map_err(|err| {
        StoreError::InvalidData(format!("attachments are not JSON-encodable: {err}"))
    })
}

fn decode_attachments(value: &str) -> StoreResult<Vec<AttachmentRef>> {
    serde_json::from_str(value).map_err(|err| {
        StoreError::InvalidData(format!("invalid attachments JSON in contents.attachments: {err}"))
    })
}
