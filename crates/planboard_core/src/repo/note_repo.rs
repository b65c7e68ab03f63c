//! Notes board repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for free-text notes grouped by assignee.
//!
//! # Invariants
//! - `created_at` is server-assigned by the SQL default, never by callers.
//! - Per-assignee listing is creation order: `created_at ASC, rowid ASC`.
//! - Notes are hard-deleted; there is no tombstone state.

use crate::model::note::{Note, NoteId};
use crate::repo::{ensure_schema_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    note_uuid,
    content,
    assignee,
    created_at
FROM notes";

/// Repository interface for notes board operations.
pub trait NoteRepository {
    /// Creates one note with a server-assigned timestamp.
    fn create_note(&self, content: &str, assignee: &str) -> RepoResult<Note>;
    /// Loads one note by id.
    fn get_note(&self, note_uuid: NoteId) -> RepoResult<Option<Note>>;
    /// Lists notes for one assignee in creation order.
    fn list_notes_by_assignee(&self, assignee: &str) -> RepoResult<Vec<Note>>;
    /// Hard-deletes one note. Returns whether a row was removed.
    fn delete_note(&self, note_uuid: NoteId) -> RepoResult<bool>;
}

/// SQLite-backed notes repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, "notes", &["note_uuid", "content", "assignee", "created_at"])?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, content: &str, assignee: &str) -> RepoResult<Note> {
        let note_uuid = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO notes (
                note_uuid,
                content,
                assignee
            ) VALUES (?1, ?2, ?3);",
            params![note_uuid.to_string(), content, assignee],
        )?;
        load_required_note(self.conn, note_uuid)
    }

    fn get_note(&self, note_uuid: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE note_uuid = ?1;"))?;
        let mut rows = stmt.query([note_uuid.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn list_notes_by_assignee(&self, assignee: &str) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL}
             WHERE assignee = ?1
             ORDER BY created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([assignee])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn delete_note(&self, note_uuid: NoteId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM notes WHERE note_uuid = ?1;",
            [note_uuid.to_string()],
        )?;
        Ok(changed > 0)
    }
}

fn load_required_note(conn: &Connection, note_uuid: NoteId) -> RepoResult<Note> {
    let mut stmt = conn.prepare(&format!("{NOTE_SELECT_SQL} WHERE note_uuid = ?1;"))?;
    let mut rows = stmt.query([note_uuid.to_string()])?;
    if let Some(row) = rows.next()? {
        return parse_note_row(row);
    }
    Err(RepoError::NotFound(note_uuid))
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let uuid_text: String = row.get("note_uuid")?;
    Ok(Note {
        note_uuid: parse_uuid(&uuid_text, "notes.note_uuid")?,
        content: row.get("content")?,
        assignee: row.get("assignee")?,
        created_at: row.get("created_at")?,
    })
}
