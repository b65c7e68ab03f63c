//! Notes board read model.
//!
//! # Invariants
//! - `assignee` is free text and deliberately not a foreign key; the board
//!   groups notes by the raw string.
//! - Notes are hard-deleted, there is no archive state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note row.
pub type NoteId = Uuid;

/// Free-text note left for one assignee on the notes board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable note id.
    pub note_uuid: NoteId,
    /// Note body.
    pub content: String,
    /// Assignee grouping key, free text.
    pub assignee: String,
    /// Server-assigned epoch ms creation timestamp.
    pub created_at: i64,
}
