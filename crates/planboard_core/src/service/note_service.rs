//! Notes board use-case service.
//!
//! # Responsibility
//! - Provide create/list/delete entry points for the notes board.
//!
//! # Invariants
//! - The note timestamp is server-assigned; callers never supply it.
//! - Per-assignee listing preserves creation order.
//! - Deleting an absent note is a silent no-op.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoResult;
use log::debug;

/// Use-case service facade for the notes board.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves one note for an assignee.
    pub fn create_note(
        &self,
        content: impl Into<String>,
        assignee: impl Into<String>,
    ) -> RepoResult<Note> {
        let content = content.into();
        let assignee = assignee.into();
        self.repo.create_note(content.as_str(), assignee.trim())
    }

    /// Loads one note by id.
    pub fn get_note(&self, note_uuid: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get_note(note_uuid)
    }

    /// Lists notes for one assignee in creation order.
    pub fn list_notes_by_assignee(&self, assignee: &str) -> RepoResult<Vec<Note>> {
        self.repo.list_notes_by_assignee(assignee)
    }

    /// Deletes one note. Absent ids are a silent no-op.
    pub fn delete_note(&self, note_uuid: NoteId) -> RepoResult<()> {
        let removed = self.repo.delete_note(note_uuid)?;
        if !removed {
            debug!("event=note_delete module=service status=noop note_uuid={note_uuid}");
        }
        Ok(())
    }
}
