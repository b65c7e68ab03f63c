//! Shared database handle for the interactive board.
//!
//! # Responsibility
//! - Own the single process-wide SQLite connection.
//! - Hand out per-call service facades borrowing that connection.

use anyhow::Result;
use planboard_core::db::open_db;
use planboard_core::{
    NoteService, ProjectService, RepoResult, SqliteNoteRepository, SqliteProjectRepository,
    SqliteTaskRepository, TaskService,
};
use rusqlite::Connection;
use std::path::Path;

/// Single active session for the lifetime of the process.
pub struct Board {
    conn: Connection,
}

impl Board {
    /// Opens (and migrates) the board database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = open_db(path)?;
        Ok(Self { conn })
    }

    /// In-memory board used by tests.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = planboard_core::db::open_db_in_memory()?;
        Ok(Self { conn })
    }

    /// Project/subfolder use-cases.
    pub fn projects(&self) -> RepoResult<ProjectService<SqliteProjectRepository<'_>>> {
        Ok(ProjectService::new(SqliteProjectRepository::try_new(
            &self.conn,
        )?))
    }

    /// Task use-cases.
    pub fn tasks(&self) -> RepoResult<TaskService<SqliteTaskRepository<'_>>> {
        Ok(TaskService::new(SqliteTaskRepository::try_new(&self.conn)?))
    }

    /// Notes board use-cases.
    pub fn notes(&self) -> RepoResult<NoteService<SqliteNoteRepository<'_>>> {
        Ok(NoteService::new(SqliteNoteRepository::try_new(&self.conn)?))
    }
}
