//! Task use-case service.
//!
//! # Responsibility
//! - Provide create/list/delete/status-update entry points for tasks.
//! - Apply the status → clipboard-visibility policy on every status change.
//!
//! # Invariants
//! - New tasks start as `ToStart` and visible on the clipboard.
//! - Status updates recompute visibility: `Finished` hides, everything else
//!   shows. The `archived` marker is never touched by status updates.
//! - Deletes/updates on absent ids are silent no-ops.

use crate::model::project::SubfolderId;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::task_repo::{TaskListQuery, TaskRepository};
use crate::repo::RepoResult;
use chrono::NaiveDate;
use log::debug;

/// How a task leaves the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDeleteMode {
    /// Keep the row, clear clipboard visibility, set the archived marker.
    Archive,
    /// Remove the row entirely.
    HardDelete,
}

/// Use-case service facade for tasks.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one task with default status `ToStart`.
    ///
    /// The subfolder must exist; the foreign key rejects orphans.
    pub fn create_task(
        &self,
        subfolder_uuid: SubfolderId,
        name: impl Into<String>,
        assignee: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepoResult<Task> {
        let name = name.into();
        let assignee = assignee.into();
        self.repo.create_task(
            subfolder_uuid,
            name.trim(),
            assignee.trim(),
            start_date,
            end_date,
            TaskStatus::default(),
        )
    }

    /// Loads one task by id.
    pub fn get_task(&self, task_uuid: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(task_uuid)
    }

    /// Lists tasks using filter options.
    pub fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks(query)
    }

    /// Lists the tasks currently on the team clipboard.
    pub fn clipboard_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks(&TaskListQuery {
            visible_only: true,
            ..TaskListQuery::default()
        })
    }

    /// Deletes one task by mode. Absent ids are a silent no-op.
    pub fn delete_task(&self, task_uuid: TaskId, mode: TaskDeleteMode) -> RepoResult<()> {
        let changed = match mode {
            TaskDeleteMode::Archive => self.repo.archive_task(task_uuid)?,
            TaskDeleteMode::HardDelete => self.repo.delete_task(task_uuid)?,
        };
        if !changed {
            debug!("event=task_delete module=service status=noop task_uuid={task_uuid}");
        }
        Ok(())
    }

    /// Sets a new status and the clipboard visibility it implies.
    ///
    /// Absent ids are a silent no-op.
    pub fn update_status(&self, task_uuid: TaskId, status: TaskStatus) -> RepoResult<()> {
        let changed =
            self.repo
                .set_task_status(task_uuid, status, status.clipboard_visible())?;
        if !changed {
            debug!("event=task_status module=service status=noop task_uuid={task_uuid}");
        }
        Ok(())
    }

    /// Distinct assignees across all tasks, sorted by name.
    pub fn list_assignees(&self) -> RepoResult<Vec<String>> {
        self.repo.list_assignees()
    }
}
