//! Task repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and clipboard/archive state transitions for tasks.
//! - Keep status token mapping inside the persistence boundary.
//!
//! # Invariants
//! - Status is stored as a snake_case token; unknown tokens are rejected on
//!   read instead of being masked.
//! - `archive_task` retains the row: it only clears clipboard visibility and
//!   sets the archived marker.
//! - Listings are deterministic: `created_at ASC, rowid ASC`.

use crate::model::project::SubfolderId;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::{ensure_schema_ready, parse_flag, parse_uuid, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT
    task_uuid,
    subfolder_uuid,
    name,
    assignee,
    start_date,
    end_date,
    status,
    archived,
    visible_in_clipboard,
    created_at,
    updated_at
FROM tasks";

/// Query options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListQuery {
    /// Restrict to one subfolder.
    pub subfolder_uuid: Option<SubfolderId>,
    /// Restrict to one assignee (exact match on the raw string).
    pub assignee: Option<String>,
    /// Only rows with `visible_in_clipboard = 1` (the team clipboard filter).
    pub visible_only: bool,
}

/// Repository interface for task operations.
pub trait TaskRepository {
    /// Creates one task and returns the persisted row.
    fn create_task(
        &self,
        subfolder_uuid: SubfolderId,
        name: &str,
        assignee: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: TaskStatus,
    ) -> RepoResult<Task>;
    /// Loads one task by id.
    fn get_task(&self, task_uuid: TaskId) -> RepoResult<Option<Task>>;
    /// Lists tasks using filter options.
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    /// Hard-deletes one task. Returns whether a row was removed.
    fn delete_task(&self, task_uuid: TaskId) -> RepoResult<bool>;
    /// Archives one task: clears clipboard visibility, keeps the row.
    /// Returns whether a row was updated.
    fn archive_task(&self, task_uuid: TaskId) -> RepoResult<bool>;
    /// Sets status and clipboard visibility in one statement.
    /// Returns whether a row was updated.
    fn set_task_status(
        &self,
        task_uuid: TaskId,
        status: TaskStatus,
        visible_in_clipboard: bool,
    ) -> RepoResult<bool>;
    /// Distinct assignees across all tasks, sorted by name.
    fn list_assignees(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(
            conn,
            "tasks",
            &[
                "task_uuid",
                "subfolder_uuid",
                "name",
                "assignee",
                "start_date",
                "end_date",
                "status",
                "archived",
                "visible_in_clipboard",
                "created_at",
                "updated_at",
            ],
        )?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(
        &self,
        subfolder_uuid: SubfolderId,
        name: &str,
        assignee: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: TaskStatus,
    ) -> RepoResult<Task> {
        let task_uuid = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO tasks (
                task_uuid,
                subfolder_uuid,
                name,
                assignee,
                start_date,
                end_date,
                status,
                visible_in_clipboard
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                task_uuid.to_string(),
                subfolder_uuid.to_string(),
                name,
                assignee,
                start_date,
                end_date,
                task_status_to_db(status),
                flag_to_int(status.clipboard_visible()),
            ],
        )?;
        load_required_task(self.conn, task_uuid)
    }

    fn get_task(&self, task_uuid: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE task_uuid = ?1;"))?;
        let mut rows = stmt.query([task_uuid.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }
        Ok(None)
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = format!("{TASK_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(subfolder_uuid) = query.subfolder_uuid {
            sql.push_str(" AND subfolder_uuid = ?");
            bind_values.push(Value::Text(subfolder_uuid.to_string()));
        }

        if let Some(assignee) = query.assignee.as_ref() {
            sql.push_str(" AND assignee = ?");
            bind_values.push(Value::Text(assignee.clone()));
        }

        if query.visible_only {
            sql.push_str(" AND visible_in_clipboard = 1");
        }

        sql.push_str(" ORDER BY created_at ASC, rowid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn delete_task(&self, task_uuid: TaskId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM tasks WHERE task_uuid = ?1;",
            [task_uuid.to_string()],
        )?;
        Ok(changed > 0)
    }

    fn archive_task(&self, task_uuid: TaskId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                archived = 1,
                visible_in_clipboard = 0,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE task_uuid = ?1;",
            [task_uuid.to_string()],
        )?;
        Ok(changed > 0)
    }

    fn set_task_status(
        &self,
        task_uuid: TaskId,
        status: TaskStatus,
        visible_in_clipboard: bool,
    ) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                status = ?2,
                visible_in_clipboard = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE task_uuid = ?1;",
            params![
                task_uuid.to_string(),
                task_status_to_db(status),
                flag_to_int(visible_in_clipboard),
            ],
        )?;
        Ok(changed > 0)
    }

    fn list_assignees(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT assignee FROM tasks ORDER BY assignee ASC;")?;
        let mut rows = stmt.query([])?;
        let mut assignees = Vec::new();
        while let Some(row) = rows.next()? {
            assignees.push(row.get::<_, String>(0)?);
        }
        Ok(assignees)
    }
}

fn load_required_task(conn: &Connection, task_uuid: TaskId) -> RepoResult<Task> {
    let mut stmt = conn.prepare(&format!("{TASK_SELECT_SQL} WHERE task_uuid = ?1;"))?;
    let mut rows = stmt.query([task_uuid.to_string()])?;
    if let Some(row) = rows.next()? {
        return parse_task_row(row);
    }
    Err(RepoError::NotFound(task_uuid))
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("task_uuid")?;
    let subfolder_text: String = row.get("subfolder_uuid")?;

    let status_text: String = row.get("status")?;
    let status = parse_task_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid task status `{status_text}` in tasks.status"))
    })?;

    Ok(Task {
        task_uuid: parse_uuid(&uuid_text, "tasks.task_uuid")?,
        subfolder_uuid: parse_uuid(&subfolder_text, "tasks.subfolder_uuid")?,
        name: row.get("name")?,
        assignee: row.get("assignee")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        status,
        archived: parse_flag(row.get("archived")?, "tasks.archived")?,
        visible_in_clipboard: parse_flag(
            row.get("visible_in_clipboard")?,
            "tasks.visible_in_clipboard",
        )?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn task_status_to_db(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::ToStart => "to_start",
        TaskStatus::Working => "working",
        TaskStatus::Stuck => "stuck",
        TaskStatus::Finished => "finished",
    }
}

fn parse_task_status(value: &str) -> Option<TaskStatus> {
    match value {
        "to_start" => Some(TaskStatus::ToStart),
        "working" => Some(TaskStatus::Working),
        "stuck" => Some(TaskStatus::Stuck),
        "finished" => Some(TaskStatus::Finished),
        _ => None,
    }
}

fn flag_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
