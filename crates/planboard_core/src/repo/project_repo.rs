//! Project/subfolder repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for the project → subfolder hierarchy.
//! - Keep SQL details and cascade behavior inside the repository boundary.
//!
//! # Invariants
//! - Listings are deterministic: `created_at ASC, rowid ASC` (insertion order).
//! - Deleting a project removes its subfolders and their tasks via
//!   `ON DELETE CASCADE`; the connection must have `foreign_keys=ON`.

use crate::model::project::{Project, ProjectId, Subfolder, SubfolderId};
use crate::repo::{ensure_schema_ready, parse_uuid, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const PROJECT_SELECT_SQL: &str = "SELECT
    project_uuid,
    name,
    description,
    start_date,
    end_date,
    created_at,
    updated_at
FROM projects";

const SUBFOLDER_SELECT_SQL: &str = "SELECT
    subfolder_uuid,
    project_uuid,
    name,
    created_at,
    updated_at
FROM subfolders";

/// Repository interface for project and subfolder operations.
pub trait ProjectRepository {
    /// Creates one project and returns the persisted row.
    fn create_project(
        &self,
        name: &str,
        description: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepoResult<Project>;
    /// Loads one project by id.
    fn get_project(&self, project_uuid: ProjectId) -> RepoResult<Option<Project>>;
    /// Lists all projects in insertion order.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    /// Hard-deletes one project, cascading to subfolders and tasks.
    /// Returns whether a row was removed.
    fn delete_project(&self, project_uuid: ProjectId) -> RepoResult<bool>;
    /// Creates one subfolder under an existing project.
    fn create_subfolder(&self, project_uuid: ProjectId, name: &str) -> RepoResult<Subfolder>;
    /// Loads one subfolder by id.
    fn get_subfolder(&self, subfolder_uuid: SubfolderId) -> RepoResult<Option<Subfolder>>;
    /// Lists subfolders of one project in insertion order.
    fn list_subfolders(&self, project_uuid: ProjectId) -> RepoResult<Vec<Subfolder>>;
    /// Lists all subfolders across projects in insertion order.
    fn list_all_subfolders(&self) -> RepoResult<Vec<Subfolder>>;
    /// Hard-deletes one subfolder, cascading to its tasks.
    /// Returns whether a row was removed.
    fn delete_subfolder(&self, subfolder_uuid: SubfolderId) -> RepoResult<bool>;
}

/// SQLite-backed project/subfolder repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(
            conn,
            "projects",
            &[
                "project_uuid",
                "name",
                "description",
                "start_date",
                "end_date",
                "created_at",
                "updated_at",
            ],
        )?;
        ensure_schema_ready(
            conn,
            "subfolders",
            &["subfolder_uuid", "project_uuid", "name"],
        )?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(
        &self,
        name: &str,
        description: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepoResult<Project> {
        let project_uuid = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO projects (
                project_uuid,
                name,
                description,
                start_date,
                end_date
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                project_uuid.to_string(),
                name,
                description,
                start_date,
                end_date,
            ],
        )?;
        load_required_project(self.conn, project_uuid)
    }

    fn get_project(&self, project_uuid: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE project_uuid = ?1;"))?;
        let mut rows = stmt.query([project_uuid.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }
        Ok(None)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PROJECT_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }

    fn delete_project(&self, project_uuid: ProjectId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM projects WHERE project_uuid = ?1;",
            [project_uuid.to_string()],
        )?;
        Ok(changed > 0)
    }

    fn create_subfolder(&self, project_uuid: ProjectId, name: &str) -> RepoResult<Subfolder> {
        let subfolder_uuid = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO subfolders (
                subfolder_uuid,
                project_uuid,
                name
            ) VALUES (?1, ?2, ?3);",
            params![subfolder_uuid.to_string(), project_uuid.to_string(), name],
        )?;
        load_required_subfolder(self.conn, subfolder_uuid)
    }

    fn get_subfolder(&self, subfolder_uuid: SubfolderId) -> RepoResult<Option<Subfolder>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SUBFOLDER_SELECT_SQL} WHERE subfolder_uuid = ?1;"
        ))?;
        let mut rows = stmt.query([subfolder_uuid.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_subfolder_row(row)?));
        }
        Ok(None)
    }

    fn list_subfolders(&self, project_uuid: ProjectId) -> RepoResult<Vec<Subfolder>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SUBFOLDER_SELECT_SQL}
             WHERE project_uuid = ?1
             ORDER BY created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([project_uuid.to_string()])?;
        let mut subfolders = Vec::new();
        while let Some(row) = rows.next()? {
            subfolders.push(parse_subfolder_row(row)?);
        }
        Ok(subfolders)
    }

    fn list_all_subfolders(&self) -> RepoResult<Vec<Subfolder>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SUBFOLDER_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut subfolders = Vec::new();
        while let Some(row) = rows.next()? {
            subfolders.push(parse_subfolder_row(row)?);
        }
        Ok(subfolders)
    }

    fn delete_subfolder(&self, subfolder_uuid: SubfolderId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM subfolders WHERE subfolder_uuid = ?1;",
            [subfolder_uuid.to_string()],
        )?;
        Ok(changed > 0)
    }
}

fn load_required_project(conn: &Connection, project_uuid: ProjectId) -> RepoResult<Project> {
    let mut stmt = conn.prepare(&format!("{PROJECT_SELECT_SQL} WHERE project_uuid = ?1;"))?;
    let mut rows = stmt.query([project_uuid.to_string()])?;
    if let Some(row) = rows.next()? {
        return parse_project_row(row);
    }
    Err(RepoError::NotFound(project_uuid))
}

fn load_required_subfolder(conn: &Connection, subfolder_uuid: SubfolderId) -> RepoResult<Subfolder> {
    let mut stmt = conn.prepare(&format!(
        "{SUBFOLDER_SELECT_SQL} WHERE subfolder_uuid = ?1;"
    ))?;
    let mut rows = stmt.query([subfolder_uuid.to_string()])?;
    if let Some(row) = rows.next()? {
        return parse_subfolder_row(row);
    }
    Err(RepoError::NotFound(subfolder_uuid))
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let uuid_text: String = row.get("project_uuid")?;
    Ok(Project {
        project_uuid: parse_uuid(&uuid_text, "projects.project_uuid")?,
        name: row.get("name")?,
        description: row.get("description")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_subfolder_row(row: &Row<'_>) -> RepoResult<Subfolder> {
    let uuid_text: String = row.get("subfolder_uuid")?;
    let project_text: String = row.get("project_uuid")?;
    Ok(Subfolder {
        subfolder_uuid: parse_uuid(&uuid_text, "subfolders.subfolder_uuid")?,
        project_uuid: parse_uuid(&project_text, "subfolders.project_uuid")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
