//! Project/subfolder use-case service.
//!
//! # Responsibility
//! - Provide create/list/delete entry points for the hierarchy.
//! - Verify the parent project exists before creating a subfolder.
//!
//! # Invariants
//! - Deleting an absent id is a silent no-op (logged, never an error).
//! - Date ordering and name uniqueness are intentionally not validated.

use crate::model::project::{Project, ProjectId, Subfolder, SubfolderId};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::RepoError;
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from project/subfolder use-cases.
#[derive(Debug)]
pub enum ProjectServiceError {
    /// Parent project for a new subfolder does not exist.
    ProjectNotFound(ProjectId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProjectServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::ProjectNotFound(_) => None,
        }
    }
}

impl From<RepoError> for ProjectServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service facade for the project → subfolder hierarchy.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one project. Nothing beyond type shape is validated.
    pub fn create_project(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Project, ProjectServiceError> {
        let name = name.into();
        let description = description.into();
        let project = self
            .repo
            .create_project(name.trim(), description.trim(), start_date, end_date)?;
        debug!(
            "event=project_create module=service status=ok project_uuid={}",
            project.project_uuid
        );
        Ok(project)
    }

    /// Lists all projects in insertion order.
    pub fn list_projects(&self) -> Result<Vec<Project>, ProjectServiceError> {
        self.repo.list_projects().map_err(Into::into)
    }

    /// Loads one project by id.
    pub fn get_project(
        &self,
        project_uuid: ProjectId,
    ) -> Result<Option<Project>, ProjectServiceError> {
        self.repo.get_project(project_uuid).map_err(Into::into)
    }

    /// Deletes one project, cascading to subfolders and tasks.
    ///
    /// Absent ids are a silent no-op, matching the original board.
    pub fn delete_project(&self, project_uuid: ProjectId) -> Result<(), ProjectServiceError> {
        let removed = self.repo.delete_project(project_uuid)?;
        if !removed {
            debug!(
                "event=project_delete module=service status=noop project_uuid={project_uuid}"
            );
        }
        Ok(())
    }

    /// Creates one subfolder under an existing project.
    pub fn create_subfolder(
        &self,
        project_uuid: ProjectId,
        name: impl Into<String>,
    ) -> Result<Subfolder, ProjectServiceError> {
        if self.repo.get_project(project_uuid)?.is_none() {
            return Err(ProjectServiceError::ProjectNotFound(project_uuid));
        }
        let name = name.into();
        self.repo
            .create_subfolder(project_uuid, name.trim())
            .map_err(Into::into)
    }

    /// Lists subfolders of one project in insertion order.
    pub fn list_subfolders(
        &self,
        project_uuid: ProjectId,
    ) -> Result<Vec<Subfolder>, ProjectServiceError> {
        self.repo.list_subfolders(project_uuid).map_err(Into::into)
    }

    /// Lists all subfolders across projects.
    pub fn list_all_subfolders(&self) -> Result<Vec<Subfolder>, ProjectServiceError> {
        self.repo.list_all_subfolders().map_err(Into::into)
    }

    /// Loads one subfolder by id.
    pub fn get_subfolder(
        &self,
        subfolder_uuid: SubfolderId,
    ) -> Result<Option<Subfolder>, ProjectServiceError> {
        self.repo.get_subfolder(subfolder_uuid).map_err(Into::into)
    }

    /// Deletes one subfolder, cascading to its tasks. No-op when absent.
    pub fn delete_subfolder(&self, subfolder_uuid: SubfolderId) -> Result<(), ProjectServiceError> {
        let removed = self.repo.delete_subfolder(subfolder_uuid)?;
        if !removed {
            debug!(
                "event=subfolder_delete module=service status=noop subfolder_uuid={subfolder_uuid}"
            );
        }
        Ok(())
    }
}
