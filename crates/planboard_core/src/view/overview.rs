//! Nested project overview.
//!
//! # Responsibility
//! - Assemble the project → subfolder → task summary tree.
//!
//! # Invariants
//! - Every project appears, with or without subfolders; every subfolder
//!   appears, with or without tasks.
//! - All tasks are listed, archived and finished ones included; filtering
//!   is the clipboard's concern, not the overview's.

use crate::model::project::{Project, Subfolder};
use crate::model::task::Task;

/// One subfolder with all of its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubfolderOverview {
    /// The subfolder row.
    pub subfolder: Subfolder,
    /// All tasks in the subfolder, insertion order.
    pub tasks: Vec<Task>,
}

/// One project with its nested subfolders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOverview {
    /// The project row.
    pub project: Project,
    /// Subfolders in insertion order.
    pub subfolders: Vec<SubfolderOverview>,
}

/// Builds the nested overview from flat query results.
pub fn build_overview(
    projects: &[Project],
    subfolders: &[Subfolder],
    tasks: &[Task],
) -> Vec<ProjectOverview> {
    projects
        .iter()
        .map(|project| ProjectOverview {
            project: project.clone(),
            subfolders: subfolders
                .iter()
                .filter(|folder| folder.project_uuid == project.project_uuid)
                .map(|folder| SubfolderOverview {
                    subfolder: folder.clone(),
                    tasks: tasks
                        .iter()
                        .filter(|task| task.subfolder_uuid == folder.subfolder_uuid)
                        .cloned()
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
