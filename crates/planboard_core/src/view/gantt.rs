//! Gantt timeline rows.
//!
//! # Responsibility
//! - Build the flat timeline dataframe: one row per task, one row per
//!   project, concatenated in that order.
//!
//! # Invariants
//! - Task rows are labeled `"{subfolder} - {task}"` with the assignee as
//!   color category; project rows use the literal `Project` category.
//! - No tasks means no timeline at all: project rows only appear alongside
//!   at least one task row.

use crate::model::project::{Project, Subfolder};
use crate::model::task::Task;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Literal color category for project rows.
pub const PROJECT_CATEGORY: &str = "Project";

/// One horizontal bar on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttRow {
    /// Row label on the y axis.
    pub label: String,
    /// Bar start.
    pub start: NaiveDate,
    /// Bar end.
    pub end: NaiveDate,
    /// Color category: the assignee for tasks, `Project` for projects.
    pub category: String,
}

/// Builds timeline rows from all tasks followed by all projects.
///
/// Returns no rows when there are no tasks, even if projects exist; the
/// chart only makes sense once there is at least one task to plot.
/// Tasks whose subfolder is missing from `subfolders` keep a bare label;
/// with foreign keys on this only happens on inconsistent input.
pub fn build_gantt(projects: &[Project], subfolders: &[Subfolder], tasks: &[Task]) -> Vec<GanttRow> {
    if tasks.is_empty() {
        return Vec::new();
    }

    let folder_names: HashMap<_, _> = subfolders
        .iter()
        .map(|folder| (folder.subfolder_uuid, folder.name.as_str()))
        .collect();

    let mut rows = Vec::with_capacity(tasks.len() + projects.len());
    for task in tasks {
        let label = match folder_names.get(&task.subfolder_uuid) {
            Some(folder_name) => format!("{folder_name} - {}", task.name),
            None => task.name.clone(),
        };
        rows.push(GanttRow {
            label,
            start: task.start_date,
            end: task.end_date,
            category: task.assignee.clone(),
        });
    }

    for project in projects {
        rows.push(GanttRow {
            label: project.name.clone(),
            start: project.start_date,
            end: project.end_date,
            category: PROJECT_CATEGORY.to_string(),
        });
    }

    rows
}
