//! Team clipboard board.
//!
//! # Responsibility
//! - Group the currently visible tasks into one column per assignee.
//!
//! # Invariants
//! - Only tasks with `visible_in_clipboard = 1` belong here; callers are
//!   expected to pass the filtered clipboard query result.
//! - Column order is first-seen assignee order; card order follows input.

use crate::model::project::Subfolder;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::view::status::status_color;
use chrono::NaiveDate;
use std::collections::HashMap;

/// One card on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCard {
    /// Task id, used by update/archive actions on the board.
    pub task_uuid: TaskId,
    /// Task name.
    pub name: String,
    /// Name of the owning subfolder.
    pub subfolder_name: String,
    /// Planned start.
    pub start_date: NaiveDate,
    /// Planned end.
    pub end_date: NaiveDate,
    /// Current status.
    pub status: TaskStatus,
    /// Hex color derived from the status.
    pub color: &'static str,
}

/// One per-assignee column of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardColumn {
    /// Assignee heading.
    pub assignee: String,
    /// Cards in input order.
    pub cards: Vec<ClipboardCard>,
}

/// Groups visible tasks into per-assignee columns.
pub fn build_clipboard(subfolders: &[Subfolder], tasks: &[Task]) -> Vec<ClipboardColumn> {
    let folder_names: HashMap<_, _> = subfolders
        .iter()
        .map(|folder| (folder.subfolder_uuid, folder.name.as_str()))
        .collect();

    let mut columns: Vec<ClipboardColumn> = Vec::new();
    for task in tasks {
        let card = ClipboardCard {
            task_uuid: task.task_uuid,
            name: task.name.clone(),
            subfolder_name: folder_names
                .get(&task.subfolder_uuid)
                .map(|name| (*name).to_string())
                .unwrap_or_default(),
            start_date: task.start_date,
            end_date: task.end_date,
            status: task.status,
            color: status_color(task.status),
        };

        match columns
            .iter_mut()
            .find(|column| column.assignee == task.assignee)
        {
            Some(column) => column.cards.push(card),
            None => columns.push(ClipboardColumn {
                assignee: task.assignee.clone(),
                cards: vec![card],
            }),
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::build_clipboard;
    use crate::model::project::Subfolder;
    use crate::model::task::{Task, TaskStatus};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn task(assignee: &str, name: &str, subfolder: &Subfolder) -> Task {
        Task {
            task_uuid: Uuid::new_v4(),
            subfolder_uuid: subfolder.subfolder_uuid,
            name: name.to_string(),
            assignee: assignee.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            status: TaskStatus::Working,
            archived: false,
            visible_in_clipboard: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn one_column_per_assignee_in_first_seen_order() {
        let folder = Subfolder {
            subfolder_uuid: Uuid::new_v4(),
            project_uuid: Uuid::new_v4(),
            name: "Design".to_string(),
            created_at: 0,
            updated_at: 0,
        };
        let tasks = vec![
            task("Bob", "one", &folder),
            task("Alice", "two", &folder),
            task("Bob", "three", &folder),
        ];

        let columns = build_clipboard(std::slice::from_ref(&folder), &tasks);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].assignee, "Bob");
        assert_eq!(columns[0].cards.len(), 2);
        assert_eq!(columns[1].assignee, "Alice");
        assert_eq!(columns[0].cards[0].subfolder_name, "Design");
        assert_eq!(columns[0].cards[0].color, "#FFD700");
    }

    #[test]
    fn empty_input_yields_no_columns() {
        assert!(build_clipboard(&[], &[]).is_empty());
    }
}
