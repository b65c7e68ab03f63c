//! Task page: full task table plus the create/archive/delete/status commands.

use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use planboard_core::{Subfolder, Task, TaskListQuery};

use super::page_helpers::{get_column_string, parse_indexed_command};
use super::Page;
use crate::actions::Action;
use crate::board::Board;

/// Every task on the board, archived ones included.
pub struct TasksPage {
    pub db: Rc<Board>,
}

impl TasksPage {
    fn subfolders(&self) -> Result<Vec<Subfolder>> {
        Ok(self.db.projects()?.list_all_subfolders()?)
    }

    fn tasks(&self) -> Result<Vec<Task>> {
        Ok(self.db.tasks()?.list_tasks(&TaskListQuery::default())?)
    }
}

impl Page for TasksPage {
    fn draw_page(&self) -> Result<()> {
        let subfolders = self.subfolders()?;
        let tasks = self.tasks()?;
        let folder_names: HashMap<_, _> = subfolders
            .iter()
            .map(|folder| (folder.subfolder_uuid, folder.name.as_str()))
            .collect();

        println!("--------------------------- SUBFOLDERS ---------------------------");
        if subfolders.is_empty() {
            println!("nothing to show");
        }
        for (pos, folder) in subfolders.iter().enumerate() {
            println!("[{}] {}", pos + 1, folder.name);
        }

        println!();
        println!("----------------------------- TASKS ------------------------------");
        println!("  #  |       name       |   subfolder   | assignee |   start    |    end     |  status  | archived");
        if tasks.is_empty() {
            println!("nothing to show");
        }
        for (pos, task) in tasks.iter().enumerate() {
            let folder_name = folder_names
                .get(&task.subfolder_uuid)
                .copied()
                .unwrap_or_default();
            println!(
                "{} | {} | {} | {} | {} | {} | {} | {}",
                get_column_string(&(pos + 1).to_string(), 4),
                get_column_string(&task.name, 16),
                get_column_string(folder_name, 13),
                get_column_string(&task.assignee, 8),
                task.start_date,
                task.end_date,
                get_column_string(task.status.label(), 8),
                if task.archived { "yes" } else { "" },
            );
        }

        println!();
        println!("[p] previous | [c :subfolder:] create task | [u :task:] update status");
        println!("[a :task:] archive task | [d :task:] delete task");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        if input.trim() == "p" {
            return Ok(Some(Action::NavigateToPreviousPage));
        }
        if let Some((command, index)) = parse_indexed_command(input) {
            if command == 'c' {
                if let Some(folder) = self.subfolders()?.get(index) {
                    return Ok(Some(Action::CreateTask {
                        subfolder_uuid: folder.subfolder_uuid,
                    }));
                }
                return Ok(None);
            }
            if let Some(task) = self.tasks()?.get(index) {
                let task_uuid = task.task_uuid;
                return Ok(match command {
                    'u' => Some(Action::UpdateTaskStatus { task_uuid }),
                    'a' => Some(Action::ArchiveTask { task_uuid }),
                    'd' => Some(Action::DeleteTask { task_uuid }),
                    _ => None,
                });
            }
        }
        Ok(None)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
