//! Derived read-only boards: Gantt chart, team clipboard, project overview.

use std::any::Any;
use std::rc::Rc;

use anyhow::Result;
use planboard_core::{
    build_clipboard, build_gantt, build_overview, ClipboardColumn, TaskId, TaskListQuery,
};

use super::page_helpers::{get_column_string, parse_indexed_command};
use super::Page;
use crate::actions::Action;
use crate::board::Board;

/// Timeline rows for every task and project.
pub struct GanttPage {
    pub db: Rc<Board>,
}

impl Page for GanttPage {
    fn draw_page(&self) -> Result<()> {
        let projects = self.db.projects()?;
        let rows = build_gantt(
            &projects.list_projects()?,
            &projects.list_all_subfolders()?,
            &self.db.tasks()?.list_tasks(&TaskListQuery::default())?,
        );

        println!("--------------------------- GANTT CHART ---------------------------");
        println!("            label             |   start    |    end     | category");
        if rows.is_empty() {
            println!("nothing to show");
        }
        for row in &rows {
            println!(
                "{} | {} | {} | {}",
                get_column_string(&row.label, 29),
                row.start,
                row.end,
                row.category,
            );
        }

        println!();
        println!("[p] previous");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        match input.trim() {
            "p" => Ok(Some(Action::NavigateToPreviousPage)),
            _ => Ok(None),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Per-assignee columns of unfinished, unarchived tasks.
pub struct ClipboardPage {
    pub db: Rc<Board>,
}

impl ClipboardPage {
    fn columns(&self) -> Result<Vec<ClipboardColumn>> {
        let subfolders = self.db.projects()?.list_all_subfolders()?;
        let visible = self.db.tasks()?.clipboard_tasks()?;
        Ok(build_clipboard(&subfolders, &visible))
    }

    /// Card ids in draw order, for index resolution.
    fn card_ids(columns: &[ClipboardColumn]) -> Vec<TaskId> {
        columns
            .iter()
            .flat_map(|column| column.cards.iter().map(|card| card.task_uuid))
            .collect()
    }
}

impl Page for ClipboardPage {
    fn draw_page(&self) -> Result<()> {
        let columns = self.columns()?;

        println!("-------------------------- TEAM CLIPBOARD --------------------------");
        if columns.is_empty() {
            println!("nothing to show");
        }
        let mut next_card = 1;
        for column in &columns {
            println!("======= {} =======", column.assignee);
            for card in &column.cards {
                println!(
                    "[{next_card}] {} ({}) {} .. {} [{}]",
                    card.name,
                    card.subfolder_name,
                    card.start_date,
                    card.end_date,
                    card.status.label(),
                );
                next_card += 1;
            }
            println!();
        }

        println!("[p] previous | [u :card:] update status | [a :card:] archive");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        if input.trim() == "p" {
            return Ok(Some(Action::NavigateToPreviousPage));
        }
        if let Some((command, index)) = parse_indexed_command(input) {
            let columns = self.columns()?;
            if let Some(task_uuid) = Self::card_ids(&columns).get(index).copied() {
                return Ok(match command {
                    'u' => Some(Action::UpdateTaskStatus { task_uuid }),
                    'a' => Some(Action::ArchiveTask { task_uuid }),
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

/// Read-only tree of every project, subfolder and task.
pub struct OverviewPage {
    pub db: Rc<Board>,
}

impl Page for OverviewPage {
    fn draw_page(&self) -> Result<()> {
        let projects = self.db.projects()?;
        let overview = build_overview(
            &projects.list_projects()?,
            &projects.list_all_subfolders()?,
            &self.db.tasks()?.list_tasks(&TaskListQuery::default())?,
        );

        println!("------------------------- PROJECT OVERVIEW -------------------------");
        if overview.is_empty() {
            println!("nothing to show");
        }
        for project_view in &overview {
            let project = &project_view.project;
            println!(
                "{} ({} .. {})",
                project.name, project.start_date, project.end_date
            );
            for folder_view in &project_view.subfolders {
                println!("  {}", folder_view.subfolder.name);
                for task in &folder_view.tasks {
                    println!(
                        "    - {} | {} | {} .. {} | {}{}",
                        task.name,
                        task.assignee,
                        task.start_date,
                        task.end_date,
                        task.status.label(),
                        if task.archived { " (archived)" } else { "" },
                    );
                }
            }
        }

        println!();
        println!("[p] previous");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        match input.trim() {
            "p" => Ok(Some(Action::NavigateToPreviousPage)),
            _ => Ok(None),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
