//! Interactive prompts used by the navigator.
//!
//! Each prompt is a boxed closure so tests can swap in canned values
//! without touching stdin.

use chrono::NaiveDate;
use planboard_core::TaskStatus;

use crate::io_utils::{prompt_date, prompt_line};

/// Fields gathered for a new project.
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Fields gathered for a new task.
pub struct TaskDraft {
    pub name: String,
    pub assignee: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Fields gathered for a new note.
pub struct NoteDraft {
    pub assignee: String,
    pub content: String,
}

pub struct Prompts {
    pub create_project: Box<dyn Fn() -> ProjectDraft>,
    pub subfolder_name: Box<dyn Fn() -> String>,
    pub create_task: Box<dyn Fn() -> TaskDraft>,
    pub create_note: Box<dyn Fn() -> NoteDraft>,
    pub select_status: Box<dyn Fn() -> Option<TaskStatus>>,
    pub confirm_delete: Box<dyn Fn() -> bool>,
}

impl Prompts {
    pub fn new() -> Self {
        Self {
            create_project: Box::new(create_project_prompt),
            subfolder_name: Box::new(|| prompt_line("Subfolder name:")),
            create_task: Box::new(create_task_prompt),
            create_note: Box::new(create_note_prompt),
            select_status: Box::new(select_status_prompt),
            confirm_delete: Box::new(confirm_delete_prompt),
        }
    }
}

impl Default for Prompts {
    fn default() -> Self {
        Self::new()
    }
}

fn create_project_prompt() -> ProjectDraft {
    ProjectDraft {
        name: prompt_line("Project name:"),
        description: prompt_line("Project description:"),
        start_date: prompt_date("Project start date"),
        end_date: prompt_date("Project end date"),
    }
}

fn create_task_prompt() -> TaskDraft {
    TaskDraft {
        name: prompt_line("Task name:"),
        assignee: prompt_line("Assignee:"),
        start_date: prompt_date("Task start date"),
        end_date: prompt_date("Task end date"),
    }
}

fn create_note_prompt() -> NoteDraft {
    NoteDraft {
        assignee: prompt_line("Assignee:"),
        content: prompt_line("Note content:"),
    }
}

fn select_status_prompt() -> Option<TaskStatus> {
    println!("Select status:");
    for (pos, status) in TaskStatus::ALL.iter().enumerate() {
        println!("[{}] {}", pos + 1, status.label());
    }
    prompt_line("")
        .parse::<usize>()
        .ok()
        .and_then(|pos| pos.checked_sub(1))
        .and_then(|pos| TaskStatus::ALL.get(pos).copied())
}

fn confirm_delete_prompt() -> bool {
    prompt_line("Confirm delete [y/n]:") == "y"
}
