//! Page stack and action dispatch.
//!
//! # Responsibility
//! - Keep the stack of open pages; the top one is drawn.
//! - Execute actions against the board, prompting for any missing input.
//!
//! # Invariants
//! - An empty page stack means the app exits.
//! - Destructive deletes are confirmed; archiving is not.

use std::rc::Rc;

use anyhow::Result;
use planboard_core::TaskDeleteMode;

use crate::actions::{Action, View};
use crate::board::Board;
use crate::pages::{
    ClipboardPage, GanttPage, HomePage, NotesPage, OverviewPage, Page, ProjectsPage,
    SubfoldersPage, TasksPage,
};
use crate::prompts::Prompts;

pub struct Navigator {
    pages: Vec<Box<dyn Page>>,
    prompts: Prompts,
    db: Rc<Board>,
}

impl Navigator {
    pub fn new(db: Rc<Board>) -> Self {
        Self {
            pages: vec![Box::new(HomePage)],
            prompts: Prompts::new(),
            db,
        }
    }

    pub fn get_current_page(&self) -> Option<&dyn Page> {
        self.pages.last().map(|page| page.as_ref())
    }

    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::NavigateTo(view) => {
                let page = self.page_for(view);
                self.pages.push(page);
            }
            Action::NavigateToPreviousPage => {
                self.pages.pop();
            }
            Action::Exit => self.pages.clear(),
            Action::CreateProject => {
                let draft = (self.prompts.create_project)();
                self.db.projects()?.create_project(
                    draft.name,
                    draft.description,
                    draft.start_date,
                    draft.end_date,
                )?;
            }
            Action::DeleteProject { project_uuid } => {
                if (self.prompts.confirm_delete)() {
                    self.db.projects()?.delete_project(project_uuid)?;
                }
            }
            Action::CreateSubfolder { project_uuid } => {
                let name = (self.prompts.subfolder_name)();
                self.db.projects()?.create_subfolder(project_uuid, name)?;
            }
            Action::DeleteSubfolder { subfolder_uuid } => {
                if (self.prompts.confirm_delete)() {
                    self.db.projects()?.delete_subfolder(subfolder_uuid)?;
                }
            }
            Action::CreateTask { subfolder_uuid } => {
                let draft = (self.prompts.create_task)();
                self.db.tasks()?.create_task(
                    subfolder_uuid,
                    draft.name,
                    draft.assignee,
                    draft.start_date,
                    draft.end_date,
                )?;
            }
            Action::DeleteTask { task_uuid } => {
                if (self.prompts.confirm_delete)() {
                    self.db
                        .tasks()?
                        .delete_task(task_uuid, TaskDeleteMode::HardDelete)?;
                }
            }
            Action::ArchiveTask { task_uuid } => {
                self.db
                    .tasks()?
                    .delete_task(task_uuid, TaskDeleteMode::Archive)?;
            }
            Action::UpdateTaskStatus { task_uuid } => {
                if let Some(status) = (self.prompts.select_status)() {
                    self.db.tasks()?.update_status(task_uuid, status)?;
                }
            }
            Action::CreateNote => {
                let draft = (self.prompts.create_note)();
                self.db.notes()?.create_note(draft.content, draft.assignee)?;
            }
            Action::DeleteNote { note_uuid } => {
                if (self.prompts.confirm_delete)() {
                    self.db.notes()?.delete_note(note_uuid)?;
                }
            }
        }
        Ok(())
    }

    fn page_for(&self, view: View) -> Box<dyn Page> {
        let db = Rc::clone(&self.db);
        match view {
            View::Projects => Box::new(ProjectsPage { db }),
            View::Subfolders => Box::new(SubfoldersPage { db }),
            View::Tasks => Box::new(TasksPage { db }),
            View::Gantt => Box::new(GanttPage { db }),
            View::Clipboard => Box::new(ClipboardPage { db }),
            View::Overview => Box::new(OverviewPage { db }),
            View::Notes => Box::new(NotesPage { db }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{NoteDraft, ProjectDraft, TaskDraft};
    use chrono::NaiveDate;
    use planboard_core::TaskStatus;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    fn navigator() -> Navigator {
        Navigator::new(Rc::new(Board::open_in_memory().unwrap()))
    }

    #[test]
    fn should_start_on_home_page() {
        let nav = navigator();
        let page = nav.get_current_page().unwrap();
        assert!(page.as_any().downcast_ref::<HomePage>().is_some());
    }

    #[test]
    fn handle_action_should_navigate_pages() {
        let mut nav = navigator();

        nav.handle_action(Action::NavigateTo(View::Projects)).unwrap();
        let page = nav.get_current_page().unwrap();
        assert!(page.as_any().downcast_ref::<ProjectsPage>().is_some());

        nav.handle_action(Action::NavigateTo(View::Clipboard)).unwrap();
        let page = nav.get_current_page().unwrap();
        assert!(page.as_any().downcast_ref::<ClipboardPage>().is_some());

        nav.handle_action(Action::NavigateToPreviousPage).unwrap();
        let page = nav.get_current_page().unwrap();
        assert!(page.as_any().downcast_ref::<ProjectsPage>().is_some());

        nav.handle_action(Action::Exit).unwrap();
        assert!(nav.get_current_page().is_none());
    }

    #[test]
    fn popping_past_the_home_page_leaves_an_empty_stack() {
        let mut nav = navigator();
        nav.handle_action(Action::NavigateToPreviousPage).unwrap();
        assert!(nav.get_current_page().is_none());
    }

    #[test]
    fn create_actions_write_through_to_the_board() {
        let mut nav = navigator();
        nav.prompts.create_project = Box::new(|| ProjectDraft {
            name: "Launch".to_string(),
            description: String::new(),
            start_date: date("2024-01-01"),
            end_date: date("2024-02-01"),
        });
        nav.prompts.subfolder_name = Box::new(|| "Design".to_string());
        nav.prompts.create_task = Box::new(|| TaskDraft {
            name: "Wireframe".to_string(),
            assignee: "Alice".to_string(),
            start_date: date("2024-01-02"),
            end_date: date("2024-01-09"),
        });
        nav.prompts.create_note = Box::new(|| NoteDraft {
            assignee: "Alice".to_string(),
            content: "remember the retro".to_string(),
        });

        nav.handle_action(Action::CreateProject).unwrap();
        let project = nav.db.projects().unwrap().list_projects().unwrap()[0].clone();

        nav.handle_action(Action::CreateSubfolder {
            project_uuid: project.project_uuid,
        })
        .unwrap();
        let folder = nav.db.projects().unwrap().list_all_subfolders().unwrap()[0].clone();

        nav.handle_action(Action::CreateTask {
            subfolder_uuid: folder.subfolder_uuid,
        })
        .unwrap();
        nav.handle_action(Action::CreateNote).unwrap();

        let tasks = nav.db.tasks().unwrap().clipboard_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Wireframe");
        let notes = nav
            .db
            .notes()
            .unwrap()
            .list_notes_by_assignee("Alice")
            .unwrap();
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn status_and_archive_actions_write_through_to_the_board() {
        let mut nav = navigator();
        let projects = nav.db.projects().unwrap();
        let project = projects
            .create_project("Launch", "", date("2024-01-01"), date("2024-02-01"))
            .unwrap();
        let folder = projects
            .create_subfolder(project.project_uuid, "Design")
            .unwrap();
        let task = nav
            .db
            .tasks()
            .unwrap()
            .create_task(
                folder.subfolder_uuid,
                "Wireframe",
                "Alice",
                date("2024-01-02"),
                date("2024-01-09"),
            )
            .unwrap();

        nav.prompts.select_status = Box::new(|| Some(TaskStatus::Finished));
        nav.handle_action(Action::UpdateTaskStatus {
            task_uuid: task.task_uuid,
        })
        .unwrap();
        let loaded = nav.db.tasks().unwrap().get_task(task.task_uuid).unwrap().unwrap();
        assert_eq!(loaded.status, TaskStatus::Finished);
        assert!(!loaded.visible_in_clipboard);

        nav.handle_action(Action::ArchiveTask {
            task_uuid: task.task_uuid,
        })
        .unwrap();
        let loaded = nav.db.tasks().unwrap().get_task(task.task_uuid).unwrap().unwrap();
        assert!(loaded.archived);
    }

    #[test]
    fn declined_confirmation_leaves_the_row_in_place() {
        let mut nav = navigator();
        let projects = nav.db.projects().unwrap();
        projects
            .create_project("Keep", "", date("2024-01-01"), date("2024-02-01"))
            .unwrap();
        let project_uuid = projects.list_projects().unwrap()[0].project_uuid;

        nav.prompts.confirm_delete = Box::new(|| false);
        nav.handle_action(Action::DeleteProject { project_uuid }).unwrap();
        assert_eq!(nav.db.projects().unwrap().list_projects().unwrap().len(), 1);

        nav.prompts.confirm_delete = Box::new(|| true);
        nav.handle_action(Action::DeleteProject { project_uuid }).unwrap();
        assert!(nav.db.projects().unwrap().list_projects().unwrap().is_empty());
    }
}
