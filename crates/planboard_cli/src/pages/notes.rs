//! Notes board page, one section per task assignee.

use std::any::Any;
use std::rc::Rc;

use anyhow::Result;
use planboard_core::Note;

use super::page_helpers::{format_epoch_ms, parse_indexed_command};
use super::Page;
use crate::actions::Action;
use crate::board::Board;

/// Free-text notes grouped by the assignees known from the task table.
pub struct NotesPage {
    pub db: Rc<Board>,
}

impl NotesPage {
    fn listing(&self) -> Result<(Vec<String>, Vec<Note>)> {
        let assignees = self.db.tasks()?.list_assignees()?;
        let service = self.db.notes()?;
        let mut notes = Vec::new();
        for assignee in &assignees {
            notes.extend(service.list_notes_by_assignee(assignee)?);
        }
        Ok((assignees, notes))
    }
}

impl Page for NotesPage {
    fn draw_page(&self) -> Result<()> {
        let (assignees, notes) = self.listing()?;

        println!("----------------------------- NOTES ------------------------------");
        if assignees.is_empty() {
            println!("nothing to show");
        }
        let mut next_note = 1;
        for assignee in &assignees {
            println!("======= {assignee} =======");
            for note in notes.iter().filter(|note| &note.assignee == assignee) {
                println!(
                    "[{next_note}] {} ({})",
                    note.content,
                    format_epoch_ms(note.created_at)
                );
                next_note += 1;
            }
            println!();
        }

        println!("[p] previous | [c] create note | [d :note:] delete note");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        match input.trim() {
            "p" => Ok(Some(Action::NavigateToPreviousPage)),
            "c" => Ok(Some(Action::CreateNote)),
            other => {
                if let Some(('d', index)) = parse_indexed_command(other) {
                    let (_, notes) = self.listing()?;
                    if let Some(note) = notes.get(index) {
                        return Ok(Some(Action::DeleteNote {
                            note_uuid: note.note_uuid,
                        }));
                    }
                }
                Ok(None)
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use planboard_core::Note;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    fn seeded_board() -> (Rc<Board>, Note) {
        let db = Rc::new(Board::open_in_memory().unwrap());
        let projects = db.projects().unwrap();
        let project = projects
            .create_project("Launch", "", date("2024-01-01"), date("2024-02-01"))
            .unwrap();
        let folder = projects
            .create_subfolder(project.project_uuid, "Design")
            .unwrap();
        db.tasks()
            .unwrap()
            .create_task(
                folder.subfolder_uuid,
                "Wireframe",
                "Alice",
                date("2024-01-02"),
                date("2024-01-09"),
            )
            .unwrap();
        let note = db
            .notes()
            .unwrap()
            .create_note("remember the retro", "Alice")
            .unwrap();
        (db, note)
    }

    #[test]
    fn draw_page_should_not_throw_error() {
        let (db, _) = seeded_board();
        assert!(NotesPage { db }.draw_page().is_ok());
    }

    #[test]
    fn draw_page_works_on_an_empty_board() {
        let db = Rc::new(Board::open_in_memory().unwrap());
        assert!(NotesPage { db }.draw_page().is_ok());
    }

    #[test]
    fn handle_input_should_return_the_correct_actions() {
        let (db, note) = seeded_board();
        let page = NotesPage { db };

        assert_eq!(
            page.handle_input("p").unwrap(),
            Some(Action::NavigateToPreviousPage)
        );
        assert_eq!(page.handle_input("c").unwrap(), Some(Action::CreateNote));
        assert_eq!(
            page.handle_input("d 1").unwrap(),
            Some(Action::DeleteNote {
                note_uuid: note.note_uuid
            })
        );
        assert_eq!(page.handle_input("d 2").unwrap(), None);
        assert_eq!(page.handle_input("junk").unwrap(), None);
    }
}
