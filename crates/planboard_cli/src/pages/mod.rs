//! Interactive board pages.
//!
//! # Responsibility
//! - Draw each page of the board to stdout.
//! - Translate raw console input into [`Action`]s for the navigator.
//!
//! # Invariants
//! - `handle_input` never mutates state; every mutation goes through an
//!   [`Action`] handled by the navigator.
//! - Row numbers shown by `draw_page` and resolved by `handle_input` come
//!   from the same listing, so a number always targets the row it labeled.

use std::any::Any;

use anyhow::Result;

use crate::actions::{Action, View};

mod boards;
mod notes;
mod page_helpers;
mod projects;
mod tasks;

pub use boards::{ClipboardPage, GanttPage, OverviewPage};
pub use notes::NotesPage;
pub use projects::{ProjectsPage, SubfoldersPage};
pub use tasks::TasksPage;

pub trait Page {
    fn draw_page(&self) -> Result<()>;
    fn handle_input(&self, input: &str) -> Result<Option<Action>>;
    fn as_any(&self) -> &dyn Any;
}

/// Entry page listing the seven board views.
pub struct HomePage;

impl Page for HomePage {
    fn draw_page(&self) -> Result<()> {
        println!("---------------------------- PLANBOARD ----------------------------");
        println!("[1] Project page");
        println!("[2] SubFolder page");
        println!("[3] Task page");
        println!("[4] Gantt Chart");
        println!("[5] Team Clipboard");
        println!("[6] Project Overview");
        println!("[7] Notes");
        println!();
        println!("[q] quit | [:number:] open page");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        let action = match input.trim() {
            "q" => Some(Action::Exit),
            "1" => Some(Action::NavigateTo(View::Projects)),
            "2" => Some(Action::NavigateTo(View::Subfolders)),
            "3" => Some(Action::NavigateTo(View::Tasks)),
            "4" => Some(Action::NavigateTo(View::Gantt)),
            "5" => Some(Action::NavigateTo(View::Clipboard)),
            "6" => Some(Action::NavigateTo(View::Overview)),
            "7" => Some(Action::NavigateTo(View::Notes)),
            _ => None,
        };
        Ok(action)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod home_page {
        use super::*;

        #[test]
        fn draw_page_should_not_throw_error() {
            assert!(HomePage.draw_page().is_ok());
        }

        #[test]
        fn handle_input_should_return_the_correct_actions() {
            let page = HomePage;

            assert_eq!(page.handle_input("q").unwrap(), Some(Action::Exit));
            assert_eq!(
                page.handle_input("1").unwrap(),
                Some(Action::NavigateTo(View::Projects))
            );
            assert_eq!(
                page.handle_input("4\n").unwrap(),
                Some(Action::NavigateTo(View::Gantt))
            );
            assert_eq!(
                page.handle_input("7").unwrap(),
                Some(Action::NavigateTo(View::Notes))
            );
            assert_eq!(page.handle_input("8").unwrap(), None);
            assert_eq!(page.handle_input("j983f2j").unwrap(), None);
            assert_eq!(page.handle_input("").unwrap(), None);
        }
    }
}
