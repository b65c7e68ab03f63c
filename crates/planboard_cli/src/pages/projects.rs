//! Project and subfolder pages.

use std::any::Any;
use std::rc::Rc;

use anyhow::Result;
use planboard_core::{Project, Subfolder};

use super::page_helpers::{get_column_string, parse_indexed_command};
use super::Page;
use crate::actions::Action;
use crate::board::Board;

/// Flat project list with create/delete commands.
pub struct ProjectsPage {
    pub db: Rc<Board>,
}

impl ProjectsPage {
    fn listing(&self) -> Result<Vec<Project>> {
        Ok(self.db.projects()?.list_projects()?)
    }
}

impl Page for ProjectsPage {
    fn draw_page(&self) -> Result<()> {
        let projects = self.listing()?;

        println!("---------------------------- PROJECTS ----------------------------");
        println!("  #  |         name         |   start    |    end     | description");
        if projects.is_empty() {
            println!("nothing to show");
        }
        for (pos, project) in projects.iter().enumerate() {
            println!(
                "{} | {} | {} | {} | {}",
                get_column_string(&(pos + 1).to_string(), 4),
                get_column_string(&project.name, 20),
                project.start_date,
                project.end_date,
                get_column_string(&project.description, 24),
            );
        }

        println!();
        println!("[p] previous | [c] create project | [d :#:] delete project");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        match input.trim() {
            "p" => Ok(Some(Action::NavigateToPreviousPage)),
            "c" => Ok(Some(Action::CreateProject)),
            other => {
                if let Some(('d', index)) = parse_indexed_command(other) {
                    if let Some(project) = self.listing()?.get(index) {
                        return Ok(Some(Action::DeleteProject {
                            project_uuid: project.project_uuid,
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

/// Subfolders grouped under their projects.
///
/// Projects and subfolders carry separate numberings; the command letter
/// decides which one an index refers to.
pub struct SubfoldersPage {
    pub db: Rc<Board>,
}

impl SubfoldersPage {
    fn listing(&self) -> Result<(Vec<Project>, Vec<Subfolder>)> {
        let service = self.db.projects()?;
        let projects = service.list_projects()?;
        let mut subfolders = Vec::new();
        for project in &projects {
            subfolders.extend(service.list_subfolders(project.project_uuid)?);
        }
        Ok((projects, subfolders))
    }
}

impl Page for SubfoldersPage {
    fn draw_page(&self) -> Result<()> {
        let (projects, subfolders) = self.listing()?;

        println!("--------------------------- SUBFOLDERS ---------------------------");
        if projects.is_empty() {
            println!("nothing to show");
        }
        let mut next_folder = 1;
        for (pos, project) in projects.iter().enumerate() {
            println!("[{}] {}", pos + 1, project.name);
            let children = subfolders
                .iter()
                .filter(|folder| folder.project_uuid == project.project_uuid);
            for child in children {
                println!("      [{next_folder}] {}", child.name);
                next_folder += 1;
            }
        }

        println!();
        println!("[p] previous | [c :project:] create subfolder | [d :subfolder:] delete subfolder");
        Ok(())
    }

    fn handle_input(&self, input: &str) -> Result<Option<Action>> {
        if input.trim() == "p" {
            return Ok(Some(Action::NavigateToPreviousPage));
        }
        if let Some((command, index)) = parse_indexed_command(input) {
            let (projects, subfolders) = self.listing()?;
            match command {
                'c' => {
                    if let Some(project) = projects.get(index) {
                        return Ok(Some(Action::CreateSubfolder {
                            project_uuid: project.project_uuid,
                        }));
                    }
                }
                'd' => {
                    if let Some(folder) = subfolders.get(index) {
                        return Ok(Some(Action::DeleteSubfolder {
                            subfolder_uuid: folder.subfolder_uuid,
                        }));
                    }
                }
                _ => {}
            }
        }
        Ok(None)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
