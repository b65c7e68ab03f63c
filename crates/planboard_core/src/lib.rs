//! Core domain logic for planboard.
//! This crate is the single source of truth for tracking-board invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::project::{Project, ProjectId, Subfolder, SubfolderId};
pub use model::task::{Task, TaskId, TaskStatus};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::task_repo::{
    SqliteTaskRepository, TaskListQuery, TaskRepository,
};
pub use repo::{RepoError, RepoResult};
pub use service::note_service::NoteService;
pub use service::project_service::{ProjectService, ProjectServiceError};
pub use service::task_service::{TaskDeleteMode, TaskService};
pub use view::clipboard::{build_clipboard, ClipboardCard, ClipboardColumn};
pub use view::gantt::{build_gantt, GanttRow, PROJECT_CATEGORY};
pub use view::overview::{build_overview, ProjectOverview, SubfolderOverview};
pub use view::status::{status_cell_style, status_color, status_color_for_label};
