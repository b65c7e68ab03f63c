//! Actions a page can hand back to the navigator.

use planboard_core::{NoteId, ProjectId, SubfolderId, TaskId};

/// Top-level pages reachable from the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Projects,
    Subfolders,
    Tasks,
    Gantt,
    Clipboard,
    Overview,
    Notes,
}

/// One user-requested operation, resolved by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NavigateTo(View),
    NavigateToPreviousPage,
    Exit,
    CreateProject,
    DeleteProject { project_uuid: ProjectId },
    CreateSubfolder { project_uuid: ProjectId },
    DeleteSubfolder { subfolder_uuid: SubfolderId },
    CreateTask { subfolder_uuid: SubfolderId },
    DeleteTask { task_uuid: TaskId },
    ArchiveTask { task_uuid: TaskId },
    UpdateTaskStatus { task_uuid: TaskId },
    CreateNote,
    DeleteNote { note_uuid: NoteId },
}
