//! Task read model and status lifecycle.
//!
//! # Responsibility
//! - Define the task record and its four-state status.
//! - Keep the status → clipboard-visibility policy in one place.
//!
//! # Invariants
//! - Status defaults to `ToStart` on creation.
//! - `Finished` forces the task off the team clipboard; every other status
//!   forces it back on. Manual archival is recorded separately in `archived`.

use crate::model::project::SubfolderId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task row.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    ToStart,
    /// Work is in progress.
    Working,
    /// Blocked, needs attention.
    Stuck,
    /// Completed. Finished tasks leave the team clipboard.
    Finished,
}

impl TaskStatus {
    /// All statuses in board order, used by selection prompts.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::ToStart,
        TaskStatus::Working,
        TaskStatus::Stuck,
        TaskStatus::Finished,
    ];

    /// Human-facing label as shown on the board.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToStart => "To Start",
            Self::Working => "Working",
            Self::Stuck => "Stuck",
            Self::Finished => "Finished",
        }
    }

    /// Parses a human-facing label back into a status.
    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim() {
            "To Start" => Some(Self::ToStart),
            "Working" => Some(Self::Working),
            "Stuck" => Some(Self::Stuck),
            "Finished" => Some(Self::Finished),
            _ => None,
        }
    }

    /// Clipboard visibility implied by this status.
    ///
    /// Policy coupling carried over from the original board: "done" also
    /// means "hidden from the team clipboard".
    pub fn clipboard_visible(self) -> bool {
        !matches!(self, Self::Finished)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::ToStart
    }
}

/// Unit of work inside one subfolder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable task id.
    pub task_uuid: TaskId,
    /// Owning subfolder id.
    pub subfolder_uuid: SubfolderId,
    /// User-facing task name.
    pub name: String,
    /// Free-text assignee. Not validated against any member list.
    pub assignee: String,
    /// Planned start of the task.
    pub start_date: NaiveDate,
    /// Planned end of the task. Ordering against start is unchecked.
    pub end_date: NaiveDate,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// Set once a user archives the task from the clipboard.
    pub archived: bool,
    /// Whether the task appears on the team clipboard.
    pub visible_in_clipboard: bool,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms update timestamp.
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::TaskStatus;

    #[test]
    fn default_status_is_to_start() {
        assert_eq!(TaskStatus::default(), TaskStatus::ToStart);
    }

    #[test]
    fn only_finished_leaves_the_clipboard() {
        assert!(TaskStatus::ToStart.clipboard_visible());
        assert!(TaskStatus::Working.clipboard_visible());
        assert!(TaskStatus::Stuck.clipboard_visible());
        assert!(!TaskStatus::Finished.clipboard_visible());
    }

    #[test]
    fn serde_tokens_are_snake_case() {
        let token = serde_json::to_string(&TaskStatus::ToStart).unwrap();
        assert_eq!(token, "\"to_start\"");
        let parsed: TaskStatus = serde_json::from_str("\"finished\"").unwrap();
        assert_eq!(parsed, TaskStatus::Finished);
    }

    #[test]
    fn labels_roundtrip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse_label(status.label()), Some(status));
        }
        assert_eq!(TaskStatus::parse_label("Cancelled"), None);
    }
}
