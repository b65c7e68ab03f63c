//! Status color mappings.
//!
//! Two mappings carried over from the original board: a hex color used by
//! clipboard cards, and a cell style used by the overview table.

use crate::model::task::TaskStatus;

const DEFAULT_COLOR: &str = "#FFFFFF";

/// Hex color for one status.
pub fn status_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::ToStart => "#FFFFFF",
        TaskStatus::Working => "#FFD700",
        TaskStatus::Stuck => "#FF4500",
        TaskStatus::Finished => "#32CD32",
    }
}

/// Hex color for a raw status label; unknown labels fall back to white.
pub fn status_color_for_label(label: &str) -> &'static str {
    match TaskStatus::parse_label(label) {
        Some(status) => status_color(status),
        None => DEFAULT_COLOR,
    }
}

/// Cell style for the overview table's status column.
pub fn status_cell_style(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::ToStart => "background-color: white; color: black;",
        TaskStatus::Working => "background-color: yellow; color: black;",
        TaskStatus::Stuck => "background-color: red; color: white;",
        TaskStatus::Finished => "background-color: green; color: white;",
    }
}
