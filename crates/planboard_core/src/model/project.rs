//! Project and subfolder read models.
//!
//! # Responsibility
//! - Define the two upper levels of the project → subfolder → task hierarchy.
//!
//! # Invariants
//! - `end_date` is conceptually >= `start_date` but is not enforced anywhere;
//!   the board accepts whatever the user typed, like the original forms did.
//! - A subfolder always references an existing project (FK enforced).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project row.
pub type ProjectId = Uuid;

/// Stable identifier for a subfolder row.
pub type SubfolderId = Uuid;

/// Top-level container owning an ordered set of subfolders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable project id.
    pub project_uuid: ProjectId,
    /// User-facing project name. Uniqueness is intentionally not enforced.
    pub name: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Planned start of the project.
    pub start_date: NaiveDate,
    /// Planned end of the project. Ordering against start is unchecked.
    pub end_date: NaiveDate,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms update timestamp.
    pub updated_at: i64,
}

/// Grouping level between a project and its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfolder {
    /// Stable subfolder id.
    pub subfolder_uuid: SubfolderId,
    /// Owning project id.
    pub project_uuid: ProjectId,
    /// User-facing subfolder name. Not unique within a project.
    pub name: String,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms update timestamp.
    pub updated_at: i64,
}
