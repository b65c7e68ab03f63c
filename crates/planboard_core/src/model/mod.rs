//! Domain model for the tracking board.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep status/visibility policy helpers next to the data they govern.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Project/subfolder deletion is a hard delete; only tasks carry an
//!   archive flag.

pub mod note;
pub mod project;
pub mod task;
