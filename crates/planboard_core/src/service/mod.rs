//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the policy decisions (status/visibility coupling, silent no-op
//!   deletes) that sit above plain row access.

pub mod note_service;
pub mod project_service;
pub mod task_service;
