//! Derived view computations.
//!
//! # Responsibility
//! - Turn freshly queried rows into render-ready board structures.
//! - Keep these computations pure: no queries, no state, no rendering.
//!
//! # Invariants
//! - Nothing in this module is persisted; every structure is rebuilt from
//!   query results on each render.

pub mod clipboard;
pub mod gantt;
pub mod overview;
pub mod status;
