//! Checklist progression state
//!
//! Handles the progression cursor and its persistence:
//! - Linear confirm-only advancement
//! - Terminal detection
//! - JSON snapshots with atomic replacement on save

mod machine;
mod snapshot;

pub use machine::{State, StateError};
pub use snapshot::{snapshot_path, LoadError, SaveError};
