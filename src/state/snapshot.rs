//! Snapshot persistence for [`State`]
//!
//! A snapshot is a JSON object:
//!
//! ```json
//! {
//!   "active_checklist": { "title": "...", "steps": [...], "filename": "..." },
//!   "current_step": 1
//! }
//! ```
//!
//! Loading builds the checklist straight from `steps`; the text parser is not
//! involved and `current_step` is taken as stored after a range check.

use super::machine::{State, StateError};
use crate::models::Checklist;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("snapshot not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Corrupt(String),

    #[error("snapshot does not match the expected schema: {0}")]
    SchemaMismatch(String),

    #[error("snapshot current_step {current_step} is outside 0..={len}")]
    OutOfRange { current_step: Number, len: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid snapshot path: {0}")]
    InvalidPath(String),
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    active_checklist: &'a Checklist,
    current_step: usize,
}

#[derive(Deserialize)]
struct Snapshot {
    active_checklist: Checklist,
    current_step: Number,
}

/// Cursor index for an integer `current_step`, `None` for non-integers.
///
/// Integers that cannot index a step (negative, or wider than `usize`)
/// saturate to `usize::MAX` so the range check rejects them. Integer literals
/// beyond `u64` are parsed by serde_json as `f64`.
fn cursor_index(number: &Number) -> Option<usize> {
    if let Some(n) = number.as_u64() {
        return Some(usize::try_from(n).unwrap_or(usize::MAX));
    }
    if number.is_i64() {
        return Some(usize::MAX);
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() >= u64::MAX as f64)
        .map(|_| usize::MAX)
}

/// Default snapshot location for a checklist source: `<source>.<suffix>`
pub fn snapshot_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

impl State {
    /// Serialize to snapshot JSON
    pub fn to_snapshot(&self) -> Result<String, SaveError> {
        let snapshot = SnapshotRef {
            active_checklist: self.checklist(),
            current_step: self.current_step(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Rebuild a state from snapshot bytes
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, LoadError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| LoadError::Corrupt(e.to_string()))?;

        let snapshot: Snapshot =
            serde_json::from_value(value).map_err(|e| LoadError::SchemaMismatch(e.to_string()))?;

        let Snapshot {
            active_checklist,
            current_step,
        } = snapshot;

        let start = cursor_index(&current_step).ok_or_else(|| {
            LoadError::SchemaMismatch(format!("current_step {} is not an integer", current_step))
        })?;

        State::with_start(active_checklist, start).map_err(|e| match e {
            StateError::EmptyChecklist => {
                LoadError::SchemaMismatch("active_checklist.steps is empty".to_string())
            }
            StateError::OutOfRange { len, .. } => LoadError::OutOfRange { current_step, len },
        })
    }

    /// Save a snapshot to `path`.
    ///
    /// Writes a temporary file next to `path` and renames it into place, so an
    /// interrupted save leaves the previous snapshot intact.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let content = self.to_snapshot()?;

        let parent = match path.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => {
                return Err(SaveError::InvalidPath(format!(
                    "{} has no parent directory",
                    path.display()
                )))
            }
        };
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(path).map_err(|e| SaveError::Io(e.error))?;

        Ok(())
    }

    /// Load a snapshot from `path`
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(e),
        })?;

        Self::from_snapshot(&bytes)
    }
}
