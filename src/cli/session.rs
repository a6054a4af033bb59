//! Opening a checklist session: resume from a snapshot or parse the source file

use crate::config::ChecklistConfig;
use crate::parser::load_checklist;
use crate::state::{snapshot_path, LoadError, State};
use crate::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded checklist together with where its progress is stored
#[derive(Debug)]
pub struct Session {
    pub state: State,
    pub snapshot: PathBuf,
    /// True when `state` came from an existing snapshot
    pub resumed: bool,
}

/// What to do with a snapshot that exists but cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnBadSnapshot {
    /// Move it aside to `<snapshot>.bak` and start over from the source file
    Backup,
    /// Report the error
    Fail,
}

/// Snapshot location: the explicit path if given, else `<file>.<suffix>`
pub fn resolve_snapshot(file: &Path, explicit: Option<&Path>, config: &ChecklistConfig) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => snapshot_path(file, &config.snapshot_suffix),
    }
}

/// Resume from `snapshot` when it exists, otherwise parse `file`
pub fn open(
    file: &Path,
    snapshot: &Path,
    config: &ChecklistConfig,
    on_bad: OnBadSnapshot,
) -> Result<Session> {
    tracing::debug!("Checking for snapshot: {}", snapshot.display());

    match State::load(snapshot) {
        Ok(state) => {
            tracing::info!(
                "Resuming {} at step {}/{}",
                state.title(),
                state.current_step(),
                state.checklist().len()
            );
            return Ok(Session {
                state,
                snapshot: snapshot.to_path_buf(),
                resumed: true,
            });
        }
        Err(LoadError::NotFound(_)) => {}
        Err(e) if on_bad == OnBadSnapshot::Backup && is_recoverable(&e) => {
            let backup = backup_path(snapshot);
            tracing::warn!(
                "Unusable snapshot {}: {}. Moving it to {}",
                snapshot.display(),
                e,
                backup.display()
            );
            fs::rename(snapshot, &backup)
                .with_context(|| format!("Failed to back up {}", snapshot.display()))?;
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load {}", snapshot.display()));
        }
    }

    let checklist = load_checklist(file, config.description_mode).map_err(|e| {
        tracing::error!("There was a problem loading checklist {}: {}", file.display(), e);
        e
    })?;
    let state = State::new(checklist)?;

    Ok(Session {
        state,
        snapshot: snapshot.to_path_buf(),
        resumed: false,
    })
}

/// Delete the snapshot. Returns false when there was nothing to delete.
pub fn remove_snapshot(snapshot: &Path) -> Result<bool> {
    match fs::remove_file(snapshot) {
        Ok(()) => {
            tracing::info!("Removed snapshot {}", snapshot.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", snapshot.display())),
    }
}

fn is_recoverable(error: &LoadError) -> bool {
    matches!(
        error,
        LoadError::Corrupt(_) | LoadError::SchemaMismatch(_) | LoadError::OutOfRange { .. }
    )
}

fn backup_path(snapshot: &Path) -> PathBuf {
    let mut name = snapshot.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
