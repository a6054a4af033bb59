use super::session;
use crate::config::ChecklistConfig;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(file: &Path, snapshot: Option<&Path>, config: &ChecklistConfig) -> Result<()> {
    let snapshot = session::resolve_snapshot(file, snapshot, config);

    if session::remove_snapshot(&snapshot)? {
        println!(
            "{}",
            format!("🗑  Removed progress snapshot {}", snapshot.display()).green()
        );
    } else {
        println!(
            "{}",
            format!("No progress snapshot at {}", snapshot.display()).yellow()
        );
    }

    Ok(())
}
