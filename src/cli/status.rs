use super::session::{self, OnBadSnapshot};
use crate::config::ChecklistConfig;
use crate::models::ProgressInfo;
use crate::state::State;
use crate::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Machine-readable progress summary
#[derive(Debug, Serialize, PartialEq)]
pub struct StatusReport {
    pub title: String,
    pub source: String,
    pub current_step: usize,
    pub total_steps: usize,
    pub complete: bool,
    pub active_step: Option<String>,
    pub resumed: bool,
}

impl StatusReport {
    pub fn from_state(state: &State, resumed: bool) -> Self {
        let (done, total) = state.progress();
        Self {
            title: state.title().to_string(),
            source: state.checklist().source.clone(),
            current_step: done,
            total_steps: total,
            complete: state.is_terminal(),
            active_step: state.active_step().ok().map(|s| s.label.clone()),
            resumed,
        }
    }
}

pub fn run(
    file: &Path,
    snapshot: Option<&Path>,
    json: bool,
    config: &ChecklistConfig,
) -> Result<()> {
    let snapshot = session::resolve_snapshot(file, snapshot, config);
    let session = session::open(file, &snapshot, config, OnBadSnapshot::Fail)?;
    let state = &session.state;
    let report = StatusReport::from_state(state, session.resumed);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format!("Status for: {}", report.title).cyan().bold());
    println!();
    println!("   Source:    {}", report.source);
    println!(
        "   Progress:  {}/{}",
        report.current_step, report.total_steps
    );
    match &report.active_step {
        Some(label) => println!("   Active:    {}", label.yellow()),
        None => println!("   Active:    {}", "complete".green()),
    }
    if !session.resumed {
        println!("   Snapshot:  {}", "none".bright_black());
    }
    println!();

    for (index, step, status) in state.steps_with_status() {
        let icon = match status {
            ProgressInfo::Finished => "✅",
            ProgressInfo::Active => "👉",
            ProgressInfo::Waiting => "⏳",
        };
        println!("   {} {}. {}", icon, index + 1, step.label);
    }

    Ok(())
}
