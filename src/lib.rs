// Checklist - resumable step-by-step checklists
// Parses a small plain-text format and tracks progress across runs

pub mod cli;
pub mod config;
pub mod models;
pub mod parser;
pub mod state;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use config::ChecklistConfig;
pub use models::{Checklist, Language, LevelInfo, ProgressInfo, Step};
pub use parser::{load_checklist, parse, ChecklistParser, DescriptionMode, ParseError};
pub use state::{snapshot_path, LoadError, SaveError, State, StateError};
