pub mod reset;
pub mod run;
pub mod session;
pub mod status;

use crate::config::ChecklistConfig;
use crate::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "CHECKLIST_LOG";

/// Install the global tracing subscriber.
///
/// Writes to `config.log_file` when set, otherwise to stderr.
pub fn init_logging(config: &ChecklistConfig, verbose: bool) -> Result<()> {
    let default_filter = if verbose { "checklist=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
