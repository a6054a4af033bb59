use checklist::{ChecklistConfig, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Walk through a plain-text checklist, one confirmed step at a time", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to config.toml (default: <config dir>/checklist/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work through a checklist interactively, resuming saved progress
    Run {
        /// Path to the checklist file
        file: PathBuf,

        /// Discard saved progress and start from the first step
        #[arg(long)]
        reset: bool,

        /// Snapshot path (default: <file>.out)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },

    /// Show progress without prompting
    Status {
        /// Path to the checklist file
        file: PathBuf,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,

        /// Snapshot path (default: <file>.out)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },

    /// Delete saved progress
    Reset {
        /// Path to the checklist file
        file: PathBuf,

        /// Snapshot path (default: <file>.out)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ChecklistConfig::resolve(cli.config.as_deref())?;
    checklist::cli::init_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Run {
            file,
            reset,
            snapshot,
        } => {
            checklist::cli::run::run(&file, reset, snapshot.as_deref(), &config)?;
        }

        Commands::Status {
            file,
            json,
            snapshot,
        } => {
            checklist::cli::status::run(&file, snapshot.as_deref(), json, &config)?;
        }

        Commands::Reset { file, snapshot } => {
            checklist::cli::reset::run(&file, snapshot.as_deref(), &config)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "checklist", &mut io::stdout());
        }
    }

    Ok(())
}
