use super::session::{self, OnBadSnapshot};
use crate::config::ChecklistConfig;
use crate::models::{Language, LevelInfo, ProgressInfo, Step};
use crate::state::State;
use crate::Result;
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::Select;
use std::io;
use std::path::Path;

/// Answer to "did you complete this step?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Done,
    NotYet,
    SaveAndQuit,
}

const ANSWERS: [(Answer, &str); 3] = [
    (Answer::Done, "Done"),
    (Answer::NotYet, "Not yet"),
    (Answer::SaveAndQuit, "Save and quit"),
];

pub fn run(
    file: &Path,
    reset: bool,
    snapshot: Option<&Path>,
    config: &ChecklistConfig,
) -> Result<()> {
    let snapshot = session::resolve_snapshot(file, snapshot, config);

    if reset {
        session::remove_snapshot(&snapshot)?;
    }

    let mut session = session::open(file, &snapshot, config, OnBadSnapshot::Backup)?;
    if session.resumed {
        println!(
            "{}",
            format!(
                "Resuming from {} ({} of {} done)",
                session.snapshot.display(),
                session.state.current_step(),
                session.state.checklist().len()
            )
            .cyan()
        );
    }

    let state = &mut session.state;
    loop {
        if state.is_terminal() {
            state.save(&session.snapshot)?;
            println!(
                "{}",
                format!("✅ Checklist >>> {} <<< is complete!", state.title())
                    .green()
                    .bold()
            );
            return Ok(());
        }

        if config.clear_screen {
            clear_screen()?;
        }
        print_steps(state);

        let step = state.active_step()?;
        println!();
        println!(
            "[{}]\t\t{}",
            level_tag(step.level, config.language),
            step.label.bold()
        );
        if step.description != step.label {
            println!("\t\t{}", step.description.trim().dimmed());
        }
        println!();

        match prompt()? {
            Answer::Done => {
                tracing::debug!("Confirmed step {}: {}", state.current_step(), step.label);
                state.confirm();
            }
            Answer::NotYet => {}
            Answer::SaveAndQuit => {
                tracing::info!("Saving at step {}", state.current_step());
                state.save(&session.snapshot)?;
                println!(
                    "{}",
                    format!(
                        "💾 Progress saved to {} (active step: {})",
                        session.snapshot.display(),
                        state.current_step() + 1
                    )
                    .cyan()
                );
                return Ok(());
            }
        }
    }
}

fn prompt() -> Result<Answer> {
    let labels: Vec<&str> = ANSWERS.iter().map(|(_, label)| *label).collect();

    let selection = Select::new()
        .with_prompt("Did you complete this step?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Terminal not available: {}", e))?;

    Ok(ANSWERS
        .get(selection)
        .map(|(answer, _)| *answer)
        .unwrap_or(Answer::NotYet))
}

fn clear_screen() -> Result<()> {
    crossterm::execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn print_steps(state: &State) {
    println!("{}", state.title().cyan().bold());
    println!();

    for (index, step, status) in state.steps_with_status() {
        let line = step_line(index, step, status);
        let line = match status {
            ProgressInfo::Finished => line.green(),
            ProgressInfo::Active => line.yellow().bold(),
            ProgressInfo::Waiting => line.normal(),
        };
        println!("{}", line);
    }
}

/// `  1.   [v]   Wake up`, with a level marker for non-normal steps
fn step_line(index: usize, step: &Step, status: ProgressInfo) -> String {
    let number = format!("{}.", index + 1);
    let marker = if step.is_required() {
        " (!)"
    } else if step.is_optional() {
        " (?)"
    } else {
        ""
    };
    format!("{:<6}[{}]   {}{}", number, status.glyph(), step.label, marker)
}

fn level_tag(level: LevelInfo, language: Language) -> colored::ColoredString {
    let name = level.display_name(language);
    match level {
        LevelInfo::Required => name.red().bold(),
        LevelInfo::Optional => name.blue(),
        LevelInfo::Normal => name.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_line() {
        let step = Step::new("Wake up", None, LevelInfo::Normal);
        assert_eq!(step_line(0, &step, ProgressInfo::Finished), "1.    [v]   Wake up");

        let step = Step::new("Brush teeth", None, LevelInfo::Required);
        assert_eq!(
            step_line(11, &step, ProgressInfo::Active),
            "12.   [>]   Brush teeth (!)"
        );

        let step = Step::new("Stretch", None, LevelInfo::Optional);
        assert_eq!(step_line(2, &step, ProgressInfo::Waiting), "3.    [ ]   Stretch (?)");
    }

    #[test]
    fn test_answers_cover_all_options() {
        let answers: Vec<_> = ANSWERS.iter().map(|(a, _)| *a).collect();
        assert_eq!(
            answers,
            vec![Answer::Done, Answer::NotYet, Answer::SaveAndQuit]
        );
    }
}
