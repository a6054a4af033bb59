//! Checklist document parser

use super::line::{classify, ItemLine, Line};
use crate::models::{Checklist, Step};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How continuation lines build a step's description
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionMode {
    /// Accumulator starts from the label; each continuation appends `" " + text`.
    /// `1. Step one` + `continued text` gives `"Step one continued text"`.
    #[default]
    Joined,
    /// Accumulator starts empty, so the label is left out once any
    /// continuation is present. A step without continuations still gets its
    /// label as description.
    /// `1. Step one` + `continued text` gives `" continued text"`.
    Literal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("title line is only allowed as the first line (found at line {line})")]
    TitleMisplaced { line: usize },

    #[error("line {line} is not an item and no step is open")]
    MalformedLine { line: usize },

    #[error("item at line {line} has no label")]
    EmptyLabel { line: usize },

    #[error("checklist has no steps")]
    NoSteps,
}

impl ParseError {
    /// 1-based line the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::TitleMisplaced { line }
            | ParseError::MalformedLine { line }
            | ParseError::EmptyLabel { line } => Some(*line),
            ParseError::NoSteps => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Step being accumulated until the next item line or end of input
struct OpenStep<'a> {
    item: ItemLine<'a>,
    description: String,
}

impl OpenStep<'_> {
    fn close(self) -> Step {
        Step::new(self.item.label, Some(self.description), self.item.level())
    }
}

/// Line-oriented parser for checklist documents
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecklistParser {
    mode: DescriptionMode,
}

impl ChecklistParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description_mode(mut self, mode: DescriptionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse `text`; the title falls back to `source` when no title line is present
    pub fn parse(&self, text: &str, source: &str) -> Result<Checklist, ParseError> {
        self.parse_with_fallback(text, source, source)
    }

    /// Parse `text` with an explicit fallback title
    pub fn parse_with_fallback(
        &self,
        text: &str,
        source: &str,
        fallback_title: &str,
    ) -> Result<Checklist, ParseError> {
        let mut title: Option<String> = None;
        let mut steps = Vec::new();
        let mut open: Option<OpenStep> = None;
        let mut first_line = true;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = classify(raw);

            if line.is_ignored() {
                continue;
            }

            if first_line {
                first_line = false;
                if let Line::Title(heading) = line {
                    title = Some(heading.to_string());
                    continue;
                }
            }

            match line {
                Line::Title(_) => return Err(ParseError::TitleMisplaced { line: line_no }),
                Line::Item(item) => {
                    if item.label.is_empty() {
                        return Err(ParseError::EmptyLabel { line: line_no });
                    }
                    if let Some(prev) = open.take() {
                        steps.push(prev.close());
                    }
                    let description = match self.mode {
                        DescriptionMode::Joined => item.label.to_string(),
                        DescriptionMode::Literal => String::new(),
                    };
                    open = Some(OpenStep { item, description });
                }
                Line::Text(content) => match open.as_mut() {
                    Some(step) => {
                        step.description.push(' ');
                        step.description.push_str(content);
                    }
                    None => return Err(ParseError::MalformedLine { line: line_no }),
                },
                Line::Blank | Line::Comment => continue,
            }
        }

        if let Some(prev) = open.take() {
            steps.push(prev.close());
        }

        if steps.is_empty() {
            return Err(ParseError::NoSteps);
        }

        let title = title.unwrap_or_else(|| fallback_title.to_string());
        let mut checklist = Checklist::new(title, steps, source);
        checklist.mark_first_active();
        Ok(checklist)
    }
}

/// Parse checklist text with the default [`DescriptionMode::Joined`]
pub fn parse(text: &str, source: &str) -> Result<Checklist, ParseError> {
    ChecklistParser::new().parse(text, source)
}

/// Read and parse a checklist file.
///
/// `source` is the path as given; the fallback title is the file name.
pub fn load_checklist(path: &Path, mode: DescriptionMode) -> Result<Checklist, ChecklistError> {
    let text = std::fs::read_to_string(path).map_err(|source| ChecklistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source = path.to_string_lossy();
    let fallback = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| source.clone());

    ChecklistParser::new()
        .description_mode(mode)
        .parse_with_fallback(&text, &source, &fallback)
        .map_err(|source| ChecklistError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LevelInfo, ProgressInfo};

    #[test]
    fn test_parse_morning_routine() {
        let text = "# Morning Routine\n1. Wake up\n2. ! Brush teeth\n3. ? Stretch\n";
        let checklist = parse(text, "morning.txt").unwrap();

        assert_eq!(checklist.title, "Morning Routine");
        assert_eq!(checklist.source, "morning.txt");
        assert_eq!(checklist.len(), 3);

        let levels: Vec<_> = checklist.steps.iter().map(|s| s.level).collect();
        assert_eq!(
            levels,
            vec![LevelInfo::Normal, LevelInfo::Required, LevelInfo::Optional]
        );
        assert_eq!(checklist.steps[0].progress, ProgressInfo::Active);
        assert_eq!(checklist.steps[1].progress, ProgressInfo::Waiting);
        assert_eq!(checklist.steps[2].progress, ProgressInfo::Waiting);
        assert_eq!(checklist.steps[1].description, "Brush teeth");
    }

    #[test]
    fn test_title_falls_back_to_source() {
        let checklist = parse("1. Only step", "notes/list").unwrap();
        assert_eq!(checklist.title, "notes/list");
        assert_eq!(checklist.steps[0].label, "Only step");
    }

    #[test]
    fn test_title_after_comments_and_blanks() {
        let text = ";; header comment\n\n# Real Title\n1. Go\n";
        let checklist = parse(text, "src").unwrap();
        assert_eq!(checklist.title, "Real Title");
        assert_eq!(checklist.len(), 1);
    }

    #[test]
    fn test_title_misplaced() {
        let text = "1. First\n\n# Late title\n";
        assert_eq!(
            parse(text, "src").unwrap_err(),
            ParseError::TitleMisplaced { line: 3 }
        );

        let text = "# One\n# Two\n1. Step\n";
        assert_eq!(
            parse(text, "src").unwrap_err(),
            ParseError::TitleMisplaced { line: 2 }
        );
    }

    #[test]
    fn test_malformed_first_line() {
        let text = "   stray text\n1. Step\n";
        let err = parse(text, "src").unwrap_err();
        assert_eq!(err, ParseError::MalformedLine { line: 1 });
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_malformed_after_title() {
        let text = "# Title\n;; comment\nstray\n";
        assert_eq!(
            parse(text, "src").unwrap_err(),
            ParseError::MalformedLine { line: 3 }
        );
    }

    #[test]
    fn test_continuation_starts_from_label_by_default() {
        let text = "1. Step one\n   continued text\n2. Step two\n";
        let checklist = parse(text, "src").unwrap();

        assert_eq!(checklist.steps[0].label, "Step one");
        assert_eq!(checklist.steps[0].description, "Step one continued text");
        assert_eq!(checklist.steps[1].description, "Step two");
    }

    #[test]
    fn test_continuation_literal() {
        let text = "1. Step one\n   continued text\n2. Step two\n";
        let checklist = ChecklistParser::new()
            .description_mode(DescriptionMode::Literal)
            .parse(text, "src")
            .unwrap();

        assert_eq!(checklist.steps[0].label, "Step one");
        assert_eq!(checklist.steps[0].description, " continued text");
        assert_eq!(checklist.steps[1].description, "Step two");
    }

    #[test]
    fn test_continuation_joined() {
        let text = "1. Step one\n   continued text\n   and more\n2. Step two\n";
        let checklist = ChecklistParser::new()
            .description_mode(DescriptionMode::Joined)
            .parse(text, "src")
            .unwrap();

        assert_eq!(checklist.steps[0].description, "Step one continued text and more");
        assert_eq!(checklist.steps[1].description, "Step two");
    }

    #[test]
    fn test_comments_inside_step_are_skipped() {
        let text = "1. Step\n;; not part of it\n  detail\n";
        let checklist = parse(text, "src").unwrap();
        assert_eq!(checklist.steps[0].description, "Step detail");
    }

    #[test]
    fn test_numbers_are_cosmetic() {
        let text = "5. Five\n5. Five again\n1. One\n";
        let checklist = parse(text, "src").unwrap();
        let labels: Vec<_> = checklist.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Five", "Five again", "One"]);
    }

    #[test]
    fn test_empty_label() {
        let text = "1. Fine\n2. !\n";
        assert_eq!(
            parse(text, "src").unwrap_err(),
            ParseError::EmptyLabel { line: 2 }
        );
    }

    #[test]
    fn test_no_steps() {
        assert_eq!(parse("", "src").unwrap_err(), ParseError::NoSteps);
        assert_eq!(parse("# Title only\n;; c\n", "src").unwrap_err(), ParseError::NoSteps);
        assert_eq!(ParseError::NoSteps.line(), None);
    }

    #[test]
    fn test_crlf_input() {
        let text = "# T\r\n1. A\r\n2. ? B\r\n";
        let checklist = parse(text, "src").unwrap();
        assert_eq!(checklist.title, "T");
        assert_eq!(checklist.steps[1].label, "B");
        assert_eq!(checklist.steps[1].level, LevelInfo::Optional);
    }

    #[test]
    fn test_load_checklist_uses_file_name_as_title() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("evening.txt");
        std::fs::write(&path, "1. Lock door\n").unwrap();

        let checklist = load_checklist(&path, DescriptionMode::Literal).unwrap();
        assert_eq!(checklist.title, "evening.txt");
        assert_eq!(checklist.source, path.to_string_lossy());
    }

    #[test]
    fn test_load_checklist_errors() {
        let temp = tempfile::TempDir::new().unwrap();

        let missing = temp.path().join("missing.txt");
        let err = load_checklist(&missing, DescriptionMode::Literal).unwrap_err();
        assert!(matches!(err, ChecklistError::Io { .. }));

        let bad = temp.path().join("bad.txt");
        std::fs::write(&bad, "oops\n").unwrap();
        let err = load_checklist(&bad, DescriptionMode::Literal).unwrap_err();
        assert!(matches!(
            err,
            ChecklistError::Parse {
                source: ParseError::MalformedLine { line: 1 },
                ..
            }
        ));
    }
}
