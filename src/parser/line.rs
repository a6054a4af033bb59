//! Line tokenizer for the checklist format
//!
//! Every raw line falls into exactly one [`Line`] category. Classification is
//! context free; the grammar rules that depend on position (title only first,
//! continuation needs an open step) live in the parser.

use crate::models::LevelInfo;

const COMMENT_PREFIX: &str = ";;";
const TITLE_PREFIX: &str = "# ";

/// A classified line, borrowing from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only
    Blank,
    /// Starts with `;;` after trimming
    Comment,
    /// `# <text>`; holds the trimmed text after the marker
    Title(&'a str),
    /// `<digits>.<ws>[!|?]<ws><label>`
    Item(ItemLine<'a>),
    /// Anything else; holds the trimmed line
    Text(&'a str),
}

/// Captures of an item line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLine<'a> {
    pub marker: Option<char>,
    pub label: &'a str,
}

impl ItemLine<'_> {
    pub fn level(&self) -> LevelInfo {
        LevelInfo::from_marker(self.marker)
    }
}

impl<'a> Line<'a> {
    /// Blank and comment lines carry no content
    pub fn is_ignored(&self) -> bool {
        matches!(self, Line::Blank | Line::Comment)
    }
}

/// Classify one raw line
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return Line::Comment;
    }
    if let Some(title) = line.strip_prefix(TITLE_PREFIX) {
        return Line::Title(title.trim());
    }
    if let Some(item) = match_item(line) {
        return Line::Item(item);
    }

    Line::Text(line)
}

/// Match `<digits>.` followed by an optional marker and the label
fn match_item(line: &str) -> Option<ItemLine<'_>> {
    let digits_end = line
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(line.len());

    if digits_end == 0 {
        return None;
    }

    let rest = line[digits_end..].strip_prefix('.')?.trim_start();

    let (marker, rest) = match rest.chars().next() {
        Some(c) if LevelInfo::is_marker(c) => (Some(c), &rest[c.len_utf8()..]),
        _ => (None, rest),
    };

    Some(ItemLine {
        marker,
        label: rest.trim_start(),
    })
}
