use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance of a checklist step, decoded from an inline marker character
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LevelInfo {
    /// No marker
    #[default]
    Normal,
    /// `?` marker
    Optional,
    /// `!` marker
    Required,
}

/// Language used for human-readable level names
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl LevelInfo {
    pub const REQUIRED_MARKER: char = '!';
    pub const OPTIONAL_MARKER: char = '?';

    /// Decode a level from an optional marker character.
    ///
    /// Anything other than `!` or `?` (including no marker) is `Normal`.
    pub fn from_marker(marker: Option<char>) -> Self {
        match marker {
            Some(Self::REQUIRED_MARKER) => LevelInfo::Required,
            Some(Self::OPTIONAL_MARKER) => LevelInfo::Optional,
            _ => LevelInfo::Normal,
        }
    }

    /// Whether `c` is one of the recognised level markers
    pub fn is_marker(c: char) -> bool {
        c == Self::REQUIRED_MARKER || c == Self::OPTIONAL_MARKER
    }

    /// Snapshot identifier ("normal", "optional", "required")
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelInfo::Normal => "normal",
            LevelInfo::Optional => "optional",
            LevelInfo::Required => "required",
        }
    }

    /// Human-readable name in the given language
    pub fn display_name(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, LevelInfo::Normal) => "Normal",
            (Language::En, LevelInfo::Optional) => "Optional",
            (Language::En, LevelInfo::Required) => "Required",
            (Language::Pl, LevelInfo::Normal) => "Normalny",
            (Language::Pl, LevelInfo::Optional) => "Opcjonalny",
            (Language::Pl, LevelInfo::Required) => "Wymagany",
        }
    }
}

impl fmt::Display for LevelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name(Language::En))
    }
}

/// Per-step cosmetic status.
///
/// Not authoritative: the [`State`](crate::state::State) cursor is. Only the
/// first step of a freshly parsed checklist is ever marked `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProgressInfo {
    #[default]
    Waiting,
    Active,
    Finished,
}

impl ProgressInfo {
    /// Single-character glyph for list rendering
    pub fn glyph(&self) -> char {
        match self {
            ProgressInfo::Waiting => ' ',
            ProgressInfo::Active => '>',
            ProgressInfo::Finished => 'v',
        }
    }
}
