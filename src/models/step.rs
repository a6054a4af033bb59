use super::level::{LevelInfo, ProgressInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single checklist entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Short text shown in the step list
    pub label: String,

    /// Longer text; equals `label` when the document supplied no continuation
    pub description: String,

    /// Importance decoded from the item marker
    pub level: LevelInfo,

    /// Cosmetic status, not persisted
    #[serde(skip)]
    pub progress: ProgressInfo,
}

impl Step {
    /// Create a waiting step. A missing or empty description falls back to the label.
    pub fn new(label: impl Into<String>, description: Option<String>, level: LevelInfo) -> Self {
        let label = label.into();
        let description = description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| label.clone());

        Self {
            label,
            description,
            level,
            progress: ProgressInfo::Waiting,
        }
    }

    /// Whether this step carries the `!` marker
    pub fn is_required(&self) -> bool {
        self.level == LevelInfo::Required
    }

    /// Whether this step carries the `?` marker
    pub fn is_optional(&self) -> bool {
        self.level == LevelInfo::Optional
    }

    /// Same label, description and level. `progress` is ignored.
    pub fn same_content(&self, other: &Step) -> bool {
        self.label == other.label
            && self.description == other.description
            && self.level == other.level
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step(label={:?}, level={})", self.label, self.level.as_str())
    }
}
