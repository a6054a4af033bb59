use super::level::ProgressInfo;
use super::step::Step;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed checklist document.
///
/// Immutable after load; progression lives in [`State`](crate::state::State).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checklist {
    /// Title line text, or a fallback derived from the source
    pub title: String,

    /// Steps in document order
    pub steps: Vec<Step>,

    /// Where the checklist came from (usually a file path)
    #[serde(rename = "filename")]
    pub source: String,
}

impl Checklist {
    pub fn new(title: impl Into<String>, steps: Vec<Step>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps,
            source: source.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Final path component of the source, or the whole source if it has none
    pub fn basename(&self) -> &str {
        Path::new(&self.source)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.source)
    }

    /// Same title and ordered step content. Ignores `progress` and `source`.
    pub fn same_content(&self, other: &Checklist) -> bool {
        self.title == other.title
            && self.steps.len() == other.steps.len()
            && self
                .steps
                .iter()
                .zip(&other.steps)
                .all(|(a, b)| a.same_content(b))
    }

    /// Mark the first step active. Applied once, after parsing.
    pub(crate) fn mark_first_active(&mut self) {
        if let Some(first) = self.steps.first_mut() {
            first.progress = ProgressInfo::Active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LevelInfo;

    fn sample() -> Checklist {
        Checklist::new(
            "Morning",
            vec![
                Step::new("Wake up", None, LevelInfo::Normal),
                Step::new("Brush teeth", None, LevelInfo::Required),
            ],
            "routines/morning.txt",
        )
    }

    #[test]
    fn test_basename() {
        assert_eq!(sample().basename(), "morning.txt");

        let bare = Checklist::new("t", vec![], "inline");
        assert_eq!(bare.basename(), "inline");
    }

    #[test]
    fn test_source_serialized_as_filename() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["filename"], "routines/morning.txt");
        assert_eq!(value["steps"].as_array().unwrap().len(), 2);
        assert!(value.get("source").is_none());
    }

    #[test]
    fn test_mark_first_active() {
        let mut checklist = sample();
        checklist.mark_first_active();
        assert_eq!(checklist.steps[0].progress, ProgressInfo::Active);
        assert_eq!(checklist.steps[1].progress, ProgressInfo::Waiting);
    }

    #[test]
    fn test_same_content_ignores_progress() {
        let a = sample();
        let mut b = sample();
        b.mark_first_active();
        assert!(a.same_content(&b));

        b.steps[1].description = "Two minutes".to_string();
        assert!(!a.same_content(&b));
    }
}
