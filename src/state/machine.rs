//! Linear progression cursor over a checklist

use crate::models::{Checklist, ProgressInfo, Step};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    #[error("step index {index} is out of range for a checklist of {len} steps")]
    OutOfRange { index: usize, len: usize },

    #[error("checklist has no steps")]
    EmptyChecklist,
}

/// Progress through a checklist.
///
/// `current_step` is always in `0..=len`; `len` means every step is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    checklist: Checklist,
    current_step: usize,
}

impl State {
    /// Start at the first step
    pub fn new(checklist: Checklist) -> Result<Self, StateError> {
        Self::with_start(checklist, 0)
    }

    /// Start at `start`, which may equal the step count (already complete)
    pub fn with_start(checklist: Checklist, start: usize) -> Result<Self, StateError> {
        if checklist.is_empty() {
            return Err(StateError::EmptyChecklist);
        }
        if start > checklist.len() {
            return Err(StateError::OutOfRange {
                index: start,
                len: checklist.len(),
            });
        }

        Ok(Self {
            checklist,
            current_step: start,
        })
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn title(&self) -> &str {
        &self.checklist.title
    }

    pub fn steps(&self) -> &[Step] {
        &self.checklist.steps
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Advance past the active step. No-op once complete.
    pub fn confirm(&mut self) {
        if self.current_step < self.checklist.len() {
            self.current_step += 1;
        }
    }

    /// The step awaiting confirmation
    pub fn active_step(&self) -> Result<&Step, StateError> {
        self.checklist
            .get(self.current_step)
            .ok_or(StateError::OutOfRange {
                index: self.current_step,
                len: self.checklist.len(),
            })
    }

    pub fn is_terminal(&self) -> bool {
        self.current_step == self.checklist.len()
    }

    /// Status of the step at `index`, derived from the cursor
    pub fn step_status(&self, index: usize) -> ProgressInfo {
        if index < self.current_step {
            ProgressInfo::Finished
        } else if index == self.current_step {
            ProgressInfo::Active
        } else {
            ProgressInfo::Waiting
        }
    }

    /// Every step paired with its index and derived status
    pub fn steps_with_status(&self) -> impl Iterator<Item = (usize, &Step, ProgressInfo)> + '_ {
        self.checklist
            .steps
            .iter()
            .enumerate()
            .map(move |(i, step)| (i, step, self.step_status(i)))
    }

    /// `(confirmed, total)`
    pub fn progress(&self) -> (usize, usize) {
        (self.current_step, self.checklist.len())
    }

    pub fn remaining(&self) -> usize {
        self.checklist.len() - self.current_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LevelInfo;

    fn checklist(n: usize) -> Checklist {
        let steps = (1..=n)
            .map(|i| Step::new(format!("Step {}", i), None, LevelInfo::Normal))
            .collect();
        Checklist::new("Test", steps, "test.txt")
    }

    #[test]
    fn test_new_starts_at_zero() {
        let state = State::new(checklist(3)).unwrap();
        assert_eq!(state.current_step(), 0);
        assert!(!state.is_terminal());
        assert_eq!(state.active_step().unwrap().label, "Step 1");
        assert_eq!(state.title(), "Test");
    }

    #[test]
    fn test_empty_checklist_rejected() {
        assert_eq!(
            State::new(checklist(0)).unwrap_err(),
            StateError::EmptyChecklist
        );
    }

    #[test]
    fn test_with_start_bounds() {
        let state = State::with_start(checklist(2), 2).unwrap();
        assert!(state.is_terminal());

        assert_eq!(
            State::with_start(checklist(2), 3).unwrap_err(),
            StateError::OutOfRange { index: 3, len: 2 }
        );
    }

    #[test]
    fn test_confirm_reaches_terminal() {
        let mut state = State::new(checklist(3)).unwrap();

        for expected in ["Step 1", "Step 2", "Step 3"] {
            assert_eq!(state.active_step().unwrap().label, expected);
            state.confirm();
        }

        assert!(state.is_terminal());
        assert_eq!(state.current_step(), 3);

        state.confirm();
        assert!(state.is_terminal());
        assert_eq!(state.current_step(), 3);
    }

    #[test]
    fn test_active_step_out_of_range_when_terminal() {
        let mut state = State::new(checklist(1)).unwrap();
        state.confirm();

        assert_eq!(
            state.active_step().unwrap_err(),
            StateError::OutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_derived_status() {
        let mut state = State::new(checklist(3)).unwrap();
        state.confirm();

        let statuses: Vec<_> = state.steps_with_status().map(|(_, _, s)| s).collect();
        assert_eq!(
            statuses,
            vec![
                ProgressInfo::Finished,
                ProgressInfo::Active,
                ProgressInfo::Waiting
            ]
        );

        // stored tags are left alone
        assert!(state
            .steps()
            .iter()
            .all(|s| s.progress == ProgressInfo::Waiting));
    }

    #[test]
    fn test_progress_counts() {
        let mut state = State::new(checklist(4)).unwrap();
        state.confirm();
        state.confirm();
        assert_eq!(state.progress(), (2, 4));
        assert_eq!(state.remaining(), 2);
    }
}
