pub mod checklist;
pub mod level;
pub mod step;

pub use checklist::Checklist;
pub use level::{Language, LevelInfo, ProgressInfo};
pub use step::Step;
