pub mod checklist;
pub mod line;

pub use checklist::{
    load_checklist, parse, ChecklistError, ChecklistParser, DescriptionMode, ParseError,
};
pub use line::{classify, ItemLine, Line};
