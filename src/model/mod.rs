//! Data model shared by segmentation, curation, and layout.
//!
//! Segmentation produces [`Unit`]s. The curation surface turns them into
//! [`SelectedUnit`]s through a [`Selection`] snapshot, and the layout engine
//! turns those into [`PageBlock`]s.

mod marks;
mod page;
mod selection;
mod unit;

pub use marks::Marks;
pub use page::{Line, LineKind, PageBlock};
pub use selection::{QuestionChoice, QuestionKey, Selection, SelectionEntry};
pub use unit::{grand_total, question_line, SelectedQuestion, SelectedUnit, Unit, UnitBoundary};
