//! Page layout for question papers.

mod engine;
mod options;

pub use engine::{layout, PageLayoutEngine, UNIT_HEADER};
pub use options::{LayoutOptions, A4, LETTER};
