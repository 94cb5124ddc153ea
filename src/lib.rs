//! # qpaper
//!
//! Question bank segmentation and printable question paper generation.
//!
//! This library reads a loosely formatted question bank (PDF or plain text),
//! detects its units and the questions inside them, applies the user's
//! selection and marks, and lays the result out as a paginated paper.
//!
//! ## Quick Start
//!
//! ```no_run
//! use qpaper::{Pipeline, QuestionChoice, Selection};
//!
//! fn main() -> qpaper::Result<()> {
//!     let pipeline = Pipeline::new();
//!     let units = pipeline.units_from_path("question_bank.pdf")?;
//!
//!     // Pick the first question of the first unit, worth 5 marks
//!     let selection = Selection::new().with(0, 0, QuestionChoice::selected("5"));
//!     let paper = pipeline.paper(&units, &selection)?;
//!
//!     std::fs::write("paper.pdf", paper.to_pdf()?)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Unit detection**: UNIT / SECTION / PART labels with digits, letters or
//!   Roman numerals
//! - **Question detection**: the most frequent numbering convention in each
//!   unit wins (`1.`, `1)`, `a)`, `A)`, `(a)`)
//! - **Marks**: digit-only values count toward totals, any value is displayed
//! - **Pagination**: unit headers repeat on overflow pages
//! - **Output**: PDF, plain-text and Markdown previews, JSON

pub mod detect;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, InputFormat};
pub use error::{Error, Result};
pub use extract::{extract_text, extract_text_from_bytes, ErrorMode, ExtractOptions, PageSelection};
pub use layout::{LayoutOptions, PageLayoutEngine};
pub use model::{
    Line, LineKind, Marks, PageBlock, QuestionChoice, QuestionKey, SelectedQuestion, SelectedUnit,
    Selection, Unit, UnitBoundary,
};
pub use pipeline::{Paper, Pipeline};
pub use render::{JsonFormat, TextPreviewOptions};
pub use segment::{CandidatePattern, PatternVote, SegmentOptions, Segmenter, UnitReport};

/// Segment question bank text into units with the built-in keywords.
///
/// Returns an empty list when the text has no unit boundary.
///
/// # Example
///
/// ```
/// let units = qpaper::segment("UNIT 1 1. What is X? 2. What is Y? UNIT 2 a) Define Z.");
/// assert_eq!(units.len(), 2);
/// assert_eq!(units[0].questions, vec!["1. What is X?", "2. What is Y?"]);
/// assert_eq!(units[1].questions, vec!["a) Define Z."]);
/// ```
pub fn segment(text: &str) -> Vec<Unit> {
    Segmenter::new().segment(text)
}

/// Lay out selected units on pages.
///
/// # Example
///
/// ```
/// use qpaper::{LayoutOptions, SelectedQuestion, SelectedUnit};
///
/// let units = vec![SelectedUnit::new(
///     "UNIT 1",
///     vec![SelectedQuestion::new("1. Define X.", "5")],
/// )];
/// let pages = qpaper::layout(&units, &LayoutOptions::default())?;
/// assert_eq!(pages.len(), 1);
/// # Ok::<(), qpaper::Error>(())
/// ```
pub fn layout(units: &[SelectedUnit], options: &LayoutOptions) -> Result<Vec<PageBlock>> {
    layout::layout(units, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_then_layout() {
        let units = segment("SECTION A\n1) Explain caching.\n2) Explain paging.");
        let selection = Selection::new()
            .with(0, 0, QuestionChoice::selected("4"))
            .with(0, 1, QuestionChoice::selected("7a"));
        let selected = selection.apply(&units);

        let pages = layout(&selected, &LayoutOptions::default()).unwrap();
        let questions: Vec<&str> = pages[0]
            .lines_of(LineKind::Question)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            questions,
            vec!["Q1. 1) Explain caching. (4 Marks)", "Q2. 2) Explain paging. (7a Marks)"]
        );
        assert_eq!(
            pages[0].lines[0].trailing.as_deref(),
            Some("Total Marks: 4")
        );
    }

    #[test]
    fn test_segment_without_units() {
        assert!(segment("Just some notes, no headings.").is_empty());
    }
}
