//! Page geometry and pagination thresholds.

use crate::error::{Error, Result};

/// A4 in points, as used by common PDF toolkits.
pub const A4: (f32, f32) = (595.2756, 841.8898);

/// US Letter in points.
pub const LETTER: (f32, f32) = (612.0, 792.0);

/// Options for laying out a question paper.
///
/// All distances are in points. The cursor is a baseline measured up from
/// the bottom of the page, so it decreases as lines are placed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Left margin for text and right margin for right-aligned totals
    pub side_margin: f32,

    /// Distance from the top edge to the title baseline on page 1
    pub top_margin: f32,

    /// Distance from the top edge to the first baseline on later pages
    pub continuation_top_margin: f32,

    /// Cursor advance after the title line
    pub title_advance: f32,

    /// A unit header starts a new page when the cursor is below this
    pub header_break_threshold: f32,

    /// A question starts a new page when the cursor is below this
    pub question_break_threshold: f32,

    /// Cursor advance after a unit header
    pub header_line_height: f32,

    /// Cursor advance after a question line
    pub question_line_height: f32,

    /// Extra cursor advance after the last question of a unit
    pub unit_gap: f32,

    /// Paper title shown on the first page
    pub title: String,
}

impl LayoutOptions {
    /// Create new layout options with A4 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Use US Letter pages.
    pub fn letter(self) -> Self {
        self.with_page_size(LETTER.0, LETTER.1)
    }

    /// Set the paper title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the side margin.
    pub fn with_side_margin(mut self, margin: f32) -> Self {
        self.side_margin = margin;
        self
    }

    /// Set the page-break thresholds for unit headers and questions.
    pub fn with_break_thresholds(mut self, header: f32, question: f32) -> Self {
        self.header_break_threshold = header;
        self.question_break_threshold = question;
        self
    }

    /// Set the line heights for unit headers and questions.
    pub fn with_line_heights(mut self, header: f32, question: f32) -> Self {
        self.header_line_height = header;
        self.question_line_height = question;
        self
    }

    /// Baseline of the first line on page 1.
    pub fn first_baseline(&self) -> f32 {
        self.height - self.top_margin
    }

    /// Baseline of the first line on a continuation page.
    pub fn continuation_baseline(&self) -> f32 {
        self.height - self.continuation_top_margin
    }

    /// Check that pagination always makes progress.
    ///
    /// A fresh page must leave room for a unit header followed by one
    /// question, otherwise every line would force another break.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidLayout(format!(
                "page size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if self.header_line_height <= 0.0 || self.question_line_height <= 0.0 {
            return Err(Error::InvalidLayout(
                "line heights must be positive".to_string(),
            ));
        }
        if self.side_margin * 2.0 >= self.width {
            return Err(Error::InvalidLayout(format!(
                "side margin {} leaves no room on a {} wide page",
                self.side_margin, self.width
            )));
        }
        let top = self.continuation_baseline();
        if top < self.header_break_threshold
            || top - self.header_line_height < self.question_break_threshold
        {
            return Err(Error::InvalidLayout(format!(
                "continuation baseline {} leaves no room for a unit header and a question",
                top
            )));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: A4.0,
            height: A4.1,
            side_margin: 50.0,
            top_margin: 50.0,
            continuation_top_margin: 80.0,
            title_advance: 40.0,
            header_break_threshold: 100.0,
            question_break_threshold: 80.0,
            header_line_height: 25.0,
            question_line_height: 18.0,
            unit_gap: 20.0,
            title: "Question Paper".to_string(),
        }
    }
}
