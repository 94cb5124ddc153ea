//! Page-level layout output.

use serde::{Deserialize, Serialize};

/// Role of a line on the page, which decides its font when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Paper title with the grand total
    Title,
    /// "Answer the following:" with the unit subtotal
    UnitHeader,
    /// A numbered question
    Question,
}

/// A positioned line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,

    /// Left-aligned text
    pub text: String,

    /// Right-aligned companion text (totals)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing: Option<String>,

    /// Baseline in points, measured up from the bottom of the page
    pub y: f32,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>, y: f32) -> Self {
        Self {
            kind,
            text: text.into(),
            trailing: None,
            y,
        }
    }

    /// Attach right-aligned text.
    pub fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.trailing = Some(trailing.into());
        self
    }
}

/// One page of laid-out lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    /// Page number (1-indexed)
    pub number: u32,

    /// Lines in top-to-bottom order
    pub lines: Vec<Line>,
}

impl PageBlock {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    /// Add a line to the page.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Lines of the given kind.
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }
}
