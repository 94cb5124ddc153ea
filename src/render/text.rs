//! Plain-text preview of laid-out pages.

use crate::model::{LineKind, PageBlock};

/// Options for the plain-text preview.
#[derive(Debug, Clone)]
pub struct TextPreviewOptions {
    /// Column at which right-aligned totals end
    pub width: usize,

    /// Line written between pages
    pub page_separator: String,
}

impl TextPreviewOptions {
    /// Create new preview options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preview width in columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the line written between pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }
}

impl Default for TextPreviewOptions {
    fn default() -> Self {
        Self {
            width: 80,
            page_separator: "\u{c}".to_string(),
        }
    }
}

/// Render pages as plain text, one output line per layout line.
///
/// A blank line separates units on the same page.
pub fn to_text(pages: &[PageBlock], options: &TextPreviewOptions) -> String {
    let mut output = String::new();

    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            output.push_str(&options.page_separator);
            output.push('\n');
        }

        for (i, line) in page.lines.iter().enumerate() {
            if line.kind == LineKind::UnitHeader && i > 0 {
                output.push('\n');
            }
            let text = line.text.replace('\n', " ");
            match &line.trailing {
                Some(trailing) => {
                    let used = text.chars().count() + trailing.chars().count();
                    let pad = options.width.saturating_sub(used).max(1);
                    output.push_str(&text);
                    output.push_str(&" ".repeat(pad));
                    output.push_str(trailing);
                }
                None => output.push_str(&text),
            }
            output.push('\n');
        }
    }

    output
}
