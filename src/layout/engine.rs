//! Pagination of selected units into positioned lines.

use crate::error::Result;
use crate::model::{grand_total, question_line, Line, LineKind, PageBlock, SelectedUnit};

use super::options::LayoutOptions;

/// Text of the header line that opens every unit.
pub const UNIT_HEADER: &str = "Answer the following:";

/// Lays out selected units top to bottom across fixed-size pages.
#[derive(Debug, Clone)]
pub struct PageLayoutEngine {
    options: LayoutOptions,
}

/// Pages under construction and the current baseline.
struct Cursor<'a> {
    options: &'a LayoutOptions,
    pages: Vec<PageBlock>,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(options: &'a LayoutOptions) -> Self {
        Self {
            options,
            pages: vec![PageBlock::new(1)],
            y: options.first_baseline(),
        }
    }

    fn place(&mut self, line: Line) {
        if let Some(page) = self.pages.last_mut() {
            page.push(line);
        }
    }

    fn break_page(&mut self) {
        let number = self.pages.len() as u32 + 1;
        log::debug!("Page break at y={:.1}, starting page {}", self.y, number);
        self.pages.push(PageBlock::new(number));
        self.y = self.options.continuation_baseline();
    }

    fn unit_header(&mut self, subtotal: u128) {
        let line = Line::new(LineKind::UnitHeader, UNIT_HEADER, self.y)
            .with_trailing(format!("{} Marks", subtotal));
        self.place(line);
        self.y -= self.options.header_line_height;
    }
}

impl PageLayoutEngine {
    /// Create an engine after validating the options.
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lay out the selected units.
    ///
    /// The first page opens with the title and the grand total. A unit header
    /// moves to a new page when the cursor is below the header threshold. A
    /// question that falls below the question threshold moves to a new page,
    /// and the unit header is repeated above it, so a header placed just above
    /// the header threshold may close a page on its own.
    pub fn layout(&self, units: &[SelectedUnit]) -> Vec<PageBlock> {
        let options = &self.options;
        let mut cursor = Cursor::new(options);

        let title = Line::new(LineKind::Title, options.title.clone(), cursor.y)
            .with_trailing(format!("Total Marks: {}", grand_total(units)));
        cursor.place(title);
        cursor.y -= options.title_advance;

        for unit in units {
            let subtotal = unit.subtotal();

            if cursor.y < options.header_break_threshold {
                cursor.break_page();
            }
            cursor.unit_header(subtotal);

            for (index, question) in unit.questions.iter().enumerate() {
                if cursor.y < options.question_break_threshold {
                    cursor.break_page();
                    cursor.unit_header(subtotal);
                }
                let line = Line::new(
                    LineKind::Question,
                    question_line(index + 1, question),
                    cursor.y,
                );
                cursor.place(line);
                cursor.y -= options.question_line_height;
            }

            cursor.y -= options.unit_gap;
        }

        log::debug!("Laid out {} units on {} pages", units.len(), cursor.pages.len());
        cursor.pages
    }
}

impl Default for PageLayoutEngine {
    fn default() -> Self {
        Self {
            options: LayoutOptions::default(),
        }
    }
}

/// Lay out selected units with the given options.
pub fn layout(units: &[SelectedUnit], options: &LayoutOptions) -> Result<Vec<PageBlock>> {
    Ok(PageLayoutEngine::new(options.clone())?.layout(units))
}
