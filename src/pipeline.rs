//! Request/response pipeline from question bank to laid-out paper.
//!
//! Each step reports its own failure so the caller can tell apart an
//! unreadable document, a document with no units, and an empty selection.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::extract::{extract_text, extract_text_from_bytes, ExtractOptions};
use crate::layout::{LayoutOptions, PageLayoutEngine};
use crate::model::{grand_total, PageBlock, SelectedUnit, Selection, Unit};
use crate::render;
use crate::segment::{SegmentOptions, Segmenter};

/// A laid-out question paper ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Paper {
    /// Selected units in detected order
    pub units: Vec<SelectedUnit>,
    /// Sum of numeric marks
    pub total: u128,
    /// Laid-out pages
    pub pages: Vec<PageBlock>,
    #[serde(skip)]
    layout: LayoutOptions,
}

impl Paper {
    /// Render the paper to PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        render::to_pdf(&self.pages, &self.layout)
    }

    /// Render the paginated plain-text preview.
    pub fn to_text(&self, options: &render::TextPreviewOptions) -> String {
        render::to_text(&self.pages, options)
    }

    /// Render the Markdown preview.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.units, &self.layout.title)
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Builder for the question bank to paper pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    extract_options: ExtractOptions,
    segmenter: Segmenter,
    engine: PageLayoutEngine,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            segmenter: Segmenter::new(),
            engine: PageLayoutEngine::default(),
        }
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Set segmentation options.
    pub fn with_segment_options(mut self, options: SegmentOptions) -> Result<Self> {
        self.segmenter = Segmenter::with_options(options)?;
        Ok(self)
    }

    /// Set layout options.
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Result<Self> {
        self.engine = PageLayoutEngine::new(options)?;
        Ok(self)
    }

    /// The segmenter in use.
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Extract text from a file, failing with [`Error::EmptyText`] when the
    /// document yields only whitespace.
    pub fn text_from_path<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        require_text(extract_text(path, &self.extract_options)?)
    }

    /// Extract text from bytes, failing with [`Error::EmptyText`] when the
    /// document yields only whitespace.
    pub fn text_from_bytes(&self, data: &[u8]) -> Result<String> {
        require_text(extract_text_from_bytes(data, &self.extract_options)?)
    }

    /// Segment text into units.
    ///
    /// Fails with [`Error::EmptyText`] for blank text and [`Error::NoUnits`]
    /// when no unit boundary is found.
    pub fn units_from_text(&self, text: &str) -> Result<Vec<Unit>> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        let units = self.segmenter.segment(text);
        if units.is_empty() {
            return Err(Error::NoUnits);
        }
        log::info!("{} units detected", units.len());
        Ok(units)
    }

    /// Extract and segment a file.
    pub fn units_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Unit>> {
        let text = self.text_from_path(path)?;
        self.units_from_text(&text)
    }

    /// Extract and segment an in-memory document.
    pub fn units_from_bytes(&self, data: &[u8]) -> Result<Vec<Unit>> {
        let text = self.text_from_bytes(data)?;
        self.units_from_text(&text)
    }

    /// Apply a selection snapshot and lay out the paper.
    ///
    /// Fails with [`Error::NoSelection`] when no question is selected.
    pub fn paper(&self, units: &[Unit], selection: &Selection) -> Result<Paper> {
        let selected = selection.apply(units);
        if selected.is_empty() {
            return Err(Error::NoSelection);
        }

        let pages = self.engine.layout(&selected);
        Ok(Paper {
            total: grand_total(&selected),
            units: selected,
            pages,
            layout: self.engine.options().clone(),
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn require_text(text: String) -> Result<String> {
    if text.trim().is_empty() {
        Err(Error::EmptyText)
    } else {
        Ok(text)
    }
}
