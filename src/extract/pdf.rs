//! PDF text extraction using lopdf.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};

use super::options::{ErrorMode, ExtractOptions};

/// Reads the text of every selected page of a PDF.
pub struct PdfTextExtractor {
    doc: LopdfDocument,
    options: ExtractOptions,
}

impl PdfTextExtractor {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let doc = LopdfDocument::load(path)?;
        Ok(Self::with_document(doc, options))
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8], options: ExtractOptions) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::with_document(doc, options))
    }

    fn with_document(doc: LopdfDocument, options: ExtractOptions) -> Self {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; extracted text may be incomplete");
        }
        Self { doc, options }
    }

    /// Total number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Extract the text of the selected pages, joined with newlines.
    pub fn extract(&self) -> Result<String> {
        let mut page_texts = Vec::new();

        for page_num in self.doc.get_pages().keys().copied() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match self.doc.extract_text(&[page_num]) {
                Ok(text) => page_texts.push(text),
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(Error::TextExtract(format!("Page {}: {}", page_num, e)));
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        log::debug!("Extracted text from {} pages", page_texts.len());
        Ok(join_pages(page_texts))
    }
}

/// Concatenate page texts, each followed by a newline.
///
/// Pages that yielded no text contribute nothing.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    text
}
