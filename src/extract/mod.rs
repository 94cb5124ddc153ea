//! Question bank text extraction.
//!
//! PDFs are read page by page; plain-text files are taken as they are.
//! The result is a single string handed to the segmenter.

mod options;
mod pdf;

pub use options::{ErrorMode, ExtractOptions, PageSelection};
pub use pdf::{join_pages, PdfTextExtractor};

use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::detect::{detect_format_from_bytes, InputFormat};
use crate::error::{Error, Result};

/// Extract text from a question bank held in memory.
pub fn extract_text_from_bytes(data: &[u8], options: &ExtractOptions) -> Result<String> {
    let format = detect_format_from_bytes(data)?;
    log::debug!("Detected input format: {}", format);

    let text = match format {
        InputFormat::Pdf { .. } => PdfTextExtractor::from_bytes(data, options.clone())?.extract()?,
        InputFormat::Text => std::str::from_utf8(data)
            .map_err(|_| Error::UnknownFormat)?
            .to_string(),
    };

    Ok(normalize(text, options))
}

/// Extract text from a question bank file.
pub fn extract_text<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<String> {
    let data = std::fs::read(path)?;
    extract_text_from_bytes(&data, options)
}

fn normalize(text: String, options: &ExtractOptions) -> String {
    if options.normalize_unicode {
        text.nfc().collect()
    } else {
        text
    }
}
