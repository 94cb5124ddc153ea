//! Rendering of question papers to PDF and preview formats.

mod json;
mod markdown;
mod metrics;
mod pdf;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
pub use metrics::bold_text_width;
pub use pdf::{to_pdf, write_pdf};
pub use text::{to_text, TextPreviewOptions};
