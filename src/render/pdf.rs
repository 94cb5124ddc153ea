//! PDF output for laid-out question papers.

use std::io::Write;

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as LopdfDocument, Object, ObjectId, Stream};

use crate::error::{Error, Result};
use crate::layout::LayoutOptions;
use crate::model::{Line, LineKind, PageBlock};

use super::metrics::bold_text_width;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

const TITLE_SIZE: f32 = 16.0;
const TOTAL_SIZE: f32 = 12.0;
const HEADER_SIZE: f32 = 13.0;
const QUESTION_SIZE: f32 = 11.0;

/// Render pages to PDF bytes.
pub fn to_pdf(pages: &[PageBlock], options: &LayoutOptions) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_pdf(pages, options, &mut buffer)?;
    Ok(buffer)
}

/// Render pages as a PDF into a writer.
pub fn write_pdf<W: Write>(pages: &[PageBlock], options: &LayoutOptions, out: &mut W) -> Result<()> {
    if pages.is_empty() {
        return Err(Error::Render("no pages to render".to_string()));
    }

    let mut doc = LopdfDocument::with_version("1.4");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary("Helvetica"));
    let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => regular_id,
            BOLD_FONT => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page_operations(page, options),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), options.width.into(), options.height.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = info_dictionary(&mut doc, &options.title);
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    doc.compress();
    doc.save_to(out)?;
    log::debug!("Wrote PDF with {} pages", count);
    Ok(())
}

fn font_dictionary(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn info_dictionary(doc: &mut LopdfDocument, title: &str) -> ObjectId {
    let created = format!("D:{}Z", Utc::now().format("%Y%m%d%H%M%S"));
    doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(title)),
        "Producer" => Object::string_literal(format!("qpaper {}", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(created),
    })
}

/// Content stream operations for one page.
fn page_operations(page: &PageBlock, options: &LayoutOptions) -> Vec<Operation> {
    let mut ops = Vec::new();
    for line in &page.lines {
        let (font, size, trailing_size) = line_fonts(line);
        show_text(&mut ops, font, size, options.side_margin, line.y, &line.text);

        if let Some(trailing) = &line.trailing {
            let right = options.width - options.side_margin;
            let x = right - bold_text_width(trailing, trailing_size);
            show_text(&mut ops, BOLD_FONT, trailing_size, x, line.y, trailing);
        }
    }
    ops
}

/// Font and sizes for a line's text and its right-aligned companion.
fn line_fonts(line: &Line) -> (&'static str, f32, f32) {
    match line.kind {
        LineKind::Title => (BOLD_FONT, TITLE_SIZE, TOTAL_SIZE),
        LineKind::UnitHeader => (BOLD_FONT, HEADER_SIZE, HEADER_SIZE),
        LineKind::Question => (REGULAR_FONT, QUESTION_SIZE, QUESTION_SIZE),
    }
}

fn show_text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(encode_win_ansi(text))],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Encode text for the standard fonts' WinAnsiEncoding.
///
/// Line breaks and tabs become spaces; characters with no WinAnsi code
/// become `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => b' ',
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}
