//! Integration tests for the question bank to paper pipeline.

use std::fs;

use qpaper::extract::PdfTextExtractor;
use qpaper::layout::UNIT_HEADER;
use qpaper::{
    Error, ExtractOptions, LayoutOptions, LineKind, Pipeline, QuestionChoice, SegmentOptions,
    Selection, TextPreviewOptions,
};
use tempfile::TempDir;

const BANK: &str = "\
Department of Computer Science
Question Bank

UNIT - I
1. Define an operating system.
2. Explain the process life cycle.
3. What is a system call?

UNIT - II
a) Describe paging.
b) Compare paging and segmentation.

SECTION C
1) Explain deadlock avoidance.
2) State the banker's algorithm.
";

/// Bank with `units` units of `per_unit` questions each.
fn large_bank(units: usize, per_unit: usize) -> String {
    let mut text = String::new();
    for u in 1..=units {
        text.push_str(&format!("UNIT {}\n", u));
        for q in 1..=per_unit {
            text.push_str(&format!("{}. Describe topic {} of block {} in detail.\n", q, q, u));
        }
    }
    text
}

fn select_all(selection: &Selection, marks: &str) -> Selection {
    let json = serde_json::to_value(selection).unwrap();
    let entries: Vec<serde_json::Value> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            entry["selected"] = true.into();
            entry["marks"] = marks.into();
            entry
        })
        .collect();
    serde_json::from_value(serde_json::Value::Array(entries)).unwrap()
}

#[test]
fn test_units_from_text_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bank.txt");
    fs::write(&path, BANK).unwrap();

    let units = Pipeline::new().units_from_path(&path).unwrap();
    let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["UNIT - I", "UNIT - II", "SECTION C"]);

    assert_eq!(units[0].question_count(), 3);
    assert_eq!(units[0].questions[1], "2. Explain the process life cycle.");
    assert_eq!(units[1].questions, vec!["a) Describe paging.", "b) Compare paging and segmentation."]);
    assert_eq!(units[2].questions[1], "2) State the banker's algorithm.");
}

#[test]
fn test_department_heading_is_not_a_unit() {
    let units = Pipeline::new().units_from_text(BANK).unwrap();
    assert!(units.iter().all(|u| !u.name.to_lowercase().contains("depart")));
}

#[test]
fn test_template_edit_and_generate() {
    let dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new();
    let units = pipeline.units_from_text(BANK).unwrap();

    // Write the template, then edit it the way a user would
    let template_path = dir.path().join("selection.json");
    fs::write(
        &template_path,
        serde_json::to_string_pretty(&Selection::template(&units)).unwrap(),
    )
    .unwrap();

    let mut entries: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&template_path).unwrap()).unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["original"], "1. Define an operating system.");

    entries[0]["selected"] = true.into();
    entries[0]["marks"] = "5".into();
    entries[4]["selected"] = true.into();
    entries[4]["marks"] = "10".into();
    entries[4]["edited_text"] = "b) Compare paging with segmentation.".into();
    entries[6]["selected"] = true.into();
    entries[6]["marks"] = "2+3".into();
    fs::write(&template_path, serde_json::to_string(&entries).unwrap()).unwrap();

    let selection: Selection =
        serde_json::from_str(&fs::read_to_string(&template_path).unwrap()).unwrap();
    assert_eq!(selection.selected_count(), 3);

    let paper = pipeline.paper(&units, &selection).unwrap();
    assert_eq!(paper.total, 15);
    assert_eq!(paper.units.len(), 3);
    assert_eq!(paper.page_count(), 1);

    let page = &paper.pages[0];
    let headers: Vec<&str> = page
        .lines_of(LineKind::UnitHeader)
        .map(|l| l.trailing.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(headers, vec!["5 Marks", "10 Marks", "0 Marks"]);

    let questions: Vec<&str> = page
        .lines_of(LineKind::Question)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(
        questions,
        vec![
            "Q1. 1. Define an operating system. (5 Marks)",
            "Q1. b) Compare paging with segmentation. (10 Marks)",
            "Q1. 2) State the banker's algorithm. (2+3 Marks)",
        ]
    );

    let pdf_path = dir.path().join("paper.pdf");
    fs::write(&pdf_path, paper.to_pdf().unwrap()).unwrap();
    let bytes = fs::read(&pdf_path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));

    let reader = PdfTextExtractor::open(&pdf_path, ExtractOptions::new()).unwrap();
    assert_eq!(reader.page_count(), 1);
}

#[test]
fn test_large_selection_paginates() {
    let pipeline = Pipeline::new();
    let units = pipeline.units_from_text(&large_bank(3, 30)).unwrap();
    assert_eq!(units.len(), 3);
    assert!(units.iter().all(|u| u.question_count() == 30));

    let selection = select_all(&Selection::template(&units), "2");
    let paper = pipeline.paper(&units, &selection).unwrap();
    assert_eq!(paper.total, 180);
    assert!(paper.page_count() > 1);

    // Every question appears once and in order
    let questions: Vec<String> = paper
        .pages
        .iter()
        .flat_map(|p| p.lines_of(LineKind::Question))
        .map(|l| l.text.clone())
        .collect();
    assert_eq!(questions.len(), 90);
    assert_eq!(questions[0], "Q1. 1. Describe topic 1 of block 1 in detail. (2 Marks)");
    assert_eq!(questions[89], "Q30. 30. Describe topic 30 of block 3 in detail. (2 Marks)");

    // Continuation pages open with a unit header
    for page in &paper.pages[1..] {
        assert_eq!(page.lines[0].kind, LineKind::UnitHeader);
        assert_eq!(page.lines[0].text, UNIT_HEADER);
    }

    let pdf = paper.to_pdf().unwrap();
    let reader = PdfTextExtractor::from_bytes(&pdf, ExtractOptions::new()).unwrap();
    assert_eq!(reader.page_count() as usize, paper.page_count());
}

#[test]
fn test_letter_paper_has_fewer_lines_per_page() {
    let text = large_bank(1, 80);
    let a4 = Pipeline::new();
    let letter = Pipeline::new()
        .with_layout_options(LayoutOptions::new().letter())
        .unwrap();

    let units = a4.units_from_text(&text).unwrap();
    let selection = select_all(&Selection::template(&units), "1");

    let a4_pages = a4.paper(&units, &selection).unwrap().pages;
    let letter_pages = letter.paper(&units, &selection).unwrap().pages;
    let first_page = |pages: &[qpaper::PageBlock]| pages[0].lines_of(LineKind::Question).count();
    assert!(first_page(&letter_pages) < first_page(&a4_pages));
}

#[test]
fn test_previews() {
    let pipeline = Pipeline::new()
        .with_layout_options(LayoutOptions::new().with_title("Mid-Term Exam"))
        .unwrap();
    let units = pipeline.units_from_text(BANK).unwrap();
    let selection = Selection::new()
        .with(0, 2, QuestionChoice::selected("4"))
        .with(2, 0, QuestionChoice::selected("6"));
    let paper = pipeline.paper(&units, &selection).unwrap();

    let text = paper.to_text(&TextPreviewOptions::default());
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("Mid-Term Exam"));
    assert!(first.ends_with("Total Marks: 10"));
    assert!(text.contains("Q1. 3. What is a system call? (4 Marks)"));

    let markdown = paper.to_markdown();
    assert!(markdown.starts_with("### **Mid-Term Exam**"));
    assert!(markdown.contains("**Total Marks: 10**"));
    assert!(markdown.contains("**Answer the following:** **6 Marks**"));
}

#[test]
fn test_large_marks_are_summed_exactly() {
    let pipeline = Pipeline::new();
    let units = pipeline.units_from_text(BANK).unwrap();
    let selection = Selection::new()
        .with(0, 0, QuestionChoice::selected("18446744073709551615"))
        .with(0, 1, QuestionChoice::selected("5"))
        .with(1, 0, QuestionChoice::selected("99999999999999999999"));
    let paper = pipeline.paper(&units, &selection).unwrap();

    // The third value does not fit in 64 bits, so it is shown but not counted
    assert_eq!(paper.total, 18446744073709551620);
    assert_eq!(
        paper.pages[0].lines[0].trailing.as_deref(),
        Some("Total Marks: 18446744073709551620")
    );
    let headers: Vec<&str> = paper.pages[0]
        .lines_of(LineKind::UnitHeader)
        .map(|l| l.trailing.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(headers, vec!["18446744073709551620 Marks", "0 Marks"]);
    assert!(paper.to_markdown().contains("(99999999999999999999 Marks)"));
    assert!(paper.to_pdf().is_ok());
}

#[test]
fn test_extra_keyword_bank() {
    let pipeline = Pipeline::new()
        .with_segment_options(SegmentOptions::new().with_keyword("Module"))
        .unwrap();
    let units = pipeline
        .units_from_text("MODULE 1\n1. Alpha\n2. Beta\nModule 2\nA) Gamma")
        .unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[1].questions, vec!["A) Gamma"]);

    assert!(matches!(
        Pipeline::new().units_from_text("MODULE 1\n1. Alpha"),
        Err(Error::NoUnits)
    ));
}

#[test]
fn test_error_paths() {
    let dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new();

    let blank = dir.path().join("blank.txt");
    fs::write(&blank, "   \n\n").unwrap();
    assert!(matches!(pipeline.units_from_path(&blank), Err(Error::EmptyText)));

    let binary = dir.path().join("scan.bin");
    fs::write(&binary, [0xff, 0xfe, 0x00, 0x81]).unwrap();
    assert!(matches!(pipeline.units_from_path(&binary), Err(Error::UnknownFormat)));

    let missing = dir.path().join("missing.pdf");
    assert!(matches!(pipeline.units_from_path(&missing), Err(Error::Io(_))));

    let units = pipeline.units_from_text(BANK).unwrap();
    let err = pipeline.paper(&units, &Selection::new()).unwrap_err();
    assert_eq!(err.to_string(), "Select at least one question to generate the paper.");
}
