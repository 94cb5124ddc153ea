//! Markdown preview of a question paper.
//!
//! Mirrors the on-screen review: same grouping, subtotals and total as the
//! printed paper, without pagination.

use crate::layout::UNIT_HEADER;
use crate::model::{grand_total, SelectedUnit};

/// Render selected units as Markdown.
pub fn to_markdown(units: &[SelectedUnit], title: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("### **{}**\n\n", escape(title)));
    output.push_str(&format!("**Total Marks: {}**\n\n", grand_total(units)));
    output.push_str("---\n\n");

    for unit in units {
        output.push_str(&format!(
            "**{}** **{} Marks**\n\n",
            UNIT_HEADER,
            unit.subtotal()
        ));

        for (index, question) in unit.questions.iter().enumerate() {
            let line = format!("**Q{}. {}**", index + 1, escape(&question.text));
            match question.marks.display() {
                Some(marks) => output.push_str(&format!("{} ({} Marks)\n\n", line, escape(marks))),
                None => output.push_str(&format!("{}\n\n", line)),
            }
        }

        output.push_str("---\n\n");
    }

    output.trim_end().to_string()
}

/// Escape Markdown emphasis characters and fold line breaks.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '*' | '_' | '`' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}
