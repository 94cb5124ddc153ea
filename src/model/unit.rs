//! Units and the questions detected inside them.

use serde::{Deserialize, Serialize};

use super::Marks;

/// A detected unit boundary label and its byte offsets in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitBoundary {
    /// Boundary text exactly as matched (e.g., "UNIT - 2")
    pub label: String,
    /// Byte offset where the match starts
    pub start: usize,
    /// Byte offset just past the match
    pub end: usize,
}

/// A group of questions under one unit heading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Unit {
    /// Trimmed boundary label, used as the unit name
    pub name: String,
    /// Questions in document order, each starting with its marker
    pub questions: Vec<String>,
}

impl Unit {
    /// Create a unit with no questions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Add a question to the unit.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.questions.push(question.into());
        self
    }

    /// Number of questions in the unit.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Whether the unit has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A question chosen for the paper, with its final text and marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedQuestion {
    pub text: String,
    pub marks: Marks,
}

impl SelectedQuestion {
    /// Create a selected question, parsing the raw marks value.
    pub fn new(text: impl Into<String>, marks: &str) -> Self {
        Self {
            text: text.into(),
            marks: Marks::parse(marks),
        }
    }
}

/// A unit with at least one selected question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedUnit {
    pub name: String,
    pub questions: Vec<SelectedQuestion>,
}

impl SelectedUnit {
    /// Create a selected unit.
    pub fn new(name: impl Into<String>, questions: Vec<SelectedQuestion>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    /// Sum of numeric marks in this unit.
    ///
    /// Each value fits in a `u64`, so the `u128` sum is exact.
    pub fn subtotal(&self) -> u128 {
        self.questions
            .iter()
            .map(|q| u128::from(q.marks.points()))
            .sum()
    }
}

/// Sum of numeric marks across all selected units.
pub fn grand_total(units: &[SelectedUnit]) -> u128 {
    units.iter().map(SelectedUnit::subtotal).sum()
}

/// Display line for the `number`-th question of a unit (1-based).
pub fn question_line(number: usize, question: &SelectedQuestion) -> String {
    format!("Q{}. {}{}", number, question.text, question.marks.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_unit() -> SelectedUnit {
        SelectedUnit::new(
            "UNIT 1",
            vec![
                SelectedQuestion::new("1. Define X.", "5"),
                SelectedQuestion::new("2. Explain Y.", "abc"),
                SelectedQuestion::new("3. List Z.", ""),
            ],
        )
    }

    #[test]
    fn test_subtotal_counts_digits_only() {
        assert_eq!(sample_unit().subtotal(), 5);
    }

    #[test]
    fn test_question_lines() {
        let unit = sample_unit();
        let lines: Vec<String> = unit
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| question_line(i + 1, q))
            .collect();
        assert_eq!(lines[0], "Q1. 1. Define X. (5 Marks)");
        assert_eq!(lines[1], "Q2. 2. Explain Y. (abc Marks)");
        assert_eq!(lines[2], "Q3. 3. List Z.");
    }

    #[test]
    fn test_totals_beyond_u64() {
        let max = u64::MAX.to_string();
        let unit = SelectedUnit::new(
            "UNIT 1",
            vec![
                SelectedQuestion::new("1. a", &max),
                SelectedQuestion::new("2. b", "1"),
            ],
        );
        let expected = u128::from(u64::MAX) + 1;
        assert_eq!(unit.subtotal(), expected);
        assert_eq!(grand_total(&[unit.clone(), unit]), expected * 2);
    }

    #[test]
    fn test_grand_total() {
        let other = SelectedUnit::new("UNIT 2", vec![SelectedQuestion::new("a) Q", "10")]);
        assert_eq!(grand_total(&[sample_unit(), other]), 15);
    }
}
