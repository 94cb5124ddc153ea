//! Curation snapshot: which questions are selected, edited, and marked.
//!
//! The curation surface owns this state. It hands the core a single
//! immutable [`Selection`] per generation request, keyed by the stable
//! `(unit_index, question_index)` position of each detected question.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Marks, SelectedQuestion, SelectedUnit, Unit};

/// Position of a question in the segmentation result (both 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionKey {
    pub unit: usize,
    pub question: usize,
}

impl QuestionKey {
    pub fn new(unit: usize, question: usize) -> Self {
        Self { unit, question }
    }
}

impl std::fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.unit, self.question)
    }
}

/// The user's choices for one question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionChoice {
    /// Include the question in the paper
    #[serde(default)]
    pub selected: bool,

    /// Replacement text; the detected text is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_text: Option<String>,

    /// Raw marks value as entered
    #[serde(default)]
    pub marks: String,

    /// Detected question text, written by [`Selection::template`] for
    /// reference. Never read back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl QuestionChoice {
    /// A selected question with the given marks.
    pub fn selected(marks: impl Into<String>) -> Self {
        Self {
            selected: true,
            marks: marks.into(),
            ..Self::default()
        }
    }

    /// Replace the question text.
    pub fn with_edit(mut self, text: impl Into<String>) -> Self {
        self.edited_text = Some(text.into());
        self
    }
}

/// Serialized form of one snapshot entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub unit: usize,
    pub question: usize,
    #[serde(flatten)]
    pub choice: QuestionChoice,
}

/// Immutable snapshot of all curation choices for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SelectionEntry>", into = "Vec<SelectionEntry>")]
pub struct Selection {
    choices: BTreeMap<QuestionKey, QuestionChoice>,
}

impl From<Vec<SelectionEntry>> for Selection {
    fn from(entries: Vec<SelectionEntry>) -> Self {
        let choices = entries
            .into_iter()
            .map(|e| (QuestionKey::new(e.unit, e.question), e.choice))
            .collect();
        Self { choices }
    }
}

impl From<Selection> for Vec<SelectionEntry> {
    fn from(selection: Selection) -> Self {
        selection
            .choices
            .into_iter()
            .map(|(key, choice)| SelectionEntry {
                unit: key.unit,
                question: key.question,
                choice,
            })
            .collect()
    }
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unselected entry for every detected question, carrying its text.
    pub fn template(units: &[Unit]) -> Self {
        let mut selection = Self::new();
        for (u, unit) in units.iter().enumerate() {
            for (q, question) in unit.questions.iter().enumerate() {
                selection.choices.insert(
                    QuestionKey::new(u, q),
                    QuestionChoice {
                        original: Some(question.clone()),
                        ..QuestionChoice::default()
                    },
                );
            }
        }
        selection
    }

    /// Record the choice for a question, replacing any earlier one.
    pub fn set(&mut self, key: QuestionKey, choice: QuestionChoice) {
        self.choices.insert(key, choice);
    }

    /// Builder form of [`Selection::set`].
    pub fn with(mut self, unit: usize, question: usize, choice: QuestionChoice) -> Self {
        self.set(QuestionKey::new(unit, question), choice);
        self
    }

    /// Look up the choice for a question.
    pub fn get(&self, key: QuestionKey) -> Option<&QuestionChoice> {
        self.choices.get(&key)
    }

    /// Number of selected questions.
    pub fn selected_count(&self) -> usize {
        self.choices.values().filter(|c| c.selected).count()
    }

    /// Build the selected units for a paper.
    ///
    /// Units and questions keep their detected order. Units with no selected
    /// question are dropped. Keys that point past the detected questions are
    /// ignored.
    pub fn apply(&self, units: &[Unit]) -> Vec<SelectedUnit> {
        for key in self.choices.keys() {
            let known = units
                .get(key.unit)
                .is_some_and(|u| key.question < u.questions.len());
            if !known {
                log::warn!("Ignoring selection for unknown question {}", key);
            }
        }

        units
            .iter()
            .enumerate()
            .filter_map(|(u, unit)| {
                let questions: Vec<SelectedQuestion> = unit
                    .questions
                    .iter()
                    .enumerate()
                    .filter_map(|(q, text)| {
                        let choice = self.choices.get(&QuestionKey::new(u, q))?;
                        if !choice.selected {
                            return None;
                        }
                        Some(SelectedQuestion {
                            text: choice.edited_text.clone().unwrap_or_else(|| text.clone()),
                            marks: Marks::parse(&choice.marks),
                        })
                    })
                    .collect();

                if questions.is_empty() {
                    None
                } else {
                    Some(SelectedUnit::new(unit.name.clone(), questions))
                }
            })
            .collect()
    }
}
