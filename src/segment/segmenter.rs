//! Splits question bank text into units and questions.
//!
//! Unit boundaries are keyword labels such as "UNIT 2", "SECTION A" or
//! "PART - IV". Each boundary owns the text up to the next boundary. Inside
//! that text the numbering convention used most often wins a vote, and the
//! text is cut at every marker of the winning convention.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::model::{Unit, UnitBoundary};

use super::options::SegmentOptions;
use super::pattern::{CandidatePattern, PatternSet, PatternVote};

/// Separator between a keyword and its label: optional hyphen, en dash,
/// em dash or colon, with optional whitespace on both sides.
const SEPARATOR: &str = r"\s*(?:-|–|—|:)?\s*";

/// Label after the keyword. Roman numerals are tried before single letters
/// so that "UNIT IV" keeps its whole label.
const LABEL: &str = r"(?:\d+|[IVXLC]+\b|[A-Z])";

/// Segmenter for the built-in keywords, compiled once.
///
/// Every pattern is a fixed literal or an escaped keyword, so compilation
/// cannot fail.
static DEFAULT_SEGMENTER: LazyLock<Segmenter> = LazyLock::new(|| {
    Segmenter::with_options(SegmentOptions::default()).expect("Invalid built-in segment regex")
});

/// Detailed segmentation result for one unit.
#[derive(Debug, Clone, Serialize)]
pub struct UnitReport {
    /// The matched boundary
    pub boundary: UnitBoundary,
    /// Byte range of the unit's content in the source text
    pub span: Range<usize>,
    /// Pattern match counts within the content
    pub vote: PatternVote,
    /// The winning pattern
    pub pattern: CandidatePattern,
    /// The resulting unit
    pub unit: Unit,
}

/// Question bank segmenter.
#[derive(Debug, Clone)]
pub struct Segmenter {
    boundary: Regex,
    patterns: PatternSet,
}

impl Segmenter {
    /// Create a segmenter with the built-in keywords.
    pub fn new() -> Self {
        DEFAULT_SEGMENTER.clone()
    }

    /// Create a segmenter with custom options.
    pub fn with_options(options: SegmentOptions) -> Result<Self> {
        let keywords = options
            .keywords()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let boundary = Regex::new(&format!(r"(?i)\b(?:{}){}{}", keywords, SEPARATOR, LABEL))?;

        Ok(Self {
            boundary,
            patterns: PatternSet::new()?,
        })
    }

    /// Find all unit boundaries in document order.
    pub fn boundaries(&self, text: &str) -> Vec<UnitBoundary> {
        self.boundary
            .find_iter(text)
            .map(|m| UnitBoundary {
                label: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Count every candidate pattern in a unit's content.
    pub fn vote(&self, content: &str) -> PatternVote {
        self.patterns.vote(content)
    }

    /// Cut `content` into questions at every marker of `pattern`.
    ///
    /// Text before the first marker is dropped, as are markers followed only
    /// by whitespace.
    pub fn split_questions(&self, content: &str, pattern: CandidatePattern) -> Vec<String> {
        let markers: Vec<_> = self.patterns.matcher(pattern).find_iter(content).collect();

        markers
            .iter()
            .enumerate()
            .filter_map(|(i, marker)| {
                let body_end = markers.get(i + 1).map_or(content.len(), |next| next.start());
                let body = content[marker.end()..body_end].trim();
                if body.is_empty() {
                    None
                } else {
                    Some(format!("{} {}", marker.as_str(), body))
                }
            })
            .collect()
    }

    /// Segment text into units, keeping the per-unit vote and span.
    pub fn segment_detailed(&self, text: &str) -> Vec<UnitReport> {
        let boundaries = self.boundaries(text);
        log::debug!("Found {} unit boundaries", boundaries.len());

        let mut reports = Vec::with_capacity(boundaries.len());
        for (i, boundary) in boundaries.iter().enumerate() {
            let end = boundaries.get(i + 1).map_or(text.len(), |next| next.start);
            let span = boundary.end..end;
            let content = text[span.clone()].trim();

            let vote = self.vote(content);
            let pattern = vote.winner();
            let questions = self.split_questions(content, pattern);
            log::debug!(
                "{}: {} questions using {} pattern",
                boundary.label.trim(),
                questions.len(),
                pattern
            );

            reports.push(UnitReport {
                unit: Unit {
                    name: boundary.label.trim().to_string(),
                    questions,
                },
                boundary: boundary.clone(),
                span,
                vote,
                pattern,
            });
        }

        reports
    }

    /// Segment text into units of questions.
    ///
    /// Returns an empty list when no unit boundary is found. A unit whose
    /// content has no question markers has no questions.
    pub fn segment(&self, text: &str) -> Vec<Unit> {
        self.segment_detailed(text)
            .into_iter()
            .map(|report| report.unit)
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
