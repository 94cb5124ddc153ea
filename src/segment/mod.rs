//! Unit and question detection for unstructured question bank text.

mod options;
mod pattern;
mod segmenter;

pub use options::{SegmentOptions, DEFAULT_KEYWORDS};
pub use pattern::{CandidatePattern, PatternVote};
pub use segmenter::{Segmenter, UnitReport};
