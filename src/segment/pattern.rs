//! Question numbering conventions and the vote that picks one per unit.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A question numbering convention.
///
/// Declaration order matters: when two patterns match equally often, the one
/// declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePattern {
    /// `1.`
    DigitDot,
    /// `1)`
    DigitParen,
    /// `a)`
    LowerParen,
    /// `A)`
    UpperParen,
    /// `(a)`
    ParenthesizedLower,
}

impl CandidatePattern {
    /// All patterns in tie-break order.
    pub const ALL: [CandidatePattern; 5] = [
        CandidatePattern::DigitDot,
        CandidatePattern::DigitParen,
        CandidatePattern::LowerParen,
        CandidatePattern::UpperParen,
        CandidatePattern::ParenthesizedLower,
    ];

    /// Regular expression matching one marker of this pattern.
    pub fn regex_source(self) -> &'static str {
        match self {
            CandidatePattern::DigitDot => r"\d+\.",
            CandidatePattern::DigitParen => r"\d+\)",
            CandidatePattern::LowerParen => r"[a-z]\)",
            CandidatePattern::UpperParen => r"[A-Z]\)",
            CandidatePattern::ParenthesizedLower => r"\([a-z]\)",
        }
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            CandidatePattern::DigitDot => "digit-dot",
            CandidatePattern::DigitParen => "digit-paren",
            CandidatePattern::LowerParen => "lowercase-letter-paren",
            CandidatePattern::UpperParen => "uppercase-letter-paren",
            CandidatePattern::ParenthesizedLower => "parenthesized-lowercase-letter",
        }
    }
}

impl std::fmt::Display for CandidatePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Match counts for every candidate within one unit's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternVote {
    /// `(pattern, count)` in declaration order
    pub counts: Vec<(CandidatePattern, usize)>,
}

impl PatternVote {
    /// The pattern with the highest count; the earliest declared wins ties.
    ///
    /// Always returns a pattern, even when every count is zero, so that
    /// splitting simply finds no markers.
    pub fn winner(&self) -> CandidatePattern {
        let mut best = CandidatePattern::ALL[0];
        let mut best_count = 0;
        for &(pattern, count) in &self.counts {
            if count > best_count {
                best = pattern;
                best_count = count;
            }
        }
        best
    }

    /// Count for a single pattern.
    pub fn count(&self, pattern: CandidatePattern) -> usize {
        self.counts
            .iter()
            .find(|(p, _)| *p == pattern)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}

/// Compiled matchers for all candidate patterns.
#[derive(Debug, Clone)]
pub(crate) struct PatternSet {
    matchers: Vec<(CandidatePattern, Regex)>,
}

impl PatternSet {
    pub(crate) fn new() -> Result<Self> {
        let matchers = CandidatePattern::ALL
            .iter()
            .map(|&p| Ok((p, Regex::new(p.regex_source())?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    /// Count non-overlapping matches of every pattern in `content`.
    pub(crate) fn vote(&self, content: &str) -> PatternVote {
        let counts = self
            .matchers
            .iter()
            .map(|(p, re)| (*p, re.find_iter(content).count()))
            .collect();
        PatternVote { counts }
    }

    pub(crate) fn matcher(&self, pattern: CandidatePattern) -> &Regex {
        // `ALL` lists variants in discriminant order.
        &self.matchers[pattern as usize].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_counts() {
        let set = PatternSet::new().unwrap();
        let vote = set.vote("1. a 2. b (a) c (b) d a) e");
        assert_eq!(vote.count(CandidatePattern::DigitDot), 2);
        // "(a)" and "(b)" also contain "a)" and "b)"
        assert_eq!(vote.count(CandidatePattern::LowerParen), 3);
        assert_eq!(vote.count(CandidatePattern::ParenthesizedLower), 2);
        assert_eq!(vote.winner(), CandidatePattern::LowerParen);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let set = PatternSet::new().unwrap();
        let vote = set.vote("1) one 2) two A) three B) four");
        assert_eq!(vote.count(CandidatePattern::DigitParen), 2);
        assert_eq!(vote.count(CandidatePattern::UpperParen), 2);
        assert_eq!(vote.winner(), CandidatePattern::DigitParen);
    }

    #[test]
    fn test_no_matches_defaults_to_first() {
        let set = PatternSet::new().unwrap();
        let vote = set.vote("no markers here");
        assert!(vote.counts.iter().all(|(_, c)| *c == 0));
        assert_eq!(vote.winner(), CandidatePattern::DigitDot);
    }

    #[test]
    fn test_winner_dominates() {
        let set = PatternSet::new().unwrap();
        let vote = set.vote("A) x B) y 1. z");
        let winner = vote.count(vote.winner());
        assert!(vote.counts.iter().all(|(_, c)| *c <= winner));
    }
}
