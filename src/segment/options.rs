//! Segmentation options.

/// Keywords that always start a unit.
pub const DEFAULT_KEYWORDS: [&str; 3] = ["UNIT", "SECTION", "PART"];

/// Options for detecting units in question bank text.
#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    /// Extra unit keywords matched alongside UNIT, SECTION and PART
    /// (case-insensitive, e.g. "CHAPTER")
    pub extra_keywords: Vec<String>,
}

impl SegmentOptions {
    /// Create new segment options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extra unit keyword. Blank keywords are ignored.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let keyword = keyword.trim();
        if !keyword.is_empty() {
            self.extra_keywords.push(keyword.to_string());
        }
        self
    }

    /// Add several extra unit keywords.
    pub fn with_keywords<I, S>(self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        keywords
            .into_iter()
            .fold(self, |options, k| options.with_keyword(k))
    }

    /// All keywords in match order: built-ins first.
    pub fn keywords(&self) -> Vec<&str> {
        DEFAULT_KEYWORDS
            .iter()
            .copied()
            .chain(self.extra_keywords.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        assert_eq!(SegmentOptions::new().keywords(), vec!["UNIT", "SECTION", "PART"]);
    }

    #[test]
    fn test_extra_keywords() {
        let options = SegmentOptions::new().with_keywords(["Chapter", "  ", " Module "]);
        assert_eq!(
            options.keywords(),
            vec!["UNIT", "SECTION", "PART", "Chapter", "Module"]
        );
    }
}
