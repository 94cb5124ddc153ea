//! Point values attached to selected questions.

use serde::{Deserialize, Serialize};

/// A user-supplied marks annotation, parsed once from its raw string.
///
/// Only [`Marks::Numeric`] contributes to totals. Display shows the literal
/// value for every non-empty variant, so `"7a"` still prints `(7a Marks)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Marks {
    /// No value entered.
    #[default]
    Empty,
    /// Any non-empty value that is not purely decimal digits.
    NonNumericText(String),
    /// A digits-only value, keeping its literal form for display.
    Numeric { value: u64, literal: String },
}

impl Marks {
    /// Parse a raw marks string.
    ///
    /// The raw value is used as entered; surrounding whitespace makes it
    /// non-numeric, the same as any other non-digit character.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Marks::Empty;
        }
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = raw.parse::<u64>() {
                return Marks::Numeric {
                    value,
                    literal: raw.to_string(),
                };
            }
        }
        Marks::NonNumericText(raw.to_string())
    }

    /// Contribution of this value to unit and paper totals.
    pub fn points(&self) -> u64 {
        match self {
            Marks::Numeric { value, .. } => *value,
            _ => 0,
        }
    }

    /// The literal text to display, or `None` when empty.
    pub fn display(&self) -> Option<&str> {
        match self {
            Marks::Empty => None,
            Marks::NonNumericText(text) => Some(text),
            Marks::Numeric { literal, .. } => Some(literal),
        }
    }

    /// Suffix appended to a question line, e.g. `" (5 Marks)"`.
    pub fn suffix(&self) -> String {
        self.display()
            .map(|m| format!(" ({} Marks)", m))
            .unwrap_or_default()
    }

    /// Whether no value was entered.
    pub fn is_empty(&self) -> bool {
        matches!(self, Marks::Empty)
    }
}

impl From<&str> for Marks {
    fn from(raw: &str) -> Self {
        Marks::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(Marks::parse(""), Marks::Empty);
        assert_eq!(
            Marks::parse("abc"),
            Marks::NonNumericText("abc".to_string())
        );
        assert_eq!(Marks::parse("05").points(), 5);
        assert_eq!(Marks::parse("05").display(), Some("05"));
    }

    #[test]
    fn test_mixed_values_count_zero() {
        assert_eq!(Marks::parse("7a").points(), 0);
        assert_eq!(Marks::parse(" 5").points(), 0);
        assert_eq!(Marks::parse("-3").points(), 0);
        assert_eq!(Marks::parse("7a").suffix(), " (7a Marks)");
    }

    #[test]
    fn test_overflowing_digits_are_text() {
        let marks = Marks::parse("99999999999999999999999");
        assert!(matches!(marks, Marks::NonNumericText(_)));
        assert_eq!(marks.points(), 0);
    }

    #[test]
    fn test_non_ascii_digits_are_text() {
        let marks = Marks::parse("\u{ff15}");
        assert_eq!(marks, Marks::NonNumericText("\u{ff15}".to_string()));
        assert_eq!(marks.points(), 0);
        assert_eq!(marks.suffix(), " (\u{ff15} Marks)");
    }

    #[test]
    fn test_empty_has_no_suffix() {
        assert_eq!(Marks::Empty.suffix(), "");
        assert!(Marks::Empty.is_empty());
    }
}
