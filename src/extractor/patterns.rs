use crate::error::{LocStringsError, Result};
use regex::Regex;

/// Single-line double-quoted literal; `.` never crosses a newline.
pub const QUOTED_LITERAL: &str = r#""(.+?)""#;

/// Triple-quoted literal, greedy across lines.
pub const MULTILINE_LITERAL: &str = r#""""([\s\S]*)""""#;

/// A regular expression whose first capture group is the extracted text.
#[derive(Debug, Clone)]
pub struct ExtractionPattern {
    regex: Regex,
}

impl ExtractionPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| LocStringsError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self { regex })
    }

    pub fn quoted_literal() -> Result<Self> {
        Self::new(QUOTED_LITERAL)
    }

    pub fn multiline_literal() -> Result<Self> {
        Self::new(MULTILINE_LITERAL)
    }

    /// `name="value"` assignment; the value stops at the nearest closing quote.
    pub fn attribute(name: &str) -> Result<Self> {
        Self::new(&format!(r#"{}="(.+?)""#, regex::escape(name)))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Capture group 1 of every non-overlapping match, in order.
    ///
    /// A capture that is exactly one `"` is dropped; it is what the quoted
    /// literal pattern finds inside `"""` delimiters. Newlines are removed
    /// from the captured text, not replaced.
    pub fn collect(&self, source: &str) -> Vec<String> {
        self.regex
            .captures_iter(source)
            .filter_map(|captures| captures.get(1))
            .map(|capture| capture.as_str())
            .filter(|text| *text != "\"")
            .map(|text| text.replace('\n', ""))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_literal_captures_body() {
        let pattern = ExtractionPattern::quoted_literal().unwrap();
        assert_eq!(pattern.collect(r#"let x = "hello""#), vec!["hello"]);
    }

    #[test]
    fn test_quoted_literal_is_non_greedy() {
        let pattern = ExtractionPattern::quoted_literal().unwrap();
        assert_eq!(pattern.collect(r#"f("one", "two")"#), vec!["one", "two"]);
    }

    #[test]
    fn test_quoted_literal_does_not_cross_lines() {
        let pattern = ExtractionPattern::quoted_literal().unwrap();
        assert!(pattern.collect("let x = \"open\nclose\"").is_empty());
    }

    #[test]
    fn test_lone_quote_is_ignored() {
        let pattern = ExtractionPattern::quoted_literal().unwrap();
        assert!(pattern.collect("\"").is_empty());
        assert!(pattern.collect("let x = \"").is_empty());
    }

    #[test]
    fn test_quoted_literal_skips_triple_quote_delimiters() {
        let pattern = ExtractionPattern::quoted_literal().unwrap();
        assert!(pattern.collect("let x = \"\"\"line1\nline2\"\"\"").is_empty());
    }

    #[test]
    fn test_multiline_literal_strips_newlines() {
        let pattern = ExtractionPattern::multiline_literal().unwrap();
        assert_eq!(
            pattern.collect("let x = \"\"\"line1\nline2\"\"\""),
            vec!["line1line2"]
        );
    }

    #[test]
    fn test_multiline_literal_keeps_carriage_returns() {
        let pattern = ExtractionPattern::multiline_literal().unwrap();
        assert_eq!(
            pattern.collect("\"\"\"\r\nbody\r\n\"\"\""),
            vec!["\rbody\r"]
        );
    }

    #[test]
    fn test_attribute_pattern() {
        let pattern = ExtractionPattern::attribute("title").unwrap();
        assert_eq!(pattern.as_str(), r#"title="(.+?)""#);
        assert_eq!(
            pattern.collect(r#"<button title="OK"/><label title="Cancel"/>"#),
            vec!["OK", "Cancel"]
        );
    }

    #[test]
    fn test_attribute_name_is_escaped() {
        let pattern = ExtractionPattern::attribute("a.b").unwrap();
        assert!(pattern.collect(r#"aXb="no""#).is_empty());
        assert_eq!(pattern.collect(r#"a.b="yes""#), vec!["yes"]);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = ExtractionPattern::new("(unclosed");
        assert!(matches!(result, Err(LocStringsError::Pattern { .. })));
    }
}
