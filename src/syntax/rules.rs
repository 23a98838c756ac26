//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types language definitions are built
//! from. Rules search with `find_at` so that `^` and `\b` see the whole
//! line, not just the remainder being scanned.

use regex::Regex;
use super::tokens::TokenType;

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a token type to the match.
/// Rules are tried in priority order (highest first).
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token type to assign to matches
    pub token_type: TokenType,
    /// Priority (higher = matched first)
    pub priority: i32,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, token_type: TokenType, priority: i32) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            token_type,
            priority,
        })
    }

    /// Find the first non-empty match in text at or after position
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        let mut pos = start;
        while pos < text.len() {
            let m = self.pattern.find_at(text, pos)?;
            if !m.is_empty() {
                return Some((m.start(), m.end()));
            }
            // Step over the empty match to the next char boundary
            pos = m.end() + text[m.end()..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

/// A multi-line construct rule (block comments, strings)
///
/// These rules track state across lines for constructs that
/// can span multiple lines.
pub struct MultilineRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    /// Token type for this construct
    pub token_type: TokenType,
    /// Escape character (usually backslash), if the end can be escaped
    pub escape_char: Option<char>,
    /// Unique ID for this multiline state (1-255, 0 = normal)
    pub state_id: u8,
}

impl MultilineRule {
    /// Create a new multiline rule
    pub fn new(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
    ) -> Option<Self> {
        let start = Regex::new(start_pattern).ok()?;
        let end = Regex::new(end_pattern).ok()?;
        Some(Self {
            name: name.to_string(),
            start,
            end,
            token_type,
            escape_char: None,
            state_id,
        })
    }

    /// Create a multiline rule with escape support
    pub fn with_escape(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
        escape_char: char,
    ) -> Option<Self> {
        let mut rule = Self::new(name, start_pattern, end_pattern, token_type, state_id)?;
        rule.escape_char = Some(escape_char);
        Some(rule)
    }

    /// Check whether this construct starts exactly at position
    pub fn starts_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        self.start
            .find_at(text, pos)
            .filter(|m| m.start() == pos && !m.is_empty())
            .map(|m| m.end())
    }

    /// Find the next start of this construct at or after position
    pub fn find_start(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        self.start.find_at(text, pos).map(|m| m.start())
    }

    /// Find end of this construct in text, respecting escapes
    pub fn find_end(&self, text: &str, start: usize) -> Option<usize> {
        if start >= text.len() {
            return None;
        }

        let Some(escape_char) = self.escape_char else {
            return self.end.find_at(text, start).map(|m| m.end());
        };

        let mut pos = start;
        while pos < text.len() {
            let m = self.end.find_at(text, pos)?;
            let escape_count = text[start..m.start()]
                .chars()
                .rev()
                .take_while(|&c| c == escape_char)
                .count();
            if escape_count % 2 == 1 {
                // Odd number of escapes = escaped
                pos = m.end().max(m.start() + 1);
                continue;
            }
            return Some(m.end());
        }
        None
    }
}

/// Line state for tracking multi-line constructs
///
/// Carried from one line to the next while tokenizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// 0 = normal, non-zero = inside multiline rule with this ID
    pub multiline_id: u8,
}

impl LineState {
    /// Create state for being inside a multiline construct
    pub fn inside(state_id: u8) -> Self {
        Self { multiline_id: state_id }
    }

    /// Check if we're inside a multiline construct
    pub fn is_inside_multiline(&self) -> bool {
        self.multiline_id != 0
    }

    /// Check if we're in normal (no multiline) state
    pub fn is_normal(&self) -> bool {
        self.multiline_id == 0
    }
}

/// A typed byte range within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Token type of the covered text
    pub token_type: TokenType,
}

impl Span {
    pub fn new(start: usize, end: usize, token_type: TokenType) -> Self {
        Self { start, end, token_type }
    }
}

/// Result of highlighting a single line
#[derive(Debug)]
pub struct HighlightResult {
    /// Matched spans, ordered and non-overlapping
    pub spans: Vec<Span>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", TokenType::Number, 50).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at("no numbers", 0), None);
    }

    #[test]
    fn test_pattern_rule_sees_context() {
        let rule = PatternRule::new("integer", r"\b\d+\b", TokenType::Number, 50).unwrap();
        // "42" inside "x42" is not a word on its own
        assert_eq!(rule.find_at("x42 7", 1), Some((4, 5)));

        let anchored = PatternRule::new("header", r"^#.*$", TokenType::Keyword, 50).unwrap();
        assert_eq!(anchored.find_at("a # b", 2), None);
    }

    #[test]
    fn test_empty_matches_ignored() {
        let rule = PatternRule::new("maybe", r"x*", TokenType::Text, 1).unwrap();
        assert_eq!(rule.find_at("abxx", 0), Some((2, 4)));
        assert_eq!(rule.find_at("ab", 0), None);
    }

    #[test]
    fn test_multiline_rule() {
        let rule = MultilineRule::new(
            "block_comment",
            r"/\*",
            r"\*/",
            TokenType::Comment,
            1,
        ).unwrap();

        assert_eq!(rule.starts_at("/* comment */", 0), Some(2));
        assert_eq!(rule.starts_at("x /* comment */", 0), None);
        assert_eq!(rule.find_start("x /* comment */", 0), Some(2));
        assert_eq!(rule.find_end("/* comment */", 2), Some(13));
    }

    #[test]
    fn test_multiline_with_escape() {
        let rule = MultilineRule::with_escape(
            "string",
            r#"""#,
            r#"""#,
            TokenType::String,
            2,
            '\\',
        ).unwrap();

        // Regular end
        assert_eq!(rule.find_end(r#"hello""#, 0), Some(6));
        // Escaped quote
        assert_eq!(rule.find_end(r#"hello\"world""#, 0), Some(13));
        // Escaped backslash before the quote
        assert_eq!(rule.find_end(r#"a\\" b"#, 0), Some(4));
        // Only escaped quotes
        assert_eq!(rule.find_end(r#"a\" b"#, 0), None);
    }

    #[test]
    fn test_line_state() {
        let normal = LineState::default();
        assert!(normal.is_normal());
        assert!(!normal.is_inside_multiline());

        let inside = LineState::inside(1);
        assert!(!inside.is_normal());
        assert!(inside.is_inside_multiline());
    }
}
