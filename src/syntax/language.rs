//! Language definitions for syntax highlighting
//!
//! This module provides the LanguageDefinition struct that combines
//! pattern rules, multiline rules, and aliases for a programming language,
//! and the lazy token stream it produces over a whole text.

use std::vec;

use super::rules::{HighlightResult, LineState, MultilineRule, PatternRule, Span};
use super::tokens::{Token, TokenType};

/// A complete language definition for syntax highlighting
pub struct LanguageDefinition {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// Lowercase names this language can be requested by (e.g., ["py", "python3"])
    pub aliases: Vec<String>,
    /// Single-line pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    /// Multi-line rules for comments, strings, etc.
    pub multiline_rules: Vec<MultilineRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: vec![name.to_lowercase()],
            patterns: Vec::new(),
            multiline_rules: Vec::new(),
        }
    }

    /// Add an alias
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_lowercase());
    }

    /// Check whether this language answers to a name
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.aliases.iter().any(|alias| *alias == name)
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first); the sort is stable
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a multiline rule
    pub fn add_multiline(&mut self, rule: MultilineRule) {
        self.multiline_rules.push(rule);
    }

    /// Get multiline rule by state ID
    fn get_multiline_rule(&self, state_id: u8) -> Option<&MultilineRule> {
        self.multiline_rules.iter().find(|r| r.state_id == state_id)
    }

    /// Highlight a single line of text (without its newline)
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans and the state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: LineState) -> HighlightResult {
        let mut spans = Vec::new();
        let mut pos = 0;

        // Finish a construct left open by the previous line
        if let Some(rule) = prev_state
            .is_inside_multiline()
            .then(|| self.get_multiline_rule(prev_state.multiline_id))
            .flatten()
        {
            match rule.find_end(text, 0) {
                Some(end_pos) => {
                    spans.push(Span::new(0, end_pos, rule.token_type));
                    pos = end_pos;
                }
                None => {
                    if !text.is_empty() {
                        spans.push(Span::new(0, text.len(), rule.token_type));
                    }
                    return HighlightResult {
                        spans,
                        end_state: prev_state,
                    };
                }
            }
        }

        while pos < text.len() {
            // Multiline constructs starting right here win over patterns
            if let Some((open_end, rule)) = self
                .multiline_rules
                .iter()
                .find_map(|rule| rule.starts_at(text, pos).map(|end| (end, rule)))
            {
                match rule.find_end(text, open_end) {
                    Some(close_pos) => {
                        // Complete construct on this line
                        spans.push(Span::new(pos, close_pos, rule.token_type));
                        pos = close_pos;
                        continue;
                    }
                    None => {
                        // Multiline continues to next line
                        spans.push(Span::new(pos, text.len(), rule.token_type));
                        return HighlightResult {
                            spans,
                            end_state: LineState::inside(rule.state_id),
                        };
                    }
                }
            }

            // Highest priority pattern matching right here
            let mut next_start = text.len();
            let mut matched = None;
            for rule in &self.patterns {
                if let Some((start, end)) = rule.find_at(text, pos) {
                    if start == pos {
                        matched = Some((end, rule.token_type));
                        break;
                    }
                    next_start = next_start.min(start);
                }
            }

            if let Some((end, token_type)) = matched {
                spans.push(Span::new(pos, end, token_type));
                pos = end;
                continue;
            }

            // Nothing here: skip to the next place something could start
            for rule in &self.multiline_rules {
                if let Some(start) = rule.find_start(text, pos + 1) {
                    next_start = next_start.min(start);
                }
            }
            pos = next_start.max(pos + 1);
            while pos < text.len() && !text.is_char_boundary(pos) {
                pos += 1;
            }
        }

        HighlightResult {
            spans,
            end_state: LineState::default(),
        }
    }

    /// Tokenize a whole text lazily, one line at a time
    pub fn tokens<'a>(&'a self, text: &'a str) -> LanguageTokens<'a> {
        LanguageTokens {
            language: self,
            text,
            pos: 0,
            state: LineState::default(),
            pending: Vec::new().into_iter(),
        }
    }
}

/// Lazy token stream produced by a [`LanguageDefinition`]
///
/// Unmatched text between spans becomes `Text`, and each newline is a
/// `Text` token of its own, so the token texts concatenate to the input.
#[derive(Clone)]
pub struct LanguageTokens<'a> {
    language: &'a LanguageDefinition,
    text: &'a str,
    pos: usize,
    state: LineState,
    pending: vec::IntoIter<Token<'a>>,
}

impl<'a> LanguageTokens<'a> {
    /// Lex the next line into the pending queue
    fn lex_line(&mut self) {
        let rest = &self.text[self.pos..];
        let line_len = rest.find('\n').unwrap_or(rest.len());
        let line = &rest[..line_len];

        let result = self.language.highlight_line(line, self.state);
        self.state = result.end_state;

        let mut tokens = Vec::with_capacity(result.spans.len() * 2 + 1);
        let mut cursor = 0;
        for span in result.spans {
            if span.start > cursor {
                tokens.push(Token::new(TokenType::Text, &line[cursor..span.start]));
            }
            tokens.push(Token::new(span.token_type, &line[span.start..span.end]));
            cursor = span.end;
        }
        if cursor < line.len() {
            tokens.push(Token::new(TokenType::Text, &line[cursor..]));
        }
        if line_len < rest.len() {
            tokens.push(Token::new(TokenType::Text, &rest[line_len..line_len + 1]));
            self.pos += line_len + 1;
        } else {
            self.pos += line_len;
        }

        self.pending = tokens.into_iter();
    }
}

impl<'a> Iterator for LanguageTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            self.lex_line();
        }
    }
}
