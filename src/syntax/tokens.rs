//! Token types for syntax highlighting
//!
//! This module defines the semantic token types that lexers emit and
//! that style sheets map to visual presentation.

use super::ansi::AnsiState;

/// Semantic token types for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Source code comments (// or /* */)
    Comment,
    /// String literals ("..." or '...')
    String,
    /// Character literals
    Char,
    /// Numeric literals (integers, floats)
    Number,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Type names (String, i32, etc.)
    Type,
    /// Function names
    Function,
    /// Operators (+, -, *, /, etc.)
    Operator,
    /// Punctuation (, ; : etc.)
    Punctuation,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Macros (println!, vec!)
    Macro,
    /// Constants and enum variants
    Constant,
    /// Special tokens (escape sequences, etc.)
    Special,
    /// Attributes (#[derive], @decorator)
    Attribute,
    /// Lifetime annotations ('a)
    Lifetime,
    /// Module/namespace names
    Module,
    /// Labels and gotos
    Label,
    /// Plain text, including whitespace and newlines
    Text,
    /// Visible text colored by terminal escape sequences
    Ansi(AnsiState),
    /// A terminal escape sequence; never rendered
    Escape,
}

impl TokenType {
    /// Token type whose style applies when this one has none of its own
    pub fn parent(&self) -> Option<TokenType> {
        match self {
            TokenType::Char => Some(TokenType::String),
            TokenType::Macro => Some(TokenType::Function),
            TokenType::Lifetime => Some(TokenType::Label),
            TokenType::Module => Some(TokenType::Type),
            _ => None,
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "Comment",
            TokenType::String => "String",
            TokenType::Char => "Char",
            TokenType::Number => "Number",
            TokenType::Keyword => "Keyword",
            TokenType::Type => "Type",
            TokenType::Function => "Function",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
            TokenType::Preprocessor => "Preprocessor",
            TokenType::Macro => "Macro",
            TokenType::Constant => "Constant",
            TokenType::Special => "Special",
            TokenType::Attribute => "Attribute",
            TokenType::Lifetime => "Lifetime",
            TokenType::Module => "Module",
            TokenType::Label => "Label",
            TokenType::Text => "Text",
            TokenType::Ansi(_) => "Ansi",
            TokenType::Escape => "Escape",
        }
    }

    /// Parse a token type from a string name (for TOML style tables)
    ///
    /// Only the grammar-level types can be named; ANSI tokens are
    /// styled through the ANSI palette instead.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Comment" => Some(TokenType::Comment),
            "String" => Some(TokenType::String),
            "Char" => Some(TokenType::Char),
            "Number" => Some(TokenType::Number),
            "Keyword" => Some(TokenType::Keyword),
            "Type" => Some(TokenType::Type),
            "Function" => Some(TokenType::Function),
            "Operator" => Some(TokenType::Operator),
            "Punctuation" => Some(TokenType::Punctuation),
            "Preprocessor" => Some(TokenType::Preprocessor),
            "Macro" => Some(TokenType::Macro),
            "Constant" => Some(TokenType::Constant),
            "Special" => Some(TokenType::Special),
            "Attribute" => Some(TokenType::Attribute),
            "Lifetime" => Some(TokenType::Lifetime),
            "Module" => Some(TokenType::Module),
            "Label" => Some(TokenType::Label),
            "Text" => Some(TokenType::Text),
            _ => None,
        }
    }
}

/// A lexed piece of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(token_type: TokenType, text: &'a str) -> Self {
        Self { token_type, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        let types = [
            TokenType::Comment,
            TokenType::String,
            TokenType::Keyword,
            TokenType::Text,
        ];
        for token_type in types {
            let name = token_type.name();
            let parsed = TokenType::from_name(name);
            assert_eq!(parsed, Some(token_type));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("InvalidType"), None);
        assert_eq!(TokenType::from_name("Ansi"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_parents() {
        assert_eq!(TokenType::Char.parent(), Some(TokenType::String));
        assert_eq!(TokenType::Keyword.parent(), None);
        assert_eq!(TokenType::Text.parent(), None);
    }
}
