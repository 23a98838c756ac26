//! Lexers: the tokenizing pass
//!
//! A [`Lexer`] turns raw text into a lazy stream of typed tokens whose
//! texts concatenate back to the input.

use std::sync::Arc;

use super::ansi::AnsiTokens;
use super::language::{LanguageDefinition, LanguageTokens};
use super::tokens::{Token, TokenType};

/// Name of the pseudo-language for colored terminal output
pub const ANSI_LANGUAGE: &str = "ansi-color";

/// Selected tokenizer for one render call
#[derive(Clone)]
pub enum Lexer {
    /// No highlighting: the whole text is one `Text` token
    Plain,
    /// Terminal output with SGR color sequences
    Ansi,
    /// A regex-based language definition
    Language(Arc<LanguageDefinition>),
}

impl Lexer {
    /// Display name of this lexer
    pub fn name(&self) -> &str {
        match self {
            Lexer::Plain => "Text",
            Lexer::Ansi => ANSI_LANGUAGE,
            Lexer::Language(lang) => &lang.name,
        }
    }

    /// Tokenize text
    pub fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        match self {
            Lexer::Plain => Tokens::Plain((!text.is_empty()).then(|| Token::new(TokenType::Text, text))),
            Lexer::Ansi => Tokens::Ansi(AnsiTokens::new(text)),
            Lexer::Language(lang) => Tokens::Language(lang.tokens(text)),
        }
    }
}

impl std::fmt::Debug for Lexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Lexer").field(&self.name()).finish()
    }
}

/// Lazy, restartable token stream
#[derive(Clone)]
pub enum Tokens<'a> {
    Plain(Option<Token<'a>>),
    Ansi(AnsiTokens<'a>),
    Language(LanguageTokens<'a>),
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Tokens::Plain(token) => token.take(),
            Tokens::Ansi(tokens) => tokens.next(),
            Tokens::Language(tokens) => tokens.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxManager;
    use proptest::prelude::*;

    fn joined(lexer: &Lexer, text: &str) -> String {
        lexer.tokens(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_plain_single_token() {
        let tokens: Vec<_> = Lexer::Plain.tokens("a\nb\nc").collect();
        assert_eq!(tokens, vec![Token::new(TokenType::Text, "a\nb\nc")]);
        assert_eq!(Lexer::Plain.tokens("").count(), 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(Lexer::Plain.name(), "Text");
        assert_eq!(Lexer::Ansi.name(), "ansi-color");
    }

    proptest! {
        #[test]
        fn prop_tokens_round_trip(text in "(?s).{0,200}", language in prop_oneof![
            Just(None),
            Just(Some("python")),
            Just(Some("rust")),
            Just(Some("c")),
            Just(Some("toml")),
            Just(Some("markdown")),
            Just(Some("ansi-color")),
        ]) {
            let manager = SyntaxManager::new();
            let lexer = match language {
                None => Lexer::Plain,
                Some(name) => manager.lexer(name).unwrap(),
            };
            prop_assert_eq!(joined(&lexer, &text), text);
        }

        #[test]
        fn prop_code_like_round_trip(text in r#"[a-z0-9 "'/*#\\\n\t{}();=+-]{0,120}"#) {
            let manager = SyntaxManager::new();
            for name in ["python", "rust", "c", "toml", "markdown"] {
                let lexer = manager.lexer(name).unwrap();
                prop_assert_eq!(joined(&lexer, &text), text.clone());
            }
        }
    }
}
