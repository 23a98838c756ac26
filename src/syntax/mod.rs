//! Syntax and styling module
//!
//! This module provides the tokenizing and styling infrastructure:
//! - Lexers for the built-in languages and colored terminal output
//! - Style sheets mapping token types to CSS
//! - The manager that resolves both by name

mod ansi;
mod builtin;
mod language;
mod lexer;
mod manager;
mod rules;
mod style;
mod themes;
mod tokens;

pub use ansi::{AnsiColor, AnsiState};
pub use language::LanguageDefinition;
pub use lexer::{Lexer, Tokens, ANSI_LANGUAGE};
pub use manager::SyntaxManager;
pub use rules::LineState;
pub use style::{Color, Style, TokenStyle, DEFAULT_HIGHLIGHT_COLOR};
pub use themes::{DEFAULT_STYLE, STYLE_NAMES};
pub use tokens::{Token, TokenType};
