//! Style types for HTML rendering
//!
//! A [`Style`] is a fully resolved style sheet: every table it needs
//! (token colors, ANSI palette, page colors) is merged when the sheet is
//! built, and the sheet is never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use super::ansi::AnsiColor;
use super::tokens::TokenType;

/// Fallback background for highlighted lines
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#b3d7ff";

/// An RGB color, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self::rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Visual attributes of one token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenStyle {
    /// Foreground color
    pub color: Option<Color>,
    /// Background color
    pub background: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl TokenStyle {
    /// Create a style from a `#rrggbb` literal known to be valid
    pub(crate) fn hex(hex: &str) -> Self {
        Self {
            color: Color::from_hex(hex),
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Render as an inline CSS declaration list
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(color) = self.color {
            parts.push(format!("color: {}", color));
        }
        if self.bold {
            parts.push("font-weight: bold".to_string());
        }
        if self.italic {
            parts.push("font-style: italic".to_string());
        }
        if self.underline {
            parts.push("text-decoration: underline".to_string());
        }
        if let Some(background) = self.background {
            parts.push(format!("background-color: {}", background));
        }
        parts.join("; ")
    }

    /// Parse a style definition such as `"bold italic #902000 bg:#fff0f0"`
    ///
    /// Words prefixed with `no` clear the attribute they name, which lets an
    /// extension table undo something the base style set.
    pub fn parse_into(mut self, definition: &str) -> Option<Self> {
        for word in definition.split_whitespace() {
            match word {
                "bold" => self.bold = true,
                "nobold" => self.bold = false,
                "italic" => self.italic = true,
                "noitalic" => self.italic = false,
                "underline" => self.underline = true,
                "nounderline" => self.underline = false,
                "noinherit" => self = Self::default(),
                _ => {
                    if let Some(bg) = word.strip_prefix("bg:") {
                        self.background = Some(Color::from_hex(bg)?);
                    } else {
                        self.color = Some(Color::from_hex(word)?);
                    }
                }
            }
        }
        Some(self)
    }
}

/// A resolved style sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Style name (e.g., "friendly", "monokai")
    pub name: String,
    /// Page background, `None` for transparent
    pub background_color: Option<Color>,
    /// Default background for highlighted lines
    pub highlight_color: Option<Color>,
    /// Color of the line number gutter
    pub line_number_color: Option<Color>,
    /// Per-token styles
    tokens: HashMap<TokenType, TokenStyle>,
    /// Terminal palette used by the `ansi-color` language
    ansi: HashMap<AnsiColor, Color>,
}

impl Style {
    /// Create a new empty style sheet
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            background_color: None,
            highlight_color: None,
            line_number_color: None,
            tokens: HashMap::new(),
            ansi: HashMap::new(),
        }
    }

    /// Set the style of a token type
    pub fn set(&mut self, token_type: TokenType, style: TokenStyle) {
        self.tokens.insert(token_type, style);
    }

    /// Builder form of [`Style::set`]
    pub fn with(mut self, token_type: TokenType, style: TokenStyle) -> Self {
        self.set(token_type, style);
        self
    }

    /// Merge a terminal palette over the current one
    pub fn extend_ansi(&mut self, palette: impl IntoIterator<Item = (AnsiColor, Color)>) {
        self.ansi.extend(palette);
    }

    /// Merge token styles over the current ones
    pub fn extend_tokens(&mut self, styles: impl IntoIterator<Item = (TokenType, TokenStyle)>) {
        self.tokens.extend(styles);
    }

    /// Own style of a token type, falling back to its parents
    fn own_style(&self, token_type: TokenType) -> Option<TokenStyle> {
        let mut current = Some(token_type);
        while let Some(token_type) = current {
            if let Some(style) = self.tokens.get(&token_type) {
                return Some(*style);
            }
            current = token_type.parent();
        }
        None
    }

    /// Resolve the style of a token type
    pub fn style_for(&self, token_type: TokenType) -> TokenStyle {
        match token_type {
            TokenType::Escape => TokenStyle::default(),
            TokenType::Ansi(state) => TokenStyle {
                color: state.fg.and_then(|c| self.ansi.get(&c).copied()),
                background: state.bg.and_then(|c| self.ansi.get(&c).copied()),
                bold: state.bold,
                ..Default::default()
            },
            _ => self.own_style(token_type).unwrap_or_default(),
        }
    }

    /// Current style of a token type, for building extensions on top of it
    pub fn token_style(&self, token_type: TokenType) -> TokenStyle {
        self.own_style(token_type).unwrap_or_default()
    }

    /// Background for highlighted lines, with the caller's color taking precedence
    pub fn resolve_highlight_color(&self, requested: Option<&str>) -> String {
        match requested {
            Some(color) => color.to_string(),
            None => self
                .highlight_color
                .map(|c| c.to_string())
                .unwrap_or_else(|| DEFAULT_HIGHLIGHT_COLOR.to_string()),
        }
    }
}
