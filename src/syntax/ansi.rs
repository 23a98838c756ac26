//! Terminal color escape sequences
//!
//! The `ansi-color` pseudo-language reads program output containing SGR
//! escape sequences (`ESC [ ... m`) and turns it into colored tokens.
//! Escape sequences are kept as `Escape` tokens so that token text still
//! concatenates back to the input.

use super::style::Color;
use super::tokens::{Token, TokenType};

/// The default palette as resolved colors
pub fn default_palette() -> impl Iterator<Item = (AnsiColor, Color)> {
    AnsiColor::ALL
        .into_iter()
        .filter_map(|c| Color::from_hex(c.default_hex()).map(|hex| (c, hex)))
}

/// The 16 terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    pub const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Get the palette name of this color
    pub fn name(&self) -> &'static str {
        match self {
            AnsiColor::Black => "Black",
            AnsiColor::Red => "Red",
            AnsiColor::Green => "Green",
            AnsiColor::Yellow => "Yellow",
            AnsiColor::Blue => "Blue",
            AnsiColor::Magenta => "Magenta",
            AnsiColor::Cyan => "Cyan",
            AnsiColor::White => "White",
            AnsiColor::BrightBlack => "BrightBlack",
            AnsiColor::BrightRed => "BrightRed",
            AnsiColor::BrightGreen => "BrightGreen",
            AnsiColor::BrightYellow => "BrightYellow",
            AnsiColor::BrightBlue => "BrightBlue",
            AnsiColor::BrightMagenta => "BrightMagenta",
            AnsiColor::BrightCyan => "BrightCyan",
            AnsiColor::BrightWhite => "BrightWhite",
        }
    }

    /// Parse a palette name (for TOML style tables)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Color for an SGR palette index (0-7 normal, 8-15 bright)
    fn from_index(index: u16) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Default palette, matching the colors used for grader output
    pub fn default_hex(&self) -> &'static str {
        match self {
            AnsiColor::Black => "#000000",
            AnsiColor::Red => "#c91b00",
            AnsiColor::Green => "#00c200",
            AnsiColor::Yellow => "#c7c400",
            AnsiColor::Blue => "#0037da",
            AnsiColor::Magenta => "#c930c7",
            AnsiColor::Cyan => "#00c5c7",
            AnsiColor::White => "#c7c7c7",
            AnsiColor::BrightBlack => "#676767",
            AnsiColor::BrightRed => "#ff6d67",
            AnsiColor::BrightGreen => "#5ff967",
            AnsiColor::BrightYellow => "#fefb67",
            AnsiColor::BrightBlue => "#6871ff",
            AnsiColor::BrightMagenta => "#ff76ff",
            AnsiColor::BrightCyan => "#5ffdff",
            AnsiColor::BrightWhite => "#feffff",
        }
    }
}

/// Current graphic rendition while reading colored output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnsiState {
    pub fg: Option<AnsiColor>,
    pub bg: Option<AnsiColor>,
    pub bold: bool,
}

impl AnsiState {
    /// Check if no rendition is active
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the parameters of one SGR sequence
    fn apply(&mut self, params: &str) {
        let codes: Vec<u16> = if params.is_empty() {
            vec![0]
        } else {
            // An empty parameter means 0; anything unparsable is dropped
            params
                .split(';')
                .filter_map(|p| if p.is_empty() { Some(0) } else { p.parse().ok() })
                .collect()
        };

        let mut iter = codes.into_iter();
        while let Some(code) = iter.next() {
            match code {
                0 => *self = Self::default(),
                1 => self.bold = true,
                22 => self.bold = false,
                30..=37 => self.fg = AnsiColor::from_index(code - 30),
                39 => self.fg = None,
                40..=47 => self.bg = AnsiColor::from_index(code - 40),
                49 => self.bg = None,
                90..=97 => self.fg = AnsiColor::from_index(code - 90 + 8),
                100..=107 => self.bg = AnsiColor::from_index(code - 100 + 8),
                // Extended colors are not supported; skip their arguments.
                38 | 48 => match iter.next() {
                    Some(5) => {
                        iter.next();
                    }
                    Some(2) => {
                        iter.nth(2);
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

/// Lazy token stream over colored terminal output
#[derive(Debug, Clone)]
pub struct AnsiTokens<'a> {
    text: &'a str,
    pos: usize,
    state: AnsiState,
}

impl<'a> AnsiTokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            state: AnsiState::default(),
        }
    }

    /// Length of a control sequence starting at `pos`, if one starts there
    fn sequence_len(&self, pos: usize) -> Option<(usize, u8)> {
        let bytes = self.text.as_bytes();
        if bytes.get(pos) != Some(&0x1b) || bytes.get(pos + 1) != Some(&b'[') {
            return None;
        }
        let mut end = pos + 2;
        while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b';' || bytes[end] == b'?') {
            end += 1;
        }
        match bytes.get(end) {
            Some(&b) if b.is_ascii_alphabetic() => Some((end + 1 - pos, b)),
            _ => None,
        }
    }
}

impl<'a> Iterator for AnsiTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        if let Some((len, final_byte)) = self.sequence_len(start) {
            self.pos += len;
            if final_byte == b'm' {
                self.state.apply(&self.text[start + 2..self.pos - 1]);
            }
            return Some(Token::new(TokenType::Escape, &self.text[start..self.pos]));
        }

        // Always consume the first char, which may be a stray ESC
        let first_len = self.text[start..].chars().next().map_or(1, char::len_utf8);
        let search_from = start + first_len;
        let end = self.text[search_from..]
            .find('\x1b')
            .map_or(self.text.len(), |offset| search_from + offset);
        self.pos = end;

        let token_type = if self.state.is_plain() {
            TokenType::Text
        } else {
            TokenType::Ansi(self.state)
        };
        Some(Token::new(token_type, &self.text[start..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<(TokenType, &str)> {
        AnsiTokens::new(text).map(|t| (t.token_type, t.text)).collect()
    }

    #[test]
    fn test_color_names() {
        for color in AnsiColor::ALL {
            assert_eq!(AnsiColor::from_name(color.name()), Some(color));
        }
        assert_eq!(AnsiColor::from_name("Orange"), None);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(collect("hello"), vec![(TokenType::Text, "hello")]);
        assert_eq!(collect("été"), vec![(TokenType::Text, "été")]);
    }

    #[test]
    fn test_foreground_color() {
        let tokens = collect("\x1b[31merror\x1b[0m done");
        let red = AnsiState {
            fg: Some(AnsiColor::Red),
            ..Default::default()
        };
        assert_eq!(
            tokens,
            vec![
                (TokenType::Escape, "\x1b[31m"),
                (TokenType::Ansi(red), "error"),
                (TokenType::Escape, "\x1b[0m"),
                (TokenType::Text, " done"),
            ]
        );
    }

    #[test]
    fn test_bold_bright_and_background() {
        let tokens = collect("\x1b[1;92;44mok");
        let expected = AnsiState {
            fg: Some(AnsiColor::BrightGreen),
            bg: Some(AnsiColor::Blue),
            bold: true,
        };
        assert_eq!(tokens[1], (TokenType::Ansi(expected), "ok"));
    }

    #[test]
    fn test_empty_params_reset() {
        let tokens = collect("\x1b[33ma\x1b[mb");
        assert_eq!(tokens[3], (TokenType::Text, "b"));
    }

    #[test]
    fn test_oversized_param_ignored() {
        let tokens = collect("\x1b[31m\x1b[99999;1mx");
        let expected = AnsiState {
            fg: Some(AnsiColor::Red),
            bold: true,
            ..Default::default()
        };
        assert_eq!(tokens[2], (TokenType::Ansi(expected), "x"));

        let tokens = collect("\x1b[31m\x1b[1;;mx");
        assert_eq!(tokens[2], (TokenType::Text, "x"));
    }

    #[test]
    fn test_extended_colors_skipped() {
        let tokens = collect("\x1b[38;5;196;1mx");
        let expected = AnsiState {
            bold: true,
            ..Default::default()
        };
        assert_eq!(tokens[1], (TokenType::Ansi(expected), "x"));
    }

    #[test]
    fn test_non_sgr_sequence_and_stray_escape() {
        let tokens = collect("a\x1b[2Kb\x1bc");
        assert_eq!(
            tokens,
            vec![
                (TokenType::Text, "a"),
                (TokenType::Escape, "\x1b[2K"),
                (TokenType::Text, "b"),
                (TokenType::Text, "\x1bc"),
            ]
        );
    }
}
