//! Built-in style sheets
//!
//! Token colors follow the well-known highlighting themes of the same
//! names. Every sheet gets the default ANSI palette when it is resolved
//! by the manager.

use super::style::{Color, Style, TokenStyle};
use super::tokens::TokenType;

/// Style used when none is requested
pub const DEFAULT_STYLE: &str = "friendly";

/// Names of all built-in style sheets
pub const STYLE_NAMES: &[&str] = &["bw", "default", "friendly", "monokai", "solarized-light"];

/// Build a built-in style sheet by name
pub fn find_style(name: &str) -> Option<Style> {
    match name {
        "bw" => Some(bw()),
        "default" => Some(default_style()),
        "friendly" => Some(friendly()),
        "monokai" => Some(monokai()),
        "solarized-light" => Some(solarized_light()),
        _ => None,
    }
}

fn page_colors(mut style: Style, background: &str, highlight: &str, line_number: Option<&str>) -> Style {
    style.background_color = Color::from_hex(background);
    style.highlight_color = Color::from_hex(highlight);
    style.line_number_color = line_number.and_then(Color::from_hex);
    style
}

fn friendly() -> Style {
    let style = Style::new("friendly")
        .with(TokenType::Comment, TokenStyle::hex("#60a0b0").with_italic())
        .with(TokenType::Preprocessor, TokenStyle::hex("#007020"))
        .with(TokenType::Keyword, TokenStyle::hex("#007020").with_bold())
        .with(TokenType::Type, TokenStyle::hex("#902000"))
        .with(TokenType::Operator, TokenStyle::hex("#666666"))
        .with(TokenType::Function, TokenStyle::hex("#06287e"))
        .with(TokenType::Module, TokenStyle::hex("#0e84b5").with_bold())
        .with(TokenType::Constant, TokenStyle::hex("#60add5"))
        .with(TokenType::Label, TokenStyle::hex("#002070").with_bold())
        .with(TokenType::Attribute, TokenStyle::hex("#555555").with_bold())
        .with(TokenType::Macro, TokenStyle::hex("#007020"))
        .with(TokenType::String, TokenStyle::hex("#4070a0"))
        .with(TokenType::Special, TokenStyle::hex("#4070a0").with_bold())
        .with(TokenType::Number, TokenStyle::hex("#40a070"));
    page_colors(style, "#f0f0f0", "#ffffcc", Some("#666666"))
}

fn default_style() -> Style {
    let style = Style::new("default")
        .with(TokenType::Comment, TokenStyle::hex("#3d7b7b").with_italic())
        .with(TokenType::Preprocessor, TokenStyle::hex("#9c6500"))
        .with(TokenType::Keyword, TokenStyle::hex("#008000").with_bold())
        .with(TokenType::Type, TokenStyle::hex("#b00040"))
        .with(TokenType::Operator, TokenStyle::hex("#666666"))
        .with(TokenType::Function, TokenStyle::hex("#0000ff"))
        .with(TokenType::Module, TokenStyle::hex("#0000ff").with_bold())
        .with(TokenType::Constant, TokenStyle::hex("#880000"))
        .with(TokenType::Label, TokenStyle::hex("#767600"))
        .with(TokenType::Attribute, TokenStyle::hex("#aa22ff"))
        .with(TokenType::Macro, TokenStyle::hex("#008000"))
        .with(TokenType::String, TokenStyle::hex("#ba2121"))
        .with(TokenType::Special, TokenStyle::hex("#aa5d1f").with_bold())
        .with(TokenType::Number, TokenStyle::hex("#666666"));
    page_colors(style, "#f8f8f8", "#ffffcc", None)
}

fn monokai() -> Style {
    let style = Style::new("monokai")
        .with(TokenType::Text, TokenStyle::hex("#f8f8f2"))
        .with(TokenType::Punctuation, TokenStyle::hex("#f8f8f2"))
        .with(TokenType::Comment, TokenStyle::hex("#959077"))
        .with(TokenType::Preprocessor, TokenStyle::hex("#959077"))
        .with(TokenType::Keyword, TokenStyle::hex("#66d9ef"))
        .with(TokenType::Type, TokenStyle::hex("#66d9ef"))
        .with(TokenType::Operator, TokenStyle::hex("#ff4689"))
        .with(TokenType::Function, TokenStyle::hex("#a6e22e"))
        .with(TokenType::Module, TokenStyle::hex("#f8f8f2"))
        .with(TokenType::Constant, TokenStyle::hex("#66d9ef"))
        .with(TokenType::Label, TokenStyle::hex("#f8f8f2"))
        .with(TokenType::Attribute, TokenStyle::hex("#a6e22e"))
        .with(TokenType::String, TokenStyle::hex("#e6db74"))
        .with(TokenType::Special, TokenStyle::hex("#ae81ff"))
        .with(TokenType::Number, TokenStyle::hex("#ae81ff"));
    page_colors(style, "#272822", "#49483e", None)
}

fn bw() -> Style {
    let style = Style::new("bw")
        .with(TokenType::Comment, TokenStyle::default().with_italic())
        .with(TokenType::Preprocessor, TokenStyle::default())
        .with(TokenType::Keyword, TokenStyle::default().with_bold())
        .with(TokenType::Type, TokenStyle::default())
        .with(TokenType::Module, TokenStyle::default().with_bold())
        .with(TokenType::Attribute, TokenStyle::default().with_bold())
        .with(TokenType::String, TokenStyle::default().with_italic())
        .with(TokenType::Special, TokenStyle::default().with_bold());
    page_colors(style, "#ffffff", "#ffffcc", None)
}

fn solarized_light() -> Style {
    let style = Style::new("solarized-light")
        .with(TokenType::Text, TokenStyle::hex("#657b83"))
        .with(TokenType::Comment, TokenStyle::hex("#93a1a1").with_italic())
        .with(TokenType::Preprocessor, TokenStyle::hex("#d33682"))
        .with(TokenType::Keyword, TokenStyle::hex("#859900"))
        .with(TokenType::Type, TokenStyle::hex("#b58900"))
        .with(TokenType::Operator, TokenStyle::hex("#657b83"))
        .with(TokenType::Function, TokenStyle::hex("#268bd2"))
        .with(TokenType::Module, TokenStyle::hex("#268bd2"))
        .with(TokenType::Constant, TokenStyle::hex("#cb4b16"))
        .with(TokenType::Attribute, TokenStyle::hex("#268bd2"))
        .with(TokenType::String, TokenStyle::hex("#2aa198"))
        .with(TokenType::Special, TokenStyle::hex("#cb4b16"))
        .with(TokenType::Number, TokenStyle::hex("#2aa198"));
    page_colors(style, "#fdf6e3", "#eee8d5", Some("#93a1a1"))
}
