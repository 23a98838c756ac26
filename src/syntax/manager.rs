//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that resolves lexers and style
//! sheets by name. Both are read-through caches: the first request
//! compiles the language or composes the style, later requests share the
//! same immutable `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::ansi::{self, AnsiColor};
use super::builtin;
use super::language::LanguageDefinition;
use super::lexer::{Lexer, ANSI_LANGUAGE};
use super::style::{Color, Style};
use super::themes::{self, DEFAULT_STYLE};
use super::tokens::TokenType;
use crate::config::{Config, StyleConfig};
use crate::error::{CodeError, Result};

/// Main syntax highlighting manager
pub struct SyntaxManager {
    /// Compiled languages, by canonical name
    languages: RwLock<HashMap<&'static str, Arc<LanguageDefinition>>>,
    /// Resolved built-in styles, by name
    styles: RwLock<HashMap<String, Arc<Style>>>,
    /// Styles defined in configuration, resolved at load time
    custom_styles: HashMap<String, Arc<Style>>,
}

impl SyntaxManager {
    /// Create a new syntax manager with built-in languages and styles
    pub fn new() -> Self {
        Self {
            languages: RwLock::new(HashMap::new()),
            styles: RwLock::new(HashMap::new()),
            custom_styles: HashMap::new(),
        }
    }

    /// Create a manager that also knows the styles defined in `config`
    ///
    /// Custom styles are fully composed here, so a broken definition is
    /// reported before anything is rendered.
    pub fn with_config(config: &Config) -> Result<Self> {
        let mut manager = Self::new();
        for (name, style_config) in &config.styles {
            let style = compose_style(name, style_config)?;
            tracing::debug!(style = %name, "composed custom style");
            manager.custom_styles.insert(name.clone(), Arc::new(style));
        }
        Ok(manager)
    }

    /// Resolve a lexer by language name or alias (case-insensitive)
    pub fn lexer(&self, name: &str) -> Result<Lexer> {
        if name.eq_ignore_ascii_case(ANSI_LANGUAGE) {
            return Ok(Lexer::Ansi);
        }

        let canonical = builtin::canonical_name(name)
            .ok_or_else(|| CodeError::UnknownLanguage(name.to_string()))?;

        if let Some(lang) = self.languages.read().get(canonical) {
            return Ok(Lexer::Language(Arc::clone(lang)));
        }

        // Compile outside the lock; a racing caller may win the insert
        let compiled = builtin::build_language(canonical)
            .ok_or_else(|| CodeError::UnknownLanguage(name.to_string()))?;
        tracing::debug!(language = canonical, requested = name, "compiled language definition");

        let mut languages = self.languages.write();
        let lang = languages.entry(canonical).or_insert_with(|| Arc::new(compiled));
        Ok(Lexer::Language(Arc::clone(lang)))
    }

    /// Check whether a language name or alias is known
    pub fn has_language(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(ANSI_LANGUAGE) || builtin::canonical_name(name).is_some()
    }

    /// Resolve a style sheet by name
    pub fn style(&self, name: &str) -> Result<Arc<Style>> {
        if let Some(style) = self.custom_styles.get(name) {
            return Ok(Arc::clone(style));
        }

        if let Some(style) = self.styles.read().get(name) {
            return Ok(Arc::clone(style));
        }

        let mut style = themes::find_style(name).ok_or_else(|| CodeError::UnknownStyle {
            name: name.to_string(),
            available: self.list_styles().join(", "),
        })?;
        style.extend_ansi(ansi::default_palette());
        tracing::debug!(style = name, "resolved built-in style");

        let mut styles = self.styles.write();
        let style = styles.entry(name.to_string()).or_insert_with(|| Arc::new(style));
        Ok(Arc::clone(style))
    }

    /// Check whether a style name is known
    pub fn has_style(&self, name: &str) -> bool {
        self.custom_styles.contains_key(name) || themes::find_style(name).is_some()
    }

    /// List available languages with their aliases
    pub fn list_languages(&self) -> Vec<(&'static str, &'static [&'static str])> {
        let mut languages = builtin::all_languages();
        languages.push(("ANSI color", &[ANSI_LANGUAGE]));
        languages.sort_by_key(|(name, _)| name.to_lowercase());
        languages
    }

    /// List available style names
    pub fn list_styles(&self) -> Vec<String> {
        let mut names: Vec<String> = themes::STYLE_NAMES.iter().map(|s| s.to_string()).collect();
        names.extend(self.custom_styles.keys().cloned());
        names.sort();
        names.dedup();
        names
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a custom style: base sheet, then ANSI palette, then extensions
fn compose_style(name: &str, config: &StyleConfig) -> Result<Style> {
    let invalid = |detail: String| CodeError::InvalidStyle {
        style: name.to_string(),
        detail,
    };
    let color = |field: &str, value: &str| {
        Color::from_hex(value).ok_or_else(|| invalid(format!("{} must be a #rgb or #rrggbb color, got \"{}\"", field, value)))
    };

    let base = config.base.as_deref().unwrap_or(DEFAULT_STYLE);
    let mut style = themes::find_style(base)
        .ok_or_else(|| invalid(format!("unknown base style \"{}\"", base)))?;
    style.name = name.to_string();
    style.extend_ansi(ansi::default_palette());

    if let Some(value) = &config.background {
        style.background_color = Some(color("background", value)?);
    }
    if let Some(value) = &config.highlight {
        style.highlight_color = Some(color("highlight", value)?);
    }
    if let Some(value) = &config.line_number {
        style.line_number_color = Some(color("line-number", value)?);
    }

    // Resolve every override against the base before applying any of them
    let mut overrides = Vec::with_capacity(config.tokens.len());
    for (token_name, definition) in &config.tokens {
        let token_type = TokenType::from_name(token_name)
            .ok_or_else(|| invalid(format!("unknown token type \"{}\"", token_name)))?;
        let token_style = style
            .token_style(token_type)
            .parse_into(definition)
            .ok_or_else(|| invalid(format!("cannot parse \"{}\" for {}", definition, token_name)))?;
        overrides.push((token_type, token_style));
    }
    style.extend_tokens(overrides);

    let mut palette = Vec::with_capacity(config.ansi.len());
    for (color_name, value) in &config.ansi {
        let ansi_color = AnsiColor::from_name(color_name)
            .ok_or_else(|| invalid(format!("unknown ANSI color \"{}\"", color_name)))?;
        palette.push((ansi_color, color(color_name, value)?));
    }
    style.extend_ansi(palette);

    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ansi::AnsiState;

    #[test]
    fn test_lexer_lookup() {
        let manager = SyntaxManager::new();

        assert_eq!(manager.lexer("python").unwrap().name(), "Python");
        assert_eq!(manager.lexer("PY").unwrap().name(), "Python");
        assert_eq!(manager.lexer("ansi-color").unwrap().name(), "ansi-color");
        assert!(matches!(
            manager.lexer("klingon"),
            Err(CodeError::UnknownLanguage(ref name)) if name == "klingon"
        ));
        assert!(manager.has_language("Rust"));
        assert!(!manager.has_language("klingon"));
    }

    #[test]
    fn test_lexer_cache_shares_definition() {
        let manager = SyntaxManager::new();
        let (Lexer::Language(a), Lexer::Language(b)) =
            (manager.lexer("python").unwrap(), manager.lexer("py3").unwrap())
        else {
            panic!("expected language lexers");
        };
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_style_lookup() {
        let manager = SyntaxManager::new();

        let first = manager.style("monokai").unwrap();
        let second = manager.style("monokai").unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let red = AnsiState {
            fg: Some(AnsiColor::Red),
            ..Default::default()
        };
        assert_eq!(first.style_for(TokenType::Ansi(red)).to_css(), "color: #c91b00");

        let err = manager.style("neon").unwrap_err();
        assert!(err.to_string().contains("friendly"));
    }

    #[test]
    fn test_custom_style_composition() {
        let config = Config::parse(
            r##"
[styles.classroom]
base = "friendly"
highlight = "#fff3b0"

[styles.classroom.tokens]
Keyword = "nobold #0000aa"
Comment = "#888888"

[styles.classroom.ansi]
Red = "#ff0000"
"##,
        )
        .unwrap();
        let manager = SyntaxManager::with_config(&config).unwrap();
        let style = manager.style("classroom").unwrap();

        assert_eq!(style.name, "classroom");
        assert_eq!(style.highlight_color, Color::from_hex("#fff3b0"));
        // Inherited from friendly
        assert_eq!(style.background_color, Color::from_hex("#f0f0f0"));
        assert_eq!(style.style_for(TokenType::Keyword).to_css(), "color: #0000aa");
        // Base comment style is italic; the override keeps that
        assert_eq!(style.style_for(TokenType::Comment).to_css(), "color: #888888; font-style: italic");
        let red = AnsiState {
            fg: Some(AnsiColor::Red),
            ..Default::default()
        };
        assert_eq!(style.style_for(TokenType::Ansi(red)).to_css(), "color: #ff0000");
        assert!(manager.list_styles().contains(&"classroom".to_string()));
        assert!(manager.has_style("classroom"));
    }

    #[test]
    fn test_custom_style_errors() {
        let bad_token = Config::parse("[styles.x.tokens]\nKeywrd = \"bold\"\n").unwrap();
        assert!(matches!(
            SyntaxManager::with_config(&bad_token),
            Err(CodeError::InvalidStyle { .. })
        ));

        let bad_base = Config::parse("[styles.x]\nbase = \"nope\"\n").unwrap();
        assert!(SyntaxManager::with_config(&bad_base).is_err());

        let bad_color = Config::parse("[styles.x]\nbackground = \"blue\"\n").unwrap();
        assert!(SyntaxManager::with_config(&bad_color).is_err());
    }

    #[test]
    fn test_list_languages() {
        let manager = SyntaxManager::new();
        let names: Vec<_> = manager.list_languages().into_iter().map(|(name, _)| name).collect();
        assert!(names.contains(&"Python"));
        assert!(names.contains(&"ANSI color"));
    }
}
