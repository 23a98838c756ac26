//! The highlighting pipeline
//!
//! [`Highlighter`] owns the lexer, style and formatter caches and runs one
//! render call: tokenize, style, highlight lines, lay out the table.

use std::borrow::Cow;
use std::sync::Arc;

use crate::attributes::parse_color;
use crate::config::Config;
use crate::error::Result;
use crate::highlight_lines::HighlightSpec;
use crate::html::{FormatterCache, HtmlFormatter};
use crate::syntax::{Lexer, Style, SyntaxManager, DEFAULT_STYLE};

/// Options of one highlight call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Language name or alias, `None` for no highlighting
    pub language: Option<String>,
    /// Style sheet name, `None` for the configured default
    pub style_name: Option<String>,
    /// Lines to highlight
    pub highlight_lines: Option<HighlightSpec>,
    /// Background of highlighted lines, overriding the style's
    pub highlight_lines_color: Option<String>,
}

impl HighlightOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builder: set style name
    pub fn style_name(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = Some(style_name.into());
        self
    }

    /// Builder: set highlighted lines
    pub fn highlight_lines(mut self, spec: HighlightSpec) -> Self {
        self.highlight_lines = Some(spec);
        self
    }

    /// Builder: set highlighted line color
    pub fn highlight_lines_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_lines_color = Some(color.into());
        self
    }
}

/// Rendered table plus the page colors of the style used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    /// The line-numbered table
    pub html: String,
    /// Page background of the style, `None` for transparent
    pub background_color: Option<String>,
    /// Line number color of the style
    pub line_number_color: Option<String>,
}

/// Shared highlighting state
///
/// All caches hold immutable values, so one highlighter can serve any
/// number of render calls, from any number of threads.
pub struct Highlighter {
    syntax: SyntaxManager,
    formatters: FormatterCache,
    config: Config,
}

impl Highlighter {
    /// Create a highlighter with built-in languages and styles only
    pub fn new() -> Self {
        Self {
            syntax: SyntaxManager::new(),
            formatters: FormatterCache::new(),
            config: Config::default(),
        }
    }

    /// Create a highlighter using the defaults and styles of `config`
    ///
    /// The configured highlight color is checked here and stored as hex.
    pub fn with_config(mut config: Config) -> Result<Self> {
        if let Some(color) = &config.highlight_lines_color {
            let resolved = parse_color("highlight-lines-color", color)?;
            config.highlight_lines_color = Some(resolved);
        }
        Ok(Self {
            syntax: SyntaxManager::with_config(&config)?,
            formatters: FormatterCache::new(),
            config,
        })
    }

    /// Syntax manager used for lexer and style lookups
    pub fn syntax(&self) -> &SyntaxManager {
        &self.syntax
    }

    /// Configuration the highlighter was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Style used when a call names none
    pub fn default_style_name(&self) -> &str {
        self.config.style_name.as_deref().unwrap_or(DEFAULT_STYLE)
    }

    /// Resolve a lexer; `None` selects the plain lexer
    pub fn lexer(&self, language: Option<&str>) -> Result<Lexer> {
        match language {
            Some(name) => self.syntax.lexer(name),
            None => Ok(Lexer::Plain),
        }
    }

    /// Resolve a style; `None` selects the default style
    pub fn style(&self, name: Option<&str>) -> Result<Arc<Style>> {
        self.syntax.style(name.unwrap_or_else(|| self.default_style_name()))
    }

    /// Formatter for a style and highlight color
    pub fn formatter(&self, style: &Arc<Style>, highlight_color: Option<&str>) -> Arc<HtmlFormatter> {
        let color = highlight_color.or(self.config.highlight_lines_color.as_deref());
        self.formatters.get(style, color)
    }

    /// Highlight `code` into a line-numbered table
    ///
    /// Line endings are normalized to `\n` and leading and trailing
    /// newlines are removed before tokenizing.
    pub fn highlight(&self, code: &str, options: &HighlightOptions) -> Result<Highlighted> {
        let lexer = self.lexer(options.language.as_deref())?;
        let style = self.style(options.style_name.as_deref())?;
        let formatter = self.formatter(&style, options.highlight_lines_color.as_deref());

        let code = prepare_text(code);
        tracing::trace!(
            lexer = lexer.name(),
            style = %style.name,
            lines = ?options.highlight_lines.as_ref().map(ToString::to_string),
            "highlighting code"
        );
        let html = formatter.format(lexer.tokens(&code), options.highlight_lines.as_ref());

        Ok(Highlighted {
            html,
            background_color: style.background_color.map(|c| c.to_string()),
            line_number_color: style.line_number_color.map(|c| c.to_string()),
        })
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn prepare_text(code: &str) -> Cow<'_, str> {
    if code.contains('\r') {
        let normalized = code.replace("\r\n", "\n").replace('\r', "\n");
        Cow::Owned(normalized.trim_matches('\n').to_string())
    } else {
        Cow::Borrowed(code.trim_matches('\n'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeError;
    use crate::html::HIGHLIGHTED_LINE_CLASS;

    fn spec(s: &str) -> HighlightSpec {
        HighlightSpec::parse(s).unwrap()
    }

    fn code_rows(html: &str) -> Vec<&str> {
        let start = html.find("<pre><span></span>").unwrap() + "<pre><span></span>".len();
        let end = html.rfind("</pre>").unwrap();
        html[start..end].split_inclusive('\n').collect()
    }

    #[test]
    fn test_plain_end_to_end() {
        let highlighter = Highlighter::new();
        let options = HighlightOptions::new().highlight_lines(spec("2"));
        let out = highlighter.highlight("a\nb\nc", &options).unwrap();

        assert_eq!(
            code_rows(&out.html).concat(),
            "a\n<span class=\"pl-code-highlighted-line\" style=\"background-color: #ffffcc\">b\n</span>c\n"
        );
        assert!(out.html.contains("<span class=\"normal\">3</span></pre>"));
        assert_eq!(out.background_color.as_deref(), Some("#f0f0f0"));
        assert_eq!(out.line_number_color.as_deref(), Some("#666666"));
    }

    #[test]
    fn test_out_of_range_lines_ignored() {
        let highlighter = Highlighter::new();
        let options = HighlightOptions::new().highlight_lines(spec("3,10-20"));
        let out = highlighter.highlight("a\nb\nc", &options).unwrap();
        assert_eq!(out.html.matches(HIGHLIGHTED_LINE_CLASS).count(), 1);
    }

    #[test]
    fn test_no_spec_after_spec() {
        let highlighter = Highlighter::new();
        let with = HighlightOptions::new().language("python").highlight_lines(spec("1-2"));
        let first = highlighter.highlight("x = 1\ny = 2", &with).unwrap();
        assert_eq!(first.html.matches(HIGHLIGHTED_LINE_CLASS).count(), 2);

        let without = HighlightOptions::new().language("python");
        let second = highlighter.highlight("x = 1\ny = 2", &without).unwrap();
        assert_eq!(second.html.matches(HIGHLIGHTED_LINE_CLASS).count(), 0);
    }

    #[test]
    fn test_language_tokens_styled() {
        let highlighter = Highlighter::new();
        let options = HighlightOptions::new().language("python");
        let out = highlighter.highlight("def f():\n    return 'x'", &options).unwrap();
        assert!(out.html.contains("<span style=\"color: #007020; font-weight: bold\">def</span>"));
        assert!(out.html.contains("<span style=\"color: #4070a0\">&#x27;x&#x27;</span>"));
    }

    #[test]
    fn test_ansi_output() {
        let highlighter = Highlighter::new();
        let options = HighlightOptions::new().language("ansi-color");
        let out = highlighter.highlight("\x1b[31mFAIL\x1b[0m test_a", &options).unwrap();
        assert!(out.html.contains("<span style=\"color: #c91b00\">FAIL</span> test_a"));
        assert!(!out.html.contains('\x1b'));
    }

    #[test]
    fn test_highlight_color_precedence() {
        let highlighter = Highlighter::with_config(Config {
            highlight_lines_color: Some("#eeeeee".to_string()),
            ..Config::default()
        })
        .unwrap();

        let configured = HighlightOptions::new().highlight_lines(spec("1"));
        let out = highlighter.highlight("a", &configured).unwrap();
        assert!(out.html.contains("background-color: #eeeeee"));

        let explicit = configured.highlight_lines_color("#123456");
        let out = highlighter.highlight("a", &explicit).unwrap();
        assert!(out.html.contains("background-color: #123456"));
    }

    #[test]
    fn test_configured_color_is_checked() {
        let config = Config::parse("highlight-lines-color = \"yellow1\"\n").unwrap();
        let highlighter = Highlighter::with_config(config).unwrap();
        assert_eq!(highlighter.config().highlight_lines_color.as_deref(), Some("#fde3a7"));

        let options = HighlightOptions::new().highlight_lines(spec("1"));
        let out = highlighter.highlight("a", &options).unwrap();
        assert!(out.html.contains("style=\"background-color: #fde3a7\">a"));

        let config = Config::parse("highlight-lines-color = 'red\" onmouseover=\"alert(1)'\n").unwrap();
        assert!(matches!(
            Highlighter::with_config(config),
            Err(CodeError::InvalidColor { ref name, .. }) if name == "highlight-lines-color"
        ));
    }

    #[test]
    fn test_line_endings_and_blank_edges() {
        let highlighter = Highlighter::new();
        let out = highlighter.highlight("\n\na\r\nb\r\n\n", &HighlightOptions::new()).unwrap();
        assert_eq!(code_rows(&out.html), vec!["a\n", "b\n"]);
    }

    #[test]
    fn test_errors() {
        let highlighter = Highlighter::new();
        let bad_language = HighlightOptions::new().language("cobol-2099");
        assert!(matches!(
            highlighter.highlight("x", &bad_language),
            Err(CodeError::UnknownLanguage(_))
        ));
        let bad_style = HighlightOptions::new().style_name("nope");
        assert!(matches!(
            highlighter.highlight("x", &bad_style),
            Err(CodeError::UnknownStyle { .. })
        ));
    }

    #[test]
    fn test_shared_across_threads() {
        let highlighter = Arc::new(Highlighter::new());
        let handles: Vec<_> = (1..=4)
            .map(|line| {
                let highlighter = Arc::clone(&highlighter);
                std::thread::spawn(move || {
                    let options = HighlightOptions::new()
                        .language("rust")
                        .highlight_lines(spec(&line.to_string()));
                    let out = highlighter.highlight("a\nb\nc\nd", &options).unwrap();
                    let highlighted = code_rows(&out.html)
                        .iter()
                        .position(|r| r.contains(HIGHLIGHTED_LINE_CLASS));
                    (line, highlighted)
                })
            })
            .collect();

        for handle in handles {
            let (line, highlighted) = handle.join().unwrap();
            assert_eq!(highlighted, Some(line - 1));
        }
    }
}
