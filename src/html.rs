//! HTML formatting of token streams
//!
//! The formatter styles tokens with inline CSS, splits them into lines,
//! wraps the requested lines in a highlight container and finally lays the
//! lines out in a line-numbered table.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::highlight_lines::HighlightSpec;
use crate::syntax::{Style, Token, TokenType};

/// Class of the container around a highlighted line
pub const HIGHLIGHTED_LINE_CLASS: &str = "pl-code-highlighted-line";

/// Escape text for inclusion in HTML
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Replace HTML character references with the characters they name
///
/// Decodes the full HTML5 named reference set as well as decimal and
/// hexadecimal numeric references. Unknown references are kept as is.
pub fn unescape(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Kind of an item in the formatted line stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A complete rendered source line
    Line,
    /// Wrapper markup
    Other,
}

/// One item of the formatted line stream
pub type StyledLine = (LineKind, String);

/// Renders token streams as HTML with one style sheet
///
/// A formatter never changes after construction; the lines to highlight
/// are passed to every call.
#[derive(Debug)]
pub struct HtmlFormatter {
    style: Arc<Style>,
    highlight_color: String,
}

impl HtmlFormatter {
    /// Create a formatter; `highlight_color` overrides the style's own
    pub fn new(style: Arc<Style>, highlight_color: Option<&str>) -> Self {
        let highlight_color = style.resolve_highlight_color(highlight_color);
        Self { style, highlight_color }
    }

    /// Style sheet used by this formatter
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Background color of highlighted lines
    pub fn highlight_color(&self) -> &str {
        &self.highlight_color
    }

    /// Style tokens and split them into lines
    ///
    /// Escape sequences render as nothing. Every line ends with `\n`.
    /// Text that does not end with a newline still closes its last line,
    /// and empty text is one empty line.
    pub fn format_lines<'a>(&self, tokens: impl IntoIterator<Item = Token<'a>>) -> Vec<StyledLine> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for token in tokens {
            if token.token_type == TokenType::Escape {
                continue;
            }
            let css = self.style.style_for(token.token_type).to_css();
            let mut pieces = token.text.split('\n');
            if let Some(first) = pieces.next() {
                push_piece(&mut current, &css, first);
            }
            for piece in pieces {
                current.push('\n');
                lines.push((LineKind::Line, std::mem::take(&mut current)));
                push_piece(&mut current, &css, piece);
            }
        }

        if !current.is_empty() || lines.is_empty() {
            current.push('\n');
            lines.push((LineKind::Line, current));
        }
        lines
    }

    /// Wrap the requested lines in a highlight container
    ///
    /// Items are counted from zero across the whole stream; item `i` is
    /// wrapped when `i + 1` is in `spec`. Non-line items pass through and
    /// numbers past the end of the stream are ignored.
    pub fn highlight_lines<'s, I>(&'s self, lines: I, spec: &'s HighlightSpec) -> impl Iterator<Item = StyledLine> + 's
    where
        I: IntoIterator<Item = StyledLine>,
        I::IntoIter: 's,
    {
        lines.into_iter().enumerate().map(move |(i, (kind, value))| {
            if kind == LineKind::Line && spec.contains(i + 1) {
                let wrapped = format!(
                    "<span class=\"{}\" style=\"background-color: {}\">{}</span>",
                    HIGHLIGHTED_LINE_CLASS, self.highlight_color, value
                );
                (LineKind::Line, wrapped)
            } else {
                (kind, value)
            }
        })
    }

    /// Lay lines out in a table with a line number column
    ///
    /// Line numbers are always present; callers hide the column with CSS.
    pub fn wrap_table(&self, lines: impl IntoIterator<Item = StyledLine>) -> String {
        let mut code = String::new();
        let mut count = 0;
        for (kind, value) in lines {
            if kind == LineKind::Line {
                count += 1;
            }
            code.push_str(&value);
        }

        let numbers: Vec<String> = (1..=count)
            .map(|n| format!("<span class=\"normal\">{}</span>", n))
            .collect();

        let mut out = String::with_capacity(code.len() + numbers.len() * 32 + 256);
        out.push_str("<table class=\"highlighttable\"><tr>");
        let _ = write!(
            out,
            "<td class=\"linenos\"><div class=\"linenodiv\"><pre>{}</pre></div></td>",
            numbers.join("\n")
        );
        let _ = write!(
            out,
            "<td class=\"code\"><div class=\"highlight\"><pre><span></span>{}</pre></div></td>",
            code
        );
        out.push_str("</tr></table>\n");
        out
    }

    /// Render tokens to the complete table, highlighting the lines in `spec`
    pub fn format<'a>(&self, tokens: impl IntoIterator<Item = Token<'a>>, spec: Option<&HighlightSpec>) -> String {
        let lines = self.format_lines(tokens);
        match spec {
            Some(spec) => self.wrap_table(self.highlight_lines(lines, spec)),
            None => self.wrap_table(lines),
        }
    }
}

fn push_piece(line: &mut String, css: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    let text = escape(text);
    if css.is_empty() {
        line.push_str(&text);
    } else {
        let _ = write!(line, "<span style=\"{}\">{}</span>", css, text);
    }
}

/// Read-through cache of formatters keyed by style name and requested color
#[derive(Debug, Default)]
pub struct FormatterCache {
    formatters: RwLock<HashMap<(String, Option<String>), Arc<HtmlFormatter>>>,
}

impl FormatterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatter for a style and highlight color, building it on first use
    pub fn get(&self, style: &Arc<Style>, highlight_color: Option<&str>) -> Arc<HtmlFormatter> {
        let key = (style.name.clone(), highlight_color.map(str::to_string));
        if let Some(formatter) = self.formatters.read().get(&key) {
            return Arc::clone(formatter);
        }

        tracing::debug!(style = %style.name, color = ?highlight_color, "building formatter");
        let mut formatters = self.formatters.write();
        let formatter = formatters
            .entry(key)
            .or_insert_with(|| Arc::new(HtmlFormatter::new(Arc::clone(style), highlight_color)));
        Arc::clone(formatter)
    }

    /// Number of cached formatters
    pub fn len(&self) -> usize {
        self.formatters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
