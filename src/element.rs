//! The code element
//!
//! [`prepare`] validates an element's attributes once, when a page is
//! loaded. [`render`] turns the element into its final HTML.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::attributes::Attributes;
use crate::error::{CodeError, Result};
use crate::highlight_lines::HighlightSpec;
use crate::highlighter::{HighlightOptions, Highlighter};
use crate::html;

/// Attributes an element may carry
pub const ATTRIBUTES: &[&str] = &[
    "language",
    "no-highlight",
    "source-file-name",
    "directory",
    "prevent-select",
    "highlight-lines",
    "highlight-lines-color",
    "copy-code-button",
    "style",
    "style-name",
    "show-line-numbers",
    "normalize-whitespace",
];

/// Directory used when `source-file-name` is given without `directory`
pub const DEFAULT_DIRECTORY: &str = ".";

/// A code element: its attributes and the markup written inside it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub attributes: Attributes,
    pub inner_html: String,
}

impl Element {
    pub fn new(inner_html: impl Into<String>) -> Self {
        Self {
            attributes: Attributes::new(),
            inner_html: inner_html.into(),
        }
    }

    /// Builder: add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

/// Where `source-file-name` paths are resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePaths {
    /// Directory of the question being rendered
    pub question_path: PathBuf,
    /// Course files only readable by the server (`serverFilesCourse`)
    pub server_files_course_path: PathBuf,
    /// Course files also served to clients (`clientFilesCourse`)
    pub client_files_course_path: PathBuf,
}

impl CoursePaths {
    /// Resolve a `directory` attribute value
    pub fn resolve(&self, directory: &str) -> PathBuf {
        match directory {
            "serverFilesCourse" => self.server_files_course_path.clone(),
            "clientFilesCourse" => self.client_files_course_path.clone(),
            _ => self.question_path.join(directory),
        }
    }
}

/// Fully resolved element options
#[derive(Debug, Clone, PartialEq, Eq)]
struct ElementOptions {
    highlight: HighlightOptions,
    source_file_name: Option<String>,
    directory: String,
    prevent_select: bool,
    copy_code_button: bool,
    show_line_numbers: bool,
    normalize_whitespace: bool,
}

impl ElementOptions {
    /// Read every attribute, falling back to the configured defaults
    fn from_element(element: &Element, highlighter: &Highlighter) -> Result<Self> {
        let attributes = &element.attributes;
        let config = highlighter.config();

        if attributes.has("style") && attributes.has("style-name") {
            return Err(CodeError::ConflictingAttributes("style", "style-name"));
        }
        if attributes.has("style") {
            tracing::warn!("the \"style\" attribute is deprecated, use \"style-name\"");
        }

        let mut language = attributes.get("language").map(str::to_string);
        if attributes.get_bool("no-highlight", false)? {
            tracing::warn!("the \"no-highlight\" attribute is deprecated, omit \"language\" instead");
            language = None;
        }

        let style_name = attributes
            .get("style-name")
            .or_else(|| attributes.get("style"))
            .unwrap_or_else(|| highlighter.default_style_name())
            .to_string();

        let highlight_lines = attributes
            .get("highlight-lines")
            .map(str::parse::<HighlightSpec>)
            .transpose()?;

        let highlight_lines_color =
            attributes.get_color("highlight-lines-color", config.highlight_lines_color.as_deref())?;

        Ok(Self {
            highlight: HighlightOptions {
                language,
                style_name: Some(style_name),
                highlight_lines,
                highlight_lines_color,
            },
            source_file_name: attributes.get("source-file-name").map(str::to_string),
            directory: attributes.get("directory").unwrap_or(DEFAULT_DIRECTORY).to_string(),
            prevent_select: attributes.get_bool("prevent-select", config.prevent_select)?,
            copy_code_button: attributes.get_bool("copy-code-button", config.copy_code_button)?,
            show_line_numbers: attributes.get_bool("show-line-numbers", config.show_line_numbers)?,
            normalize_whitespace: attributes.get_bool("normalize-whitespace", config.normalize_whitespace)?,
        })
    }
}

/// Validate an element's attributes
///
/// Every error `render` could raise from attributes alone is raised here.
pub fn prepare(element: &Element, highlighter: &Highlighter) -> Result<()> {
    let result = check(element, highlighter);
    if let Err(err) = &result {
        tracing::debug!(error = %err, "element failed validation");
    }
    result
}

fn check(element: &Element, highlighter: &Highlighter) -> Result<()> {
    element.attributes.check(ATTRIBUTES)?;
    let options = ElementOptions::from_element(element, highlighter)?;

    if let Some(language) = element.attributes.get("language") {
        highlighter.syntax().lexer(language)?;
    }
    if let Some(style_name) = &options.highlight.style_name {
        highlighter.syntax().style(style_name)?;
    }
    if options.source_file_name.is_some() && !element.inner_html.trim().is_empty() {
        return Err(CodeError::InlineCodeWithSourceFile);
    }
    Ok(())
}

/// Render an element to HTML
pub fn render(element: &Element, highlighter: &Highlighter, paths: &CoursePaths) -> Result<String> {
    let options = ElementOptions::from_element(element, highlighter)?;

    let code = match &options.source_file_name {
        Some(name) => {
            let path = paths.resolve(&options.directory).join(name);
            load_source_file(&path)?
        }
        None => {
            let inline = element.inner_html.as_str();
            let inline = inline.strip_prefix('\r').unwrap_or(inline);
            inline.strip_prefix('\n').unwrap_or(inline).to_string()
        }
    };
    let code = if options.normalize_whitespace {
        normalize_whitespace(&code)
    } else {
        code
    };
    // Inline code is markup; file contents are taken literally
    let code = match options.source_file_name {
        Some(_) => code,
        None => html::unescape(&code).into_owned(),
    };

    let highlighted = highlighter.highlight(&code, &options.highlight)?;
    tracing::debug!(
        language = options.highlight.language.as_deref().unwrap_or("none"),
        bytes = highlighted.html.len(),
        "rendered code element"
    );

    let shell = ElementShell {
        id: element_id(),
        code: highlighted.html,
        prevent_select: options.prevent_select,
        background_color: highlighted.background_color.unwrap_or_else(|| "transparent".to_string()),
        line_number_color: highlighted.line_number_color,
        show_line_numbers: options.show_line_numbers,
        copy_code_button: options.copy_code_button,
    };
    Ok(shell.render())
}

/// Read a source file, dropping one trailing line ending
fn load_source_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CodeError::SourceFileNotFound(path.display().to_string()));
    }
    let mut text = fs::read_to_string(path)?;
    if text.ends_with('\n') {
        text.pop();
    }
    if text.ends_with('\r') {
        text.pop();
    }
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source file");
    Ok(text)
}

/// Remove the common leading whitespace of all lines, then trailing whitespace
///
/// Lines holding only whitespace do not count towards the common prefix
/// and come out empty.
pub fn normalize_whitespace(text: &str) -> String {
    let is_blank = |line: &str| line.trim().is_empty();
    let indent = |line: &str| -> usize { line.len() - line.trim_start_matches([' ', '\t']).len() };

    let mut margin: Option<&str> = None;
    for line in text.split('\n').filter(|l| !is_blank(l)) {
        let current = &line[..indent(line)];
        margin = Some(match margin {
            None => current,
            Some(m) => {
                let common = m
                    .bytes()
                    .zip(current.bytes())
                    .take_while(|(a, b)| a == b)
                    .count();
                &m[..common]
            }
        });
    }
    let margin = margin.unwrap_or("");

    let dedented: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect();
    dedented.join("\n").trim_end().to_string()
}

/// Fresh element id; starts with a letter so it is a valid CSS selector
fn element_id() -> String {
    let id = Uuid::new_v4();
    let letter = b"abcdef"[usize::from(id.as_bytes()[15]) % 6] as char;
    let text = id.hyphenated().to_string();
    format!("{}{}", letter, &text[1..])
}

/// The outer markup around a highlighted table
struct ElementShell {
    id: String,
    code: String,
    prevent_select: bool,
    background_color: String,
    line_number_color: Option<String>,
    show_line_numbers: bool,
    copy_code_button: bool,
}

impl ElementShell {
    fn render(&self) -> String {
        let mut classes = String::from("pl-code");
        if self.prevent_select {
            classes.push_str(" pl-code-prevent-select");
        }
        if self.show_line_numbers {
            classes.push_str(" pl-code-show-line-numbers");
        }

        let mut style = format!("--pl-code-background-color: {};", self.background_color);
        if let Some(color) = &self.line_number_color {
            let _ = write!(style, " --pl-code-line-number-color: {};", color);
        }

        let mut out = String::with_capacity(self.code.len() + 512);
        let _ = writeln!(
            out,
            "<div id=\"pl-code-{}\" class=\"{}\" style=\"{}\">",
            self.id, classes, style
        );
        if self.copy_code_button {
            let _ = writeln!(
                out,
                "  <button type=\"button\" class=\"btn btn-sm btn-light pl-code-copy-button\" \
                 data-clipboard-target=\"#pl-code-{}-source\" aria-label=\"Copy code\">Copy</button>",
                self.id
            );
        }
        let _ = writeln!(
            out,
            "  <div id=\"pl-code-{}-source\" class=\"pl-code-container\">{}</div>",
            self.id,
            self.code.trim_end()
        );
        out.push_str("</div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::html::HIGHLIGHTED_LINE_CLASS;

    fn render_inline(element: &Element) -> Result<String> {
        let highlighter = Highlighter::new();
        prepare(element, &highlighter)?;
        render(element, &highlighter, &CoursePaths::default())
    }

    #[test]
    fn test_prepare_accepts_valid_element() {
        let highlighter = Highlighter::new();
        let element = Element::new("x = 1")
            .attr("language", "python")
            .attr("style_name", "monokai")
            .attr("highlight-lines", "1")
            .attr("highlight-lines-color", "yellow1")
            .attr("show-line-numbers", "true");
        assert!(prepare(&element, &highlighter).is_ok());
    }

    #[test]
    fn test_prepare_errors() {
        let highlighter = Highlighter::new();
        let fails = |element: Element| prepare(&element, &highlighter).unwrap_err();

        assert!(matches!(
            fails(Element::new("").attr("colour", "red")),
            CodeError::UnknownAttribute(_)
        ));
        assert!(matches!(
            fails(Element::new("").attr("language", "brainfork")),
            CodeError::UnknownLanguage(_)
        ));
        assert!(matches!(
            fails(Element::new("").attr("style", "bw").attr("style-name", "bw")),
            CodeError::ConflictingAttributes("style", "style-name")
        ));
        assert!(matches!(
            fails(Element::new("").attr("style-name", "neon")),
            CodeError::UnknownStyle { .. }
        ));
        assert!(matches!(
            fails(Element::new("print(1)").attr("source-file-name", "a.py")),
            CodeError::InlineCodeWithSourceFile
        ));
        assert!(matches!(
            fails(Element::new("").attr("highlight-lines", "1-2-3")),
            CodeError::InvalidHighlightLines(_)
        ));
        assert!(matches!(
            fails(Element::new("").attr("copy-code-button", "sure")),
            CodeError::InvalidBoolean { .. }
        ));
        assert!(matches!(
            fails(Element::new("").attr("highlight-lines-color", "#12")),
            CodeError::InvalidColor { .. }
        ));
    }

    #[test]
    fn test_whitespace_only_inline_allowed_with_source_file() {
        let highlighter = Highlighter::new();
        let element = Element::new("\n   \n").attr("source-file-name", "a.py");
        assert!(prepare(&element, &highlighter).is_ok());
    }

    #[test]
    fn test_render_inline() {
        let element = Element::new("\n&lt;b&gt;\nsecond")
            .attr("highlight-lines", "2")
            .attr("prevent-select", "yes")
            .attr("copy-code-button", "true");
        let out = render_inline(&element).unwrap();

        assert!(out.starts_with("<div id=\"pl-code-"));
        assert!(out.ends_with("</div>"));
        assert!(out.contains("class=\"pl-code pl-code-prevent-select\""));
        assert!(out.contains("--pl-code-background-color: #f0f0f0; --pl-code-line-number-color: #666666;"));
        assert!(out.contains("pl-code-copy-button"));
        assert!(out.contains("<pre><span></span>&lt;b&gt;\n<span class=\"pl-code-highlighted-line\""));
        assert_eq!(out.matches(HIGHLIGHTED_LINE_CLASS).count(), 1);
    }

    #[test]
    fn test_render_inline_named_entities() {
        let out = render_inline(&Element::new("a &rarr; b &copy; &times;")).unwrap();
        assert!(out.contains("<pre><span></span>a \u{2192} b \u{a9} \u{d7}\n</pre>"));
        assert!(!out.contains("&amp;"));

        // Decoded once, so an escaped reference stays visible as text
        let out = render_inline(&Element::new("&amp;rarr;")).unwrap();
        assert!(out.contains("<pre><span></span>&amp;rarr;\n</pre>"));
    }

    #[test]
    fn test_render_uses_config() {
        let config = Config::parse(
            "style-name = \"paper\"\nshow-line-numbers = true\n\n[styles.paper]\nbase = \"bw\"\nhighlight = \"#fafad2\"\n",
        )
        .unwrap();
        let highlighter = Highlighter::with_config(config).unwrap();

        let element = Element::new("x\ny").attr("highlight-lines", "1");
        prepare(&element, &highlighter).unwrap();
        let out = render(&element, &highlighter, &CoursePaths::default()).unwrap();
        assert!(out.contains("--pl-code-background-color: #ffffff;"));
        assert!(out.contains("pl-code-show-line-numbers"));
        assert!(out.contains("background-color: #fafad2"));

        let hidden = element.attr("show-line-numbers", "false");
        let out = render(&hidden, &highlighter, &CoursePaths::default()).unwrap();
        assert!(!out.contains("pl-code-show-line-numbers"));
    }

    #[test]
    fn test_no_highlight_drops_language() {
        let element = Element::new("def f(): pass")
            .attr("language", "python")
            .attr("no-highlight", "true");
        let out = render_inline(&element).unwrap();
        assert!(out.contains("<pre><span></span>def f(): pass\n</pre>"));
    }

    #[test]
    fn test_render_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let question = dir.path().join("question");
        fs::create_dir_all(question.join("src")).unwrap();
        fs::write(question.join("src").join("main.c"), "int main() {\n    return 0;\n}\n").unwrap();

        let server = dir.path().join("server");
        fs::create_dir_all(&server).unwrap();
        fs::write(server.join("notes.txt"), "a < b\r\n").unwrap();

        let paths = CoursePaths {
            question_path: question,
            server_files_course_path: server,
            client_files_course_path: dir.path().join("client"),
        };
        let highlighter = Highlighter::new();

        let element = Element::new("")
            .attr("source-file-name", "main.c")
            .attr("directory", "src")
            .attr("language", "c")
            .attr("highlight-lines", "2");
        let out = render(&element, &highlighter, &paths).unwrap();
        assert!(out.contains("<span class=\"normal\">3</span></pre>"));
        assert_eq!(out.matches(HIGHLIGHTED_LINE_CLASS).count(), 1);

        let element = Element::new("")
            .attr("source-file-name", "notes.txt")
            .attr("directory", "serverFilesCourse");
        let out = render(&element, &highlighter, &paths).unwrap();
        assert!(out.contains("<pre><span></span>a &lt; b\n</pre>"));

        let missing = Element::new("")
            .attr("source-file-name", "gone.txt")
            .attr("directory", "clientFilesCourse");
        assert!(matches!(
            render(&missing, &highlighter, &paths),
            Err(CodeError::SourceFileNotFound(_))
        ));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("    a\n      b\n    c  \n\n"), "a\n  b\nc");
        assert_eq!(normalize_whitespace("\ta\n\t\n\tb"), "a\n\nb");
        assert_eq!(normalize_whitespace("  a\n\tb"), "  a\n\tb");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_render_normalizes_inline() {
        let element = Element::new("\n        x = 1\n        if x:\n            y = 2\n    ")
            .attr("normalize-whitespace", "true");
        let out = render_inline(&element).unwrap();
        assert!(out.contains("<pre><span></span>x = 1\nif x:\n    y = 2\n</pre>"));
    }

    #[test]
    fn test_element_ids() {
        let first = element_id();
        let second = element_id();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
        assert!(first.starts_with(['a', 'b', 'c', 'd', 'e', 'f']));
    }
}
