//! Configuration file support
//!
//! Loads defaults and custom style sheets from `$CODEBLOCK_CONFIG`, or
//! `~/.codeblock.toml` (`%USERPROFILE%\.codeblock.toml` on Windows).
//!
//! Example:
//! ```toml
//! style-name = "classroom"
//! show-line-numbers = true
//!
//! [styles.classroom]
//! base = "friendly"
//! highlight = "#fff3b0"
//!
//! [styles.classroom.tokens]
//! Keyword = "bold #0000aa"
//! Comment = "noitalic #888888"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "CODEBLOCK_CONFIG";

/// Configuration settings
///
/// Element attributes always override these defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Style used when an element names none
    pub style_name: Option<String>,
    /// Highlighted-line background used when an element names none
    pub highlight_lines_color: Option<String>,
    /// Whether line numbers are shown by default
    pub show_line_numbers: bool,
    /// Whether the copy button is shown by default
    pub copy_code_button: bool,
    /// Whether text selection is disabled by default
    pub prevent_select: bool,
    /// Whether code is dedented by default
    pub normalize_whitespace: bool,
    /// Custom style sheets, by name
    pub styles: BTreeMap<String, StyleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style_name: None,
            highlight_lines_color: None,
            show_line_numbers: false,
            copy_code_button: false,
            prevent_select: false,
            normalize_whitespace: false,
            styles: BTreeMap::new(),
        }
    }
}

/// A custom style sheet layered over a built-in one
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct StyleConfig {
    /// Built-in style to start from (defaults to the default style)
    pub base: Option<String>,
    /// Page background color
    pub background: Option<String>,
    /// Highlighted-line background color
    pub highlight: Option<String>,
    /// Line number color
    pub line_number: Option<String>,
    /// Token type name -> style definition (e.g. `"bold #902000"`)
    pub tokens: BTreeMap<String, String>,
    /// ANSI color name -> hex color (e.g. `BrightRed = "#ff0000"`)
    pub ansi: BTreeMap<String, String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeblock.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeblock.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), styles = config.styles.len(), "loaded configuration");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeError;

    #[test]
    fn test_parse_config() {
        let contents = r##"
# Comment
style-name = "classroom"
highlight-lines-color = "#ffeeaa"
show-line-numbers = true

[styles.classroom]
base = "monokai"
highlight = "#333333"

[styles.classroom.tokens]
Keyword = "bold #ff0000"
        "##;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.style_name.as_deref(), Some("classroom"));
        assert_eq!(config.highlight_lines_color.as_deref(), Some("#ffeeaa"));
        assert!(config.show_line_numbers);
        assert!(!config.copy_code_button);

        let style = &config.styles["classroom"];
        assert_eq!(style.base.as_deref(), Some("monokai"));
        assert_eq!(style.tokens["Keyword"], "bold #ff0000");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::parse("line-numbers = true").unwrap_err();
        assert!(matches!(err, CodeError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codeblock.toml");
        fs::write(&path, "prevent-select = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.prevent_select);

        let missing = Config::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(CodeError::Io(_))));
    }
}
