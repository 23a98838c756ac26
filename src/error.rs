//! Error types for codeblock

use thiserror::Error;

/// Result type alias for codeblock operations
pub type Result<T> = std::result::Result<T, CodeError>;

/// Validation and loading errors
///
/// Everything except `Io` is a configuration error: it is raised while
/// checking attributes or options, before any rendering starts.
#[derive(Error, Debug)]
pub enum CodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown language: \"{0}\". Must be one of the listed language aliases, or the special language \"ansi-color\".")]
    UnknownLanguage(String),

    #[error("Unknown style name: \"{name}\". Must be one of {available}")]
    UnknownStyle { name: String, available: String },

    #[error("Invalid style \"{style}\": {detail}")]
    InvalidStyle { style: String, detail: String },

    #[error("Could not parse highlight-lines attribute; check your syntax: \"{0}\"")]
    InvalidHighlightLines(String),

    #[error("Unknown file path: \"{0}\".")]
    SourceFileNotFound(String),

    #[error("Existing code cannot be added inside html element when \"source-file-name\" attribute is used.")]
    InlineCodeWithSourceFile,

    #[error("Cannot use both \"{0}\" and \"{1}\" attributes at the same time.")]
    ConflictingAttributes(&'static str, &'static str),

    #[error("Unknown attribute \"{0}\"")]
    UnknownAttribute(String),

    #[error("Attribute \"{name}\" must be a boolean value: {value}")]
    InvalidBoolean { name: String, value: String },

    #[error("Attribute \"{name}\" must be a CSS-style RGB string: {value}")]
    InvalidColor { name: String, value: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}
