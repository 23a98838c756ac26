//! codeblock - syntax-highlighted code blocks for question pages
//!
//! Renders source code into an HTML fragment: tokenized and styled with
//! inline CSS, laid out in a line-numbered table, with selected lines
//! wrapped in a highlight container.
//!
//! ```no_run
//! use codeblock::{HighlightOptions, HighlightSpec, Highlighter};
//!
//! let highlighter = Highlighter::new();
//! let options = HighlightOptions::new()
//!     .language("python")
//!     .highlight_lines("2".parse::<HighlightSpec>()?);
//! let table = highlighter.highlight("x = 1\ny = x + 1\n", &options)?;
//! println!("{}", table.html);
//! # Ok::<(), codeblock::CodeError>(())
//! ```

pub mod attributes;
pub mod config;
pub mod element;
pub mod error;
pub mod highlight_lines;
pub mod highlighter;
pub mod html;
pub mod logging;
pub mod syntax;

pub use config::Config;
pub use element::{prepare, render, CoursePaths, Element};
pub use error::{CodeError, Result};
pub use highlight_lines::HighlightSpec;
pub use highlighter::{HighlightOptions, Highlighted, Highlighter};
