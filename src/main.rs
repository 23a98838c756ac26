//! codeblock - render source code as a highlighted HTML fragment

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};

use codeblock::config::Config;
use codeblock::element::{self, CoursePaths, Element};
use codeblock::error::Result;
use codeblock::html;
use codeblock::logging::init_logging;
use codeblock::Highlighter;

/// Render source code as a syntax-highlighted HTML fragment
#[derive(Debug, Parser)]
#[command(name = "codeblock", version, about)]
struct Cli {
    /// Source file to render; reads stdin when omitted
    input: Option<PathBuf>,

    /// Language name or alias (see --list-languages)
    #[arg(short, long)]
    language: Option<String>,

    /// Lines to highlight, e.g. "1-3,5,7-8"
    #[arg(long, value_name = "LINES")]
    highlight_lines: Option<String>,

    /// Background of highlighted lines (#rgb, #rrggbb or a palette name)
    #[arg(long, value_name = "COLOR")]
    highlight_lines_color: Option<String>,

    /// Style sheet name (see --list-styles)
    #[arg(short, long)]
    style_name: Option<String>,

    /// Show the line number column
    #[arg(long, overrides_with = "no_show_line_numbers")]
    show_line_numbers: bool,

    /// Hide the line number column
    #[arg(long, overrides_with = "show_line_numbers")]
    no_show_line_numbers: bool,

    /// Render without syntax highlighting even if a language is given
    #[arg(long)]
    no_highlight: bool,

    /// Remove common indentation and trailing whitespace
    #[arg(long, overrides_with = "no_normalize_whitespace")]
    normalize_whitespace: bool,

    /// Keep whitespace as written
    #[arg(long, overrides_with = "normalize_whitespace")]
    no_normalize_whitespace: bool,

    /// Add a copy-to-clipboard button
    #[arg(long, overrides_with = "no_copy_code_button")]
    copy_code_button: bool,

    /// Leave out the copy-to-clipboard button
    #[arg(long, overrides_with = "copy_code_button")]
    no_copy_code_button: bool,

    /// Prevent selecting the code text
    #[arg(long, overrides_with = "no_prevent_select")]
    prevent_select: bool,

    /// Allow selecting the code text
    #[arg(long, overrides_with = "prevent_select")]
    no_prevent_select: bool,

    /// List the available languages and exit
    #[arg(long)]
    list_languages: bool,

    /// List the available styles and exit
    #[arg(long)]
    list_styles: bool,

    /// Configuration file (defaults to $CODEBLOCK_CONFIG or ~/.codeblock.toml)
    #[arg(long, value_name = "FILE", env = "CODEBLOCK_CONFIG")]
    config: Option<PathBuf>,

    /// Sets the level of logging verbosity:
    /// -v = info, -vv = debug, -vvv = trace
    #[arg(short, long, action = ArgAction::Count)]
    verbosity: u8,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbosity)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let highlighter = Highlighter::with_config(config)?;

    if cli.list_languages {
        for (name, aliases) in highlighter.syntax().list_languages() {
            println!("{:<12} {}", name, aliases.join(", "));
        }
        return Ok(());
    }
    if cli.list_styles {
        for name in highlighter.syntax().list_styles() {
            println!("{}", name);
        }
        return Ok(());
    }

    let (element, paths) = build_element(&cli)?;
    element::prepare(&element, &highlighter)?;
    let rendered = element::render(&element, &highlighter, &paths)?;
    println!("{}", rendered);
    Ok(())
}

/// Translate command line flags into element attributes
fn build_element(cli: &Cli) -> Result<(Element, CoursePaths)> {
    let (mut element, paths) = match &cli.input {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let dir = path.parent().map(PathBuf::from).unwrap_or_default();
            let paths = CoursePaths {
                question_path: dir,
                ..CoursePaths::default()
            };
            (Element::new("").attr("source-file-name", name), paths)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            (Element::new(html::escape(&text)), CoursePaths::default())
        }
    };

    let strings = [
        ("language", &cli.language),
        ("highlight-lines", &cli.highlight_lines),
        ("highlight-lines-color", &cli.highlight_lines_color),
        ("style-name", &cli.style_name),
    ];
    for (name, value) in strings {
        if let Some(value) = value {
            element.attributes.set(name, value.as_str());
        }
    }

    // Unset switches fall through to the configured defaults
    let switches = [
        ("show-line-numbers", switch(cli.show_line_numbers, cli.no_show_line_numbers)),
        ("no-highlight", switch(cli.no_highlight, false)),
        ("normalize-whitespace", switch(cli.normalize_whitespace, cli.no_normalize_whitespace)),
        ("copy-code-button", switch(cli.copy_code_button, cli.no_copy_code_button)),
        ("prevent-select", switch(cli.prevent_select, cli.no_prevent_select)),
    ];
    for (name, value) in switches {
        if let Some(value) = value {
            element.attributes.set(name, value.to_string());
        }
    }

    Ok((element, paths))
}

/// Value of a `--name` / `--no-name` pair; the last one given wins
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
