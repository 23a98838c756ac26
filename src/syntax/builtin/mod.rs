//! Built-in language definitions
//!
//! Languages are compiled on first request; the manager caches them.

mod c;
mod markdown;
mod python;
mod rust;
mod toml_lang;

use super::language::LanguageDefinition;

/// A built-in language: canonical name, aliases, and its constructor
struct Builtin {
    name: &'static str,
    aliases: &'static [&'static str],
    build: fn() -> LanguageDefinition,
}

const BUILTINS: &[Builtin] = &[
    Builtin { name: "C", aliases: c::C_ALIASES, build: c::c_language },
    Builtin { name: "C++", aliases: c::CPP_ALIASES, build: c::cpp_language },
    Builtin { name: "Markdown", aliases: markdown::ALIASES, build: markdown::markdown_language },
    Builtin { name: "Python", aliases: python::ALIASES, build: python::python_language },
    Builtin { name: "Rust", aliases: rust::ALIASES, build: rust::rust_language },
    Builtin { name: "TOML", aliases: toml_lang::ALIASES, build: toml_lang::toml_language },
];

fn find(name: &str) -> Option<&'static Builtin> {
    let name = name.to_lowercase();
    BUILTINS
        .iter()
        .find(|b| b.name.to_lowercase() == name || b.aliases.contains(&name.as_str()))
}

/// Canonical name of the language answering to a name or alias
pub fn canonical_name(name: &str) -> Option<&'static str> {
    find(name).map(|b| b.name)
}

/// Compile the language answering to a name or alias
pub fn build_language(name: &str) -> Option<LanguageDefinition> {
    find(name).map(|b| {
        let mut lang = (b.build)();
        for alias in b.aliases {
            if !lang.matches(alias) {
                lang.add_alias(alias);
            }
        }
        lang
    })
}

/// All canonical names with their aliases
pub fn all_languages() -> Vec<(&'static str, &'static [&'static str])> {
    BUILTINS.iter().map(|b| (b.name, b.aliases)).collect()
}
