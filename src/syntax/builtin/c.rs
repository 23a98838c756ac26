//! C and C++ language definitions

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

pub const C_ALIASES: &[&str] = &["c", "h"];
pub const CPP_ALIASES: &[&str] = &["cpp", "c++", "cxx", "cc", "hpp"];

/// Create C language definition
pub fn c_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("C");
    add_c_rules(&mut lang);
    lang
}

/// Create C++ language definition (C rules plus C++ keywords)
pub fn cpp_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("C++");
    add_c_rules(&mut lang);

    let cpp_keywords = r"\b(alignas|alignof|and|and_eq|asm|bitand|bitor|bool|catch|class|compl|concept|consteval|constexpr|constinit|const_cast|co_await|co_return|co_yield|decltype|delete|dynamic_cast|explicit|export|false|friend|mutable|namespace|new|noexcept|not|not_eq|nullptr|operator|or|or_eq|private|protected|public|reinterpret_cast|requires|static_assert|static_cast|template|this|thread_local|throw|true|try|typeid|typename|using|virtual|xor|xor_eq)\b";
    if let Some(rule) = PatternRule::new("cpp_keyword", cpp_keywords, TokenType::Keyword, 79) {
        lang.add_pattern(rule);
    }

    // Scope qualifiers (std::)
    if let Some(rule) = PatternRule::new("namespace", r"\b[A-Za-z_]\w*::", TokenType::Module, 55) {
        lang.add_pattern(rule);
    }

    lang
}

fn add_c_rules(lang: &mut LanguageDefinition) {
    // Multiline rules
    // Block comments
    if let Some(rule) = MultilineRule::new("block_comment", r"/\*", r"\*/", TokenType::Comment, 1) {
        lang.add_multiline(rule);
    }

    // Strings (with escape support)
    if let Some(rule) = MultilineRule::with_escape("string", r#"""#, r#"""#, TokenType::String, 2, '\\') {
        lang.add_multiline(rule);
    }

    // Single-line patterns

    // Line comments
    if let Some(rule) = PatternRule::new("line_comment", r"//.*$", TokenType::Comment, 100) {
        lang.add_pattern(rule);
    }

    // Preprocessor directives
    if let Some(rule) = PatternRule::new("preprocessor", r"^\s*#\s*\w+", TokenType::Preprocessor, 95) {
        lang.add_pattern(rule);
    }

    // Include targets
    if let Some(rule) = PatternRule::new("include_path", r"<[\w./]+>", TokenType::String, 92) {
        lang.add_pattern(rule);
    }

    // Character literals
    if let Some(rule) = PatternRule::new("char", r"'(?:[^'\\]|\\.)'", TokenType::Char, 90) {
        lang.add_pattern(rule);
    }

    // Keywords
    let keywords = r"\b(auto|break|case|const|continue|default|do|else|enum|extern|for|goto|if|inline|register|restrict|return|sizeof|static|struct|switch|typedef|union|volatile|while|_Alignas|_Alignof|_Atomic|_Generic|_Noreturn|_Static_assert|_Thread_local)\b";
    if let Some(rule) = PatternRule::new("keyword", keywords, TokenType::Keyword, 80) {
        lang.add_pattern(rule);
    }

    // Type names (standard types)
    let types = r"\b(char|double|float|int|long|short|signed|unsigned|void|_Bool|_Complex|_Imaginary|size_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE)\b";
    if let Some(rule) = PatternRule::new("type", types, TokenType::Type, 75) {
        lang.add_pattern(rule);
    }

    // Constants
    if let Some(rule) = PatternRule::new("constant", r"\b(NULL|EOF|true|false|[A-Z][A-Z0-9_]+)\b", TokenType::Constant, 70) {
        lang.add_pattern(rule);
    }

    // Numbers
    // Hex
    if let Some(rule) = PatternRule::new("hex", r"\b0[xX][0-9a-fA-F]+[uUlL]*\b", TokenType::Number, 65) {
        lang.add_pattern(rule);
    }
    // Float
    if let Some(rule) = PatternRule::new("float", r"\b\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?", TokenType::Number, 64) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("float2", r"\.\d+(?:[eE][+-]?\d+)?[fFlL]?\b", TokenType::Number, 64) {
        lang.add_pattern(rule);
    }
    // Integer
    if let Some(rule) = PatternRule::new("integer", r"\b\d+[uUlL]*\b", TokenType::Number, 63) {
        lang.add_pattern(rule);
    }

    // Operators
    if let Some(rule) = PatternRule::new("operator", r"[+\-*/%&|^!<>=~?:]+", TokenType::Operator, 40) {
        lang.add_pattern(rule);
    }

    // Punctuation
    if let Some(rule) = PatternRule::new("punctuation", r"[()\[\]{},;.]", TokenType::Punctuation, 30) {
        lang.add_pattern(rule);
    }
}
