//! Pre-compiled declaration and token patterns.
//!
//! The patterns target a mixed Python/Go surface syntax (`def`, `class`,
//! `func`, `var`, `type`). Sources in other languages are not rejected; their
//! declarations simply go uncounted.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => unreachable!("built-in pattern {pattern:?} failed to compile: {e}"),
    }
}

pub static DEF_NAME: Lazy<Regex> = Lazy::new(|| compile(r"def\s+([a-zA-Z_][a-zA-Z0-9_]*)"));
pub static CLASS_NAME: Lazy<Regex> = Lazy::new(|| compile(r"class\s+([a-zA-Z_][a-zA-Z0-9_]*)"));
pub static GO_FUNC_NAME: Lazy<Regex> = Lazy::new(|| compile(r"func\s+([a-zA-Z_][a-zA-Z0-9_]*)"));
pub static GO_VAR_NAME: Lazy<Regex> = Lazy::new(|| compile(r"var\s+([a-zA-Z_][a-zA-Z0-9_]*)"));
pub static GO_TYPE_NAME: Lazy<Regex> = Lazy::new(|| compile(r"type\s+([a-zA-Z_][a-zA-Z0-9_]*)"));

/// Left-hand side of `name = ...`.
pub static ASSIGNMENT_TARGET: Lazy<Regex> =
    Lazy::new(|| compile(r"([a-zA-Z_][a-zA-Z0-9_]*)\s*="));

/// Left-hand side of `name = ...` or `name := ...`.
pub static DECLARATION_TARGET: Lazy<Regex> =
    Lazy::new(|| compile(r"([a-zA-Z_][a-zA-Z0-9_]*)\s*:?="));

/// `name(` call-like token.
pub static CALL_NAME: Lazy<Regex> = Lazy::new(|| compile(r"([a-zA-Z_][a-zA-Z0-9_]*)\s*\("));

pub static CLASS_DECL: Lazy<Regex> = Lazy::new(|| compile(r"class\s+\w+"));
pub static DEF_DECL: Lazy<Regex> = Lazy::new(|| compile(r"def\s+\w+"));

pub static INTERFACE_NAME: Lazy<Regex> = Lazy::new(|| compile(r"interface\s+([A-Za-z]+)"));

/// Capitalized word such as `User` or `Payment`.
pub static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| compile(r"\b[A-Z][a-z]+\b"));

/// Capitalized word that may continue in PascalCase, e.g. `UserService`.
pub static REQUIREMENT_TERM: Lazy<Regex> =
    Lazy::new(|| compile(r"\b[A-Z][a-z]+(?:[A-Z][a-z]*)*\b"));

/// Capitalized word or a Go structural keyword.
pub static CONCEPT_TERM: Lazy<Regex> = Lazy::new(|| {
    compile(r"\b[A-Z][a-z]+\b|\b(?:func|struct|interface|package|import)\b")
});

/// First capture group of every non-overlapping match.
pub fn captures<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Whole text of every non-overlapping match.
pub fn matches<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
    re.find_iter(text).map(|m| m.as_str()).collect()
}
