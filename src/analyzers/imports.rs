//! Dependency traversal sub-analyzers: import validity, call resolution and
//! import placement.

use super::mean_over_files;
use crate::common::{contains_any, import_lines, is_import_line, split_lines};
use crate::core::SolutionCode;
use crate::patterns::syntax::{captures, CALL_NAME, CLASS_NAME, DEF_NAME};
use crate::patterns::tables::{BUILTIN_FUNCTIONS, SUSPICIOUS_IMPORT_MARKERS};
use std::collections::HashSet;

const SYNTAX_WEIGHT: f64 = 0.6;
const REASONABLE_WEIGHT: f64 = 0.4;

// ---------------------------------------------------------------------------
// Import accuracy
// ---------------------------------------------------------------------------

pub fn import_accuracy(solution: &SolutionCode) -> f64 {
    mean_over_files(solution, file_import_accuracy)
}

/// Share of syntactically valid imports (60%) plus share of imports free of
/// suspicious markers (40%). Files without imports score 0.
pub fn file_import_accuracy(code: &str) -> f64 {
    let imports = import_lines(code);
    if imports.is_empty() {
        return 0.0;
    }
    let total = imports.len() as f64;
    let valid = imports.iter().filter(|l| is_valid_import_syntax(l)).count() as f64;
    let reasonable = imports.iter().filter(|l| is_reasonable_import(l)).count() as f64;
    valid / total * SYNTAX_WEIGHT + reasonable / total * REASONABLE_WEIGHT
}

pub fn is_reasonable_import(import_line: &str) -> bool {
    !contains_any(import_line, SUSPICIOUS_IMPORT_MARKERS)
}

/// Whether an import line parses as a Python module. Every `;`-separated
/// statement on the line must be valid, not just the import.
pub fn is_valid_import_syntax(import_line: &str) -> bool {
    rustpython_parser::parse(import_line, rustpython_parser::Mode::Module, "<import>").is_ok()
}

// ---------------------------------------------------------------------------
// Cross-file references
// ---------------------------------------------------------------------------

/// Function and class names declared anywhere in the solution.
pub fn definition_index(solution: &SolutionCode) -> HashSet<&str> {
    solution
        .sources()
        .flat_map(|code| {
            let mut names = captures(&DEF_NAME, code);
            names.extend(captures(&CLASS_NAME, code));
            names
        })
        .collect()
}

pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Per file, the share of call-like tokens that resolve to a definition in
/// any file or to a built-in; files without calls score 0.
pub fn cross_file_references(solution: &SolutionCode) -> f64 {
    let definitions = definition_index(solution);
    mean_over_files(solution, |code| file_reference_validity(code, &definitions))
}

pub fn file_reference_validity(code: &str, definitions: &HashSet<&str>) -> f64 {
    let calls = captures(&CALL_NAME, code);
    if calls.is_empty() {
        return 0.0;
    }
    let valid = calls
        .iter()
        .filter(|call| definitions.contains(*call) || is_builtin_function(call))
        .count();
    valid as f64 / calls.len() as f64
}

// ---------------------------------------------------------------------------
// Dependency order
// ---------------------------------------------------------------------------

pub fn dependency_order(solution: &SolutionCode) -> f64 {
    mean_over_files(solution, file_dependency_order)
}

/// 1.0 when the last import of the leading import/blank/comment run sits
/// before `min(10, lines / 4)`, otherwise 0.5.
pub fn file_dependency_order(code: &str) -> f64 {
    let lines = split_lines(code);
    let mut import_section_end = 0;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if is_import_line(trimmed) {
            import_section_end = i;
        } else if !trimmed.is_empty() && !trimmed.starts_with('#') {
            break;
        }
    }

    if import_section_end < (lines.len() / 4).min(10) {
        1.0
    } else {
        0.5
    }
}
