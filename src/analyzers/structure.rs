//! Architectural coherence sub-analyzers.
//!
//! Every function here is a per-file heuristic averaged over the solution,
//! except [`naming_consistency`], which pools identifiers from all files.

use super::mean_over_files;
use crate::common::{count_present, import_lines, is_import_line, split_lines};
use crate::core::SolutionCode;
use crate::patterns::syntax::{captures, ASSIGNMENT_TARGET, CLASS_DECL, DEF_DECL, DEF_NAME};
use crate::patterns::tables::STDLIB_MODULES;
use crate::patterns::{KeywordFamily, NamingStyle};
use std::collections::HashMap;

/// Per-family contribution cap in [`file_pattern_score`].
const FAMILY_CAP: f64 = 0.3;
const MAX_ORGANIZED_IMPORTS: usize = 10;

// ---------------------------------------------------------------------------
// Pattern consistency
// ---------------------------------------------------------------------------

pub fn pattern_consistency(solution: &SolutionCode, families: &[KeywordFamily]) -> f64 {
    mean_over_files(solution, |code| file_pattern_score(code, families))
}

/// Architectural vocabulary, separation of concerns and indentation for one file.
pub fn file_pattern_score(code: &str, families: &[KeywordFamily]) -> f64 {
    let code_lower = code.to_lowercase();
    let mut score: f64 = families
        .iter()
        .map(|fam| count_present(&code_lower, fam.keywords))
        .zip(families)
        .filter(|(hits, _)| *hits > 0)
        .map(|(hits, fam)| (hits as f64 / fam.keywords.len() as f64).min(FAMILY_CAP))
        .sum();

    if has_separation_of_concerns(code) {
        score += 0.3;
    }
    if has_consistent_indentation(code) {
        score += 0.2;
    }
    score.min(1.0)
}

/// At least one class, or more than two functions.
pub fn has_separation_of_concerns(code: &str) -> bool {
    CLASS_DECL.find_iter(code).count() > 0 || DEF_DECL.find_iter(code).count() > 2
}

/// More than 30% of lines start with four spaces or a tab.
pub fn has_consistent_indentation(code: &str) -> bool {
    let lines = split_lines(code);
    let indented = lines
        .iter()
        .filter(|line| line.starts_with("    ") || line.starts_with('\t'))
        .count();
    indented as f64 > lines.len() as f64 * 0.3
}

// ---------------------------------------------------------------------------
// File organization
// ---------------------------------------------------------------------------

pub fn file_organization(solution: &SolutionCode) -> f64 {
    mean_over_files(solution, file_organization_score)
}

pub fn file_organization_score(code: &str) -> f64 {
    let mut score = 0.0;
    if has_bounded_imports(code) {
        score += 0.3;
    }
    if has_logical_ordering(code) {
        score += 0.3;
    }
    if has_consistent_spacing(code) {
        score += 0.2;
    }
    if has_documentation(code) {
        score += 0.2;
    }
    score
}

/// Ten or fewer import statements.
pub fn has_bounded_imports(code: &str) -> bool {
    import_lines(code).len() <= MAX_ORGANIZED_IMPORTS
}

/// Every class declaration precedes every function declaration.
/// Vacuously true when either kind is absent.
pub fn has_logical_ordering(code: &str) -> bool {
    let mut last_class = None;
    let mut first_function = None;
    for (i, line) in code.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("class ") {
            last_class = Some(i);
        } else if trimmed.starts_with("def ") && first_function.is_none() {
            first_function = Some(i);
        }
    }
    match (last_class, first_function) {
        (Some(class), Some(function)) => class < function,
        _ => true,
    }
}

/// Fewer than 30% blank lines.
pub fn has_consistent_spacing(code: &str) -> bool {
    let lines = split_lines(code);
    let blank = lines.iter().filter(|line| line.trim().is_empty()).count();
    (blank as f64) < lines.len() as f64 * 0.3
}

/// Has a docstring delimiter or a `#` comment marker.
pub fn has_documentation(code: &str) -> bool {
    code.contains("\"\"\"") || code.contains("'''") || code.contains('#')
}

// ---------------------------------------------------------------------------
// Naming consistency
// ---------------------------------------------------------------------------

/// Identifiers considered for naming consistency: declared functions, then
/// assignment targets.
pub fn naming_candidates(code: &str) -> Vec<&str> {
    let mut names = captures(&DEF_NAME, code);
    names.extend(captures(&ASSIGNMENT_TARGET, code));
    names
}

/// Share of the dominant naming style across all files, scaled by 1.2 and
/// capped at 1.0. Returns 0.5 when there are no identifiers.
pub fn naming_consistency(solution: &SolutionCode) -> f64 {
    let mut styles: HashMap<NamingStyle, usize> = HashMap::new();
    let mut total = 0usize;

    for code in solution.sources() {
        for name in naming_candidates(code) {
            *styles.entry(NamingStyle::classify(name)).or_insert(0) += 1;
            total += 1;
        }
    }

    if total == 0 {
        return 0.5;
    }

    let dominant = styles.values().copied().max().unwrap_or(0);
    (dominant as f64 / total as f64 * 1.2).min(1.0)
}

// ---------------------------------------------------------------------------
// Dependency structure
// ---------------------------------------------------------------------------

pub fn dependency_structure(solution: &SolutionCode) -> f64 {
    mean_over_files(solution, file_dependency_score)
}

/// Import grouping, unused imports and wildcard use. Files without imports score 0.
pub fn file_dependency_score(code: &str) -> f64 {
    let imports = import_lines(code);
    if imports.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    if stdlib_imports_first(&imports) {
        score += 0.4;
    }
    if !has_unused_imports(code, &imports) {
        score += 0.3;
    }
    if !has_wildcard_import(&imports) {
        score += 0.3;
    }
    score
}

/// False as soon as a standard-library-looking import follows any other import.
pub fn stdlib_imports_first(imports: &[&str]) -> bool {
    let mut third_party_seen = false;
    for line in imports {
        let is_stdlib = STDLIB_MODULES.iter().any(|lib| line.contains(lib));
        if is_stdlib {
            if third_party_seen {
                return false;
            }
        } else {
            third_party_seen = true;
        }
    }
    true
}

/// Names an import statement binds: the alias when `as` is used, otherwise
/// the top-level module (`import a.b`) or the imported symbol (`from a import b`).
pub fn imported_names(import_line: &str) -> Vec<String> {
    let line = import_line.split('#').next().unwrap_or("").trim();

    let bound = if let Some(rest) = line.strip_prefix("import ") {
        rest
    } else if line.starts_with("from ") {
        match line.split_once(" import ") {
            Some((_, rest)) => rest,
            None => return Vec::new(),
        }
    } else {
        return Vec::new();
    };

    bound
        .trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
        .split(',')
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() || item == "*" {
                return None;
            }
            let name = match item.split_once(" as ") {
                Some((_, alias)) => alias.trim(),
                // Go binds the last path segment of a quoted import
                None if item.starts_with('"') => {
                    let path = item.trim_matches('"');
                    path.rsplit('/').next().unwrap_or(path)
                }
                None if line.starts_with("import ") => item.split('.').next().unwrap_or(item),
                None => item,
            };
            Some(name.to_string())
        })
        .collect()
}

/// True if any imported name never appears in the non-import body of the file.
///
/// Import lines are removed before searching, otherwise every name would be
/// found in its own import statement and no import could ever be unused.
pub fn has_unused_imports(code: &str, imports: &[&str]) -> bool {
    let body: Vec<&str> = code
        .split('\n')
        .filter(|line| !is_import_line(line.trim()))
        .collect();
    let body = body.join("\n");

    imports
        .iter()
        .flat_map(|line| imported_names(line))
        .any(|name| !body.contains(name.as_str()))
}

pub fn has_wildcard_import(imports: &[&str]) -> bool {
    imports.iter().any(|line| line.contains('*'))
}
