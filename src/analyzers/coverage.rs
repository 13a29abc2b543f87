//! How much of the scenario's information shows up in the solution:
//! context files, prompt requirements and domain terms.

use crate::common::file_stem;
use crate::core::{Scenario, SolutionCode};
use crate::patterns::syntax::{matches, CAPITALIZED_WORD, REQUIREMENT_TERM};
use crate::patterns::tables::REQUIREMENT_ACTION_VERBS;
use std::collections::BTreeSet;

/// No context files were given.
pub const NO_CONTEXT_SCORE: f64 = 0.5;
/// The prompt is empty.
pub const NO_PROMPT_SCORE: f64 = 0.5;
/// The prompt names no capitalized domain terms.
pub const NO_DOMAIN_TERMS_SCORE: f64 = 0.6;

/// For every (solution file, context file) pair where the context file's
/// stem appears case-insensitively in the solution file, credit
/// `1 / context_files.len()`; capped at 1.0.
pub fn context_usage(solution: &SolutionCode, context_files: &[String]) -> f64 {
    if context_files.is_empty() {
        return NO_CONTEXT_SCORE;
    }

    let stems: Vec<String> = context_files
        .iter()
        .map(|path| file_stem(path).to_lowercase())
        .collect();

    let hits: usize = solution
        .sources()
        .map(|code| {
            let code_lower = code.to_lowercase();
            stems.iter().filter(|stem| code_lower.contains(stem.as_str())).count()
        })
        .sum();

    (hits as f64 / context_files.len() as f64).min(1.0)
}

/// Capitalized/PascalCase prompt words plus the fixed action verbs.
pub fn requirement_terms(task_prompt: &str) -> BTreeSet<&str> {
    matches(&REQUIREMENT_TERM, task_prompt)
        .into_iter()
        .chain(REQUIREMENT_ACTION_VERBS.iter().copied())
        .collect()
}

/// Share of unique requirement terms found anywhere in the solution.
pub fn requirement_coverage(solution: &SolutionCode, task_prompt: &str) -> f64 {
    if task_prompt.is_empty() {
        return NO_PROMPT_SCORE;
    }

    let terms = requirement_terms(task_prompt);
    let code_lower = solution.joined_lower();
    let covered = terms
        .iter()
        .filter(|term| code_lower.contains(&term.to_lowercase()))
        .count();

    (covered as f64 / terms.len() as f64).min(1.0)
}

/// Share of capitalized prompt terms used in the solution as written,
/// lowercased, or uppercased.
pub fn terminology_consistency(solution: &SolutionCode, scenario: &Scenario) -> f64 {
    let terms: BTreeSet<&str> = matches(&CAPITALIZED_WORD, &scenario.task_prompt)
        .into_iter()
        .collect();
    if terms.is_empty() {
        return NO_DOMAIN_TERMS_SCORE;
    }

    let code = solution.joined();
    let used = terms
        .iter()
        .filter(|term| {
            code.contains(**term)
                || code.contains(&term.to_lowercase())
                || code.contains(&term.to_uppercase())
        })
        .count();

    (used as f64 / terms.len() as f64).min(1.0)
}
