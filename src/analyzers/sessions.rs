//! Multi-session memory sub-analyzers.
//!
//! A solution written over several sessions should keep naming, approach
//! and state handling steady from file to file. These analyzers read that
//! from a single snapshot of the files.

use crate::common::{count_present, mean, variance};
use crate::core::SolutionCode;
use crate::patterns::syntax::{
    captures, DECLARATION_TARGET, DEF_NAME, GO_FUNC_NAME, GO_TYPE_NAME, GO_VAR_NAME,
};
use crate::patterns::tables::{APPROACH_INDICATORS, MUTATION_TOKENS, SEMANTIC_ROOTS, STATE_INDICATORS};
use crate::patterns::NamingStyle;

use super::weighted_family_bonus;

const SINGLE_FILE_APPROACH_SCORE: f64 = 0.8;
const MUTATION_BUDGET: usize = 10;
const MUTATION_PENALTY: f64 = 0.2;

// ---------------------------------------------------------------------------
// Cross-file naming
// ---------------------------------------------------------------------------

/// Declared functions, variables and types, accepting both `def`/assignment
/// and `func`/`var`/`type`/`:=` forms.
pub fn extract_identifiers(code: &str) -> Vec<&str> {
    let mut identifiers = captures(&GO_FUNC_NAME, code);
    identifiers.extend(captures(&GO_VAR_NAME, code));
    identifiers.extend(captures(&GO_TYPE_NAME, code));
    identifiers.extend(captures(&DEF_NAME, code));
    identifiers.extend(captures(&DECLARATION_TARGET, code));
    identifiers
}

/// Two identifiers name a similar concept if both contain the same action root.
pub fn are_similar_concepts(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    SEMANTIC_ROOTS
        .iter()
        .any(|root| a.contains(root) && b.contains(root))
}

/// Pairs (one identifier from each side) that share a concept but differ in style.
pub fn find_naming_inconsistencies(left: &[&str], right: &[&str]) -> usize {
    left.iter()
        .map(|a| {
            right
                .iter()
                .filter(|b| {
                    are_similar_concepts(a, b)
                        && NamingStyle::classify(a) != NamingStyle::classify(b)
                })
                .count()
        })
        .sum()
}

/// `1 - inconsistencies / identifiers compared` over every unordered pair of
/// distinct files, floored at 0. Returns 0.5 when nothing is compared.
pub fn naming_consistency_across_files(solution: &SolutionCode) -> f64 {
    let per_file: Vec<Vec<&str>> = solution.sources().map(extract_identifiers).collect();

    let mut inconsistencies = 0usize;
    let mut compared = 0usize;

    for i in 0..per_file.len() {
        for j in (i + 1)..per_file.len() {
            inconsistencies += find_naming_inconsistencies(&per_file[i], &per_file[j]);
            compared += per_file[i].len() + per_file[j].len();
        }
    }

    if compared == 0 {
        return 0.5;
    }

    (1.0 - inconsistencies as f64 / compared as f64).max(0.0)
}

// ---------------------------------------------------------------------------
// Approach consistency
// ---------------------------------------------------------------------------

/// Mean over indicator families of `1 / (1 + variance)` of per-file hit
/// counts. Fewer than two files are trivially consistent (0.8).
pub fn approach_consistency(solution: &SolutionCode) -> f64 {
    if solution.len() < 2 {
        return SINGLE_FILE_APPROACH_SCORE;
    }

    let lowered: Vec<String> = solution.sources().map(str::to_lowercase).collect();

    let per_family: Vec<f64> = APPROACH_INDICATORS
        .iter()
        .map(|fam| {
            let counts: Vec<f64> = lowered
                .iter()
                .map(|code| count_present(code, fam.keywords) as f64)
                .collect();
            1.0 / (1.0 + variance(&counts))
        })
        .collect();

    mean(&per_family)
}

// ---------------------------------------------------------------------------
// State management
// ---------------------------------------------------------------------------

/// Mean per-file state score, capped at 1.0; 0.0 for an empty solution.
pub fn state_management(solution: &SolutionCode) -> f64 {
    let scores: Vec<f64> = solution.sources().map(file_state_score).collect();
    mean(&scores).min(1.0)
}

/// Bonuses for immutability/isolation/validation vocabulary, a penalty for
/// shared state, and a penalty for more than ten mutation tokens. Floored at 0.
pub fn file_state_score(code: &str) -> f64 {
    let mut score = weighted_family_bonus(&code.to_lowercase(), STATE_INDICATORS);
    if mutation_count(code) > MUTATION_BUDGET {
        score -= MUTATION_PENALTY;
    }
    score.max(0.0)
}

/// Occurrences of each mutation token counted independently, so `+=`
/// also counts once as `=`.
pub fn mutation_count(code: &str) -> usize {
    MUTATION_TOKENS
        .iter()
        .map(|token| code.matches(token).count())
        .sum()
}
