//! Sub-analyzers: each inspects one file, a pair of files, or the whole
//! solution and returns a bounded sub-score or a boolean signal.
//!
//! Modules are grouped by the metric that primarily consumes them:
//!
//! - `structure`: architectural coherence (patterns, organization, naming, imports)
//! - `imports`: dependency traversal (import validity, references, ordering)
//! - `sessions`: multi-session memory (cross-file naming, approach, state)
//! - `coordination`: cross-file reasoning (interfaces, shared state, data flow)
//! - `evolution`: incremental development (compatibility, reuse, extension)
//! - `coverage`: context-file usage, requirement coverage, terminology
//! - `extraction`: category-dispatched information extraction

pub mod coordination;
pub mod coverage;
pub mod evolution;
pub mod extraction;
pub mod imports;
pub mod sessions;
pub mod structure;

use crate::common::{contains_any, mean};
use crate::core::SolutionCode;
use crate::patterns::{KeywordFamily, WeightedFamily};

/// Mean of `score` over every file, `0.0` for an empty solution.
pub(crate) fn mean_over_files<F>(solution: &SolutionCode, score: F) -> f64
where
    F: Fn(&str) -> f64,
{
    let scores: Vec<f64> = solution.sources().map(score).collect();
    mean(&scores)
}

/// Flat `bonus` for every family with at least one keyword in `code_lower`.
pub(crate) fn family_bonus(code_lower: &str, families: &[KeywordFamily], bonus: f64) -> f64 {
    families
        .iter()
        .filter(|fam| contains_any(code_lower, fam.keywords))
        .count() as f64
        * bonus
}

/// Sum of each family's own bonus (or penalty) for families present in `code_lower`.
pub(crate) fn weighted_family_bonus(code_lower: &str, families: &[WeightedFamily]) -> f64 {
    families
        .iter()
        .filter(|w| contains_any(code_lower, w.family.keywords))
        .map(|w| w.bonus)
        .sum()
}

/// Fraction of `mentioned` keywords that also occur in `code_lower`, `0.0` if none are mentioned.
pub(crate) fn overlap_ratio(mentioned: &[&str], code_lower: &str) -> f64 {
    if mentioned.is_empty() {
        return 0.0;
    }
    let realized = mentioned.iter().filter(|k| code_lower.contains(*k)).count();
    realized as f64 / mentioned.len() as f64
}

/// Keywords from `keywords` that occur in `text`, in table order.
pub(crate) fn mentioned_in<'k>(keywords: &[&'k str], text: &str) -> Vec<&'k str> {
    keywords
        .iter()
        .copied()
        .filter(|k| text.contains(k))
        .collect()
}
