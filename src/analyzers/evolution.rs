//! Incremental development sub-analyzers: compatibility, reuse, extension
//! points and disruption.

use super::{family_bonus, mean_over_files, weighted_family_bonus};
use crate::common::{contains_any, count_present, mean};
use crate::core::{Scenario, SolutionCode};
use crate::patterns::tables::{
    BREAKING_MARKERS, COMPATIBILITY_INDICATORS, COMPATIBILITY_TRIGGER_WORDS,
    CONFIGURATION_MARKERS, DISRUPTION_TRIGGER_WORDS, ENCAPSULATION_MARKERS,
    EXTENSIBILITY_PATTERNS, MODULARITY_MARKERS, NON_BREAKING_MARKERS, REUSE_PATTERNS,
};
use std::collections::HashSet;

/// Returned by compatibility and disruption analysis when the prompt does not call for it.
pub const NEUTRAL_EVOLUTION_SCORE: f64 = 0.7;

const DUPLICATION_PENALTY_WEIGHT: f64 = 0.5;

pub fn is_compatibility_relevant(scenario: &Scenario) -> bool {
    contains_any(&scenario.task_prompt.to_lowercase(), COMPATIBILITY_TRIGGER_WORDS)
}

/// Versioning/adaptation/migration vocabulary (+0.3 each), deprecation
/// handling (+0.1) and a preserved API (+0.2). Neutral 0.7 when the prompt
/// is not about updating existing code.
pub fn backward_compatibility(solution: &SolutionCode, scenario: &Scenario) -> f64 {
    if !is_compatibility_relevant(scenario) {
        return NEUTRAL_EVOLUTION_SCORE;
    }
    mean_over_files(solution, file_compatibility_score)
}

pub fn file_compatibility_score(code: &str) -> f64 {
    let code_lower = code.to_lowercase();
    let mut score = weighted_family_bonus(&code_lower, COMPATIBILITY_INDICATORS);
    if code_lower.contains("api") && !code_lower.contains("breaking") {
        score += 0.2;
    }
    score.min(1.0)
}

/// `1 - unique / total` over every non-blank trimmed line of every file.
/// `0.0` when there are no such lines.
pub fn duplication_ratio(solution: &SolutionCode) -> f64 {
    let lines: Vec<&str> = solution
        .sources()
        .flat_map(|code| code.split('\n'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return 0.0;
    }

    let unique: HashSet<&str> = lines.iter().copied().collect();
    1.0 - unique.len() as f64 / lines.len() as f64
}

/// Reuse vocabulary per file, minus half the duplication ratio, floored at 0.
pub fn code_reuse(solution: &SolutionCode) -> f64 {
    let pattern_score = mean_over_files(solution, |code| {
        family_bonus(&code.to_lowercase(), REUSE_PATTERNS, 0.25).min(1.0)
    });
    let penalty = duplication_ratio(solution) * DUPLICATION_PENALTY_WEIGHT;
    (pattern_score - penalty).max(0.0)
}

pub fn extension_patterns(solution: &SolutionCode) -> f64 {
    mean_over_files(solution, file_extension_score)
}

/// 0.25 per extensibility family, 0.15 for configuration support, 0.1 for
/// modular vocabulary, capped at 1.0.
pub fn file_extension_score(code: &str) -> f64 {
    let code_lower = code.to_lowercase();
    let mut score = family_bonus(&code_lower, EXTENSIBILITY_PATTERNS, 0.25);
    if contains_any(&code_lower, CONFIGURATION_MARKERS) {
        score += 0.15;
    }
    if contains_any(&code_lower, MODULARITY_MARKERS) {
        score += 0.1;
    }
    score.min(1.0)
}

pub fn is_integration_task(scenario: &Scenario) -> bool {
    contains_any(&scenario.task_prompt.to_lowercase(), DISRUPTION_TRIGGER_WORDS)
}

/// Rewards additive, encapsulated changes and penalises breaking ones for
/// integration tasks. Neutral 0.7 otherwise.
pub fn minimal_disruption(solution: &SolutionCode, scenario: &Scenario) -> f64 {
    if !is_integration_task(scenario) {
        return NEUTRAL_EVOLUTION_SCORE;
    }
    let scores: Vec<f64> = solution.sources().map(file_disruption_score).collect();
    mean(&scores).min(1.0)
}

/// -0.2 per breaking marker, +0.3 per non-breaking marker, +0.2 per
/// encapsulation marker; floored at 0 but not capped.
pub fn file_disruption_score(code: &str) -> f64 {
    let code_lower = code.to_lowercase();
    let breaking = count_present(&code_lower, BREAKING_MARKERS) as f64;
    let non_breaking = count_present(&code_lower, NON_BREAKING_MARKERS) as f64;
    let encapsulated = count_present(&code_lower, ENCAPSULATION_MARKERS) as f64;
    (non_breaking * 0.3 + encapsulated * 0.2 - breaking * 0.2).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_neutral_without_trigger_words() {
        let scenario = Scenario::new("Build a REST client");
        let solution = SolutionCode::new().with_file("a.go", "deprecated legacy adapter api");
        assert_eq!(backward_compatibility(&solution, &scenario), 0.7);
        assert_eq!(backward_compatibility(&SolutionCode::new(), &scenario), 0.7);
    }

    #[test]
    fn test_compatibility_scoring() {
        let scenario = Scenario::new("Migrate the storage layer");
        let solution = SolutionCode::new().with_file("a.go", "// v2 api keeps the adapter");
        // versioning (0.3) + adaptation (0.3) + api (0.2)
        assert!((backward_compatibility(&solution, &scenario) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_breaking_api_gets_no_api_bonus() {
        assert!((file_compatibility_score("breaking api change") - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplication_ratio() {
        assert_eq!(duplication_ratio(&SolutionCode::new()), 0.0);
        assert_eq!(
            duplication_ratio(&SolutionCode::new().with_file("a", "\n  \n")),
            0.0
        );
        let solution = SolutionCode::new()
            .with_file("a.py", "x = 1\ny = 2")
            .with_file("b.py", "  x = 1\nz = 3");
        assert_eq!(duplication_ratio(&solution), 0.25);
    }

    #[test]
    fn test_code_reuse_penalises_duplication() {
        let clean = SolutionCode::new().with_file("a.py", "import os\ndef run():\n    pass");
        let copied = SolutionCode::new()
            .with_file("a.py", "import os\ndef run():\n    pass")
            .with_file("b.py", "import os\ndef run():\n    pass");
        assert_eq!(code_reuse(&clean), 0.5);
        // same vocabulary, half the lines duplicated
        assert_eq!(code_reuse(&copied), 0.25);
    }

    #[test]
    fn test_extension_score() {
        let code = "class PluginRegistry:\n    def register_hook(self, callback, config): ...";
        // plugins + hooks (0.5) + configuration (0.15)
        assert!((file_extension_score(code) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_minimal_disruption() {
        let neutral = Scenario::new("Write tests");
        let solution = SolutionCode::new().with_file("a.py", "remove delete");
        assert_eq!(minimal_disruption(&solution, &neutral), 0.7);

        let integrate = Scenario::new("Integrate payments");
        assert_eq!(minimal_disruption(&solution, &integrate), 0.0);

        let additive = SolutionCode::new().with_file("a.py", "add extend module");
        assert_eq!(minimal_disruption(&additive, &integrate), 0.8);
    }
}
