//! Cross-file reasoning sub-analyzers.

use super::{family_bonus, mean_over_files};
use crate::common::contains_any;
use crate::core::{Scenario, SolutionCode};
use crate::patterns::syntax::{captures, INTERFACE_NAME};
use crate::patterns::tables::{
    CHANGE_TRACKING_MARKERS, COORDINATION_PATTERNS, DATA_FLOW_PATTERNS, EDIT_INTENT_WORDS,
    FLOW_INPUT_MARKERS, FLOW_OUTPUT_MARKERS, FLOW_PROCESS_MARKERS, INTERFACE_NAME_SUFFIXES,
    INTERFACE_PATTERNS, MODIFICATION_PATTERNS, SHARED_STATE_MARKERS,
};

/// Returned when no file touches shared state.
pub const WELL_ISOLATED_SCORE: f64 = 0.8;
/// Returned when the task does not ask for edits.
pub const NON_MODIFICATION_SCORE: f64 = 0.6;

pub fn interface_usage(solution: &SolutionCode) -> f64 {
    mean_over_files(solution, file_interface_score)
}

/// 0.25 per interface family present, plus up to 0.2 for the share of
/// declared interfaces named like `Reader`, `Comparable` or `StoreInterface`.
pub fn file_interface_score(code: &str) -> f64 {
    let mut score = family_bonus(&code.to_lowercase(), INTERFACE_PATTERNS, 0.25);

    let names = captures(&INTERFACE_NAME, code);
    if !names.is_empty() {
        let well_named = names
            .iter()
            .filter(|name| {
                INTERFACE_NAME_SUFFIXES
                    .iter()
                    .any(|suffix| name.ends_with(suffix))
            })
            .count();
        score += well_named as f64 / names.len() as f64 * 0.2;
    }
    score.min(1.0)
}

pub fn has_shared_state(solution: &SolutionCode) -> bool {
    solution
        .sources()
        .any(|code| contains_any(&code.to_lowercase(), SHARED_STATE_MARKERS))
}

/// Coordination vocabulary per file, but only when some file has shared
/// state; otherwise [`WELL_ISOLATED_SCORE`].
pub fn shared_state_coordination(solution: &SolutionCode) -> f64 {
    if !has_shared_state(solution) {
        return WELL_ISOLATED_SCORE;
    }
    mean_over_files(solution, |code| {
        family_bonus(&code.to_lowercase(), COORDINATION_PATTERNS, 0.25).min(1.0)
    })
}

pub fn is_modification_task(scenario: &Scenario) -> bool {
    contains_any(&scenario.task_prompt.to_lowercase(), EDIT_INTENT_WORDS)
}

/// Transaction/validation/consistency/recovery vocabulary for edit tasks,
/// [`NON_MODIFICATION_SCORE`] otherwise.
pub fn modification_coordination(solution: &SolutionCode, scenario: &Scenario) -> f64 {
    if !is_modification_task(scenario) {
        return NON_MODIFICATION_SCORE;
    }
    mean_over_files(solution, file_modification_score)
}

pub fn file_modification_score(code: &str) -> f64 {
    let code_lower = code.to_lowercase();
    let mut score = family_bonus(&code_lower, MODIFICATION_PATTERNS, 0.25);
    if contains_any(&code_lower, CHANGE_TRACKING_MARKERS) {
        score += 0.1;
    }
    score.min(1.0)
}

pub fn data_flow_understanding(solution: &SolutionCode) -> f64 {
    mean_over_files(solution, file_data_flow_score)
}

/// 0.2 per data-flow family plus 0.4 scaled by how much of the
/// input -> process -> output chain is visible.
pub fn file_data_flow_score(code: &str) -> f64 {
    let code_lower = code.to_lowercase();
    let mut score = family_bonus(&code_lower, DATA_FLOW_PATTERNS, 0.2);

    let stages = [FLOW_INPUT_MARKERS, FLOW_PROCESS_MARKERS, FLOW_OUTPUT_MARKERS];
    let present = stages
        .iter()
        .filter(|markers| contains_any(&code_lower, markers))
        .count();
    score += present as f64 / stages.len() as f64 * 0.4;

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_naming_bonus() {
        let code = "type Reader interface {}\ninterface Reader {}\ninterface Store {}";
        // interface_definition family (0.25) + 1 of 2 well named (0.1)
        assert!((file_interface_score(code) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_interface_usage_averages_files() {
        let solution = SolutionCode::new()
            .with_file("a.go", "abstract inject implement requires")
            .with_file("b.go", "");
        assert_eq!(interface_usage(&solution), 0.5);
    }

    #[test]
    fn test_shared_state_short_circuits() {
        let isolated = SolutionCode::new().with_file("a.go", "func main() {}");
        assert_eq!(shared_state_coordination(&isolated), WELL_ISOLATED_SCORE);

        let shared = SolutionCode::new()
            .with_file("a.go", "var shared map; mu.Lock(); ch := make(chan int)")
            .with_file("b.go", "func main() {}");
        // a.go: synchronization only ("chan" is not "channel") -> 0.25; b.go -> 0.0
        assert_eq!(shared_state_coordination(&shared), 0.125);
    }

    #[test]
    fn test_modification_is_neutral_without_edit_intent() {
        let scenario = Scenario::new("Write a new parser");
        let solution = SolutionCode::new().with_file("a.py", "transaction commit");
        assert_eq!(modification_coordination(&solution, &scenario), 0.6);
    }

    #[test]
    fn test_modification_scoring_for_edit_tasks() {
        let scenario = Scenario::new("Refactor the billing module");
        let solution = SolutionCode::new().with_file("a.py", "begin transaction; retry; version 2");
        // transaction + error_recovery + change tracking
        assert!((modification_coordination(&solution, &scenario) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_data_flow_chain() {
        let code = "def handle(request):\n    return format(request)";
        // output_formatting (0.2) + input/process/output all present (0.4)
        assert!((file_data_flow_score(code) - 0.6).abs() < 1e-12);
    }
}
