//! Information extraction: does the solution realise the vocabulary the
//! scenario mentions? The comparison strategy depends on the task category.

use super::{mentioned_in, overlap_ratio};
use crate::config::weights::{
    ArchitecturalExtractionWeights, FeatureExtractionWeights, GeneralExtractionWeights,
    MetricWeights,
};
use crate::core::{Scenario, SolutionCode, TaskCategory};
use crate::patterns::syntax::{matches, CONCEPT_TERM};
use crate::patterns::tables::{
    ACTION_KEYWORDS, ARCHITECTURE_VOCABULARY, BUSINESS_KEYWORDS, DATA_FLOW_KEYWORDS,
    DEPENDENCY_KEYWORDS, ERROR_KEYWORDS, STRUCTURAL_KEYWORDS, TECH_KEYWORDS,
};
use serde::{Deserialize, Serialize};

/// Number of structural keywords that can be realised in code.
const REALIZABLE_STRUCTURAL_ELEMENTS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    Architectural,
    Feature,
    General,
}

impl ExtractionStrategy {
    pub fn for_category(category: TaskCategory) -> Self {
        match category {
            TaskCategory::ArchitecturalUnderstanding => Self::Architectural,
            TaskCategory::FeatureImplementation => Self::Feature,
            TaskCategory::MultiSessionDevelopment | TaskCategory::General => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Architectural => "architectural",
            Self::Feature => "feature",
            Self::General => "general",
        }
    }
}

/// Route to the strategy for the scenario's category.
pub fn information_extraction(
    solution: &SolutionCode,
    scenario: &Scenario,
    weights: &MetricWeights,
) -> f64 {
    match ExtractionStrategy::for_category(scenario.category()) {
        ExtractionStrategy::Architectural => {
            architectural_extraction(solution, scenario, &weights.icu_architectural)
        }
        ExtractionStrategy::Feature => feature_extraction(solution, scenario, &weights.icu_feature),
        ExtractionStrategy::General => general_extraction(solution, scenario, &weights.icu_general),
    }
}

// ---------------------------------------------------------------------------
// Architectural understanding
// ---------------------------------------------------------------------------

pub fn architectural_extraction(
    solution: &SolutionCode,
    scenario: &Scenario,
    weights: &ArchitecturalExtractionWeights,
) -> f64 {
    let combined = scenario.combined_text_lower();
    let code = solution.joined_lower();

    let patterns = overlap_ratio(&mentioned_in(ARCHITECTURE_VOCABULARY, &combined), &code);
    let structure = structural_element_score(&combined, &code);

    let deps_mentioned = mentioned_in(DEPENDENCY_KEYWORDS, &combined);
    let dependencies = if deps_mentioned.is_empty() {
        0.0
    } else {
        let has_import = code.contains("import");
        let realized = deps_mentioned
            .iter()
            .filter(|d| has_import || code.contains(*d))
            .count();
        realized as f64 / deps_mentioned.len() as f64
    };

    patterns * weights.pattern_recognition
        + structure * weights.structural_elements
        + dependencies * weights.dependency_relations
}

/// Whether code realises a structural element the scenario mentions.
/// `method` and `class` are recognised in prompts but never credited.
fn structural_element_realized(keyword: &str, code_lower: &str) -> bool {
    match keyword {
        "function" => code_lower.contains("func "),
        "struct" => code_lower.contains("type ") && code_lower.contains("struct"),
        "interface" => code_lower.contains("interface"),
        "package" => code_lower.contains("package "),
        _ => false,
    }
}

pub fn structural_element_score(combined_lower: &str, code_lower: &str) -> f64 {
    let realized = mentioned_in(STRUCTURAL_KEYWORDS, combined_lower)
        .into_iter()
        .filter(|keyword| structural_element_realized(keyword, code_lower))
        .count();
    (realized as f64 / REALIZABLE_STRUCTURAL_ELEMENTS).min(1.0)
}

// ---------------------------------------------------------------------------
// Feature implementation
// ---------------------------------------------------------------------------

pub fn feature_extraction(
    solution: &SolutionCode,
    scenario: &Scenario,
    weights: &FeatureExtractionWeights,
) -> f64 {
    let combined = scenario.combined_text_lower();
    let code = solution.joined_lower();

    let business = overlap_ratio(&mentioned_in(BUSINESS_KEYWORDS, &combined), &code);
    let data_flow = overlap_ratio(&mentioned_in(DATA_FLOW_KEYWORDS, &combined), &code);
    let errors = if mentioned_in(ERROR_KEYWORDS, &combined).is_empty() {
        0.0
    } else if has_error_handling(&code) {
        1.0
    } else {
        0.5
    };

    business * weights.business_logic + data_flow * weights.data_flow + errors * weights.error_handling
}

/// Go-style `if err != nil`, any mention of `error`, or returning an `err`.
pub fn has_error_handling(code_lower: &str) -> bool {
    code_lower.contains("if err != nil")
        || code_lower.contains("error")
        || (code_lower.contains("return") && code_lower.contains("err"))
}

// ---------------------------------------------------------------------------
// General
// ---------------------------------------------------------------------------

pub fn general_extraction(
    solution: &SolutionCode,
    scenario: &Scenario,
    weights: &GeneralExtractionWeights,
) -> f64 {
    let combined = scenario.combined_text_lower();
    let code = solution.joined_lower();

    // Matched on lowercased text, so only the structural keywords count as concepts.
    let concepts = matches(&CONCEPT_TERM, &combined);
    let concept_score = if concepts.is_empty() {
        0.0
    } else {
        let found = concepts.iter().filter(|c| code.contains(*c)).count();
        found as f64 / concepts.len() as f64
    };

    let actions = mentioned_in(ACTION_KEYWORDS, &combined);
    let action_score = if actions.is_empty() {
        0.0
    } else {
        (function_declaration_count(&code) as f64 / actions.len() as f64).min(1.0)
    };

    let tech_score = overlap_ratio(&mentioned_in(TECH_KEYWORDS, &combined), &code);

    concept_score * weights.key_concepts
        + action_score * weights.actions
        + tech_score * weights.technical_requirements
}

/// Go-style `func ` declarations.
pub fn function_declaration_count(code_lower: &str) -> usize {
    code_lower.matches("func ").count()
}
