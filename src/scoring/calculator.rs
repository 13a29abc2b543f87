//! The six metric entry points.
//!
//! Every metric is a pure function of `(scenario, solution)`: the calculator
//! only carries read-only weights and pattern tables, so one instance can be
//! shared freely across threads.

use super::scorecard::{MetricBreakdown, ScoreCard};
use crate::analyzers::extraction::{information_extraction, ExtractionStrategy};
use crate::analyzers::{coordination, coverage, evolution, imports, sessions, structure};
use crate::config::{AgentScoreConfig, MetricWeights};
use crate::core::{MetricKind, Scenario, SolutionCode, TaskCategory};
use crate::patterns::tables::ARCHITECTURAL_PATTERNS;
use crate::patterns::KeywordFamily;

pub const MULTI_SESSION_BRANCH: &str = "multi_session";
pub const CONTEXT_CONSISTENCY_BRANCH: &str = "context_consistency";

#[derive(Debug, Clone)]
pub struct AgentMetricsCalculator {
    weights: MetricWeights,
    architectural_patterns: &'static [KeywordFamily],
}

impl Default for AgentMetricsCalculator {
    fn default() -> Self {
        Self::with_weights(MetricWeights::default())
    }
}

impl AgentMetricsCalculator {
    pub fn new(config: &AgentScoreConfig) -> Self {
        Self::with_weights(config.weights.clone())
    }

    pub fn with_weights(weights: MetricWeights) -> Self {
        Self {
            weights,
            architectural_patterns: ARCHITECTURAL_PATTERNS,
        }
    }

    pub fn weights(&self) -> &MetricWeights {
        &self.weights
    }

    /// All six metrics with their component breakdowns.
    pub fn evaluate(&self, scenario: &Scenario, solution: &SolutionCode) -> ScoreCard {
        let metrics = MetricKind::ALL
            .iter()
            .map(|kind| self.breakdown(*kind, scenario, solution))
            .collect();
        ScoreCard::new(scenario.task_category.clone(), solution.len(), metrics)
    }

    pub fn breakdown(
        &self,
        metric: MetricKind,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> MetricBreakdown {
        let breakdown = match metric {
            MetricKind::ArchitecturalCoherence => self.architectural_coherence_breakdown(solution),
            MetricKind::DependencyTraversal => self.dependency_traversal_breakdown(solution),
            MetricKind::MultiSessionMemory => self.multi_session_memory_breakdown(scenario, solution),
            MetricKind::CrossFileReasoning => self.cross_file_reasoning_breakdown(scenario, solution),
            MetricKind::IncrementalDevelopment => {
                self.incremental_development_breakdown(scenario, solution)
            }
            MetricKind::InformationCoverage => self.information_coverage_breakdown(scenario, solution),
        };
        log::debug!(
            "{} = {:.4} {:?}",
            metric,
            breakdown.value,
            breakdown
                .components
                .iter()
                .map(|c| (c.name.as_str(), c.value))
                .collect::<Vec<_>>()
        );
        breakdown
    }

    pub fn architectural_coherence_score(&self, scenario: &Scenario, solution: &SolutionCode) -> f64 {
        self.breakdown(MetricKind::ArchitecturalCoherence, scenario, solution)
            .value
    }

    pub fn dependency_traversal_accuracy(&self, scenario: &Scenario, solution: &SolutionCode) -> f64 {
        self.breakdown(MetricKind::DependencyTraversal, scenario, solution)
            .value
    }

    pub fn multi_session_memory_retention(
        &self,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> f64 {
        self.breakdown(MetricKind::MultiSessionMemory, scenario, solution)
            .value
    }

    pub fn cross_file_reasoning_depth(&self, scenario: &Scenario, solution: &SolutionCode) -> f64 {
        self.breakdown(MetricKind::CrossFileReasoning, scenario, solution)
            .value
    }

    pub fn incremental_development_capability(
        &self,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> f64 {
        self.breakdown(MetricKind::IncrementalDevelopment, scenario, solution)
            .value
    }

    pub fn information_coverage_utilization(
        &self,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> f64 {
        self.breakdown(MetricKind::InformationCoverage, scenario, solution)
            .value
    }

    fn architectural_coherence_breakdown(&self, solution: &SolutionCode) -> MetricBreakdown {
        let weights = &self.weights.acs;
        if solution.is_empty() {
            return MetricBreakdown::zero(MetricKind::ArchitecturalCoherence, weights);
        }
        MetricBreakdown::weighted(
            MetricKind::ArchitecturalCoherence,
            weights,
            &[
                structure::pattern_consistency(solution, self.architectural_patterns),
                structure::file_organization(solution),
                structure::naming_consistency(solution),
                structure::dependency_structure(solution),
            ],
        )
    }

    fn dependency_traversal_breakdown(&self, solution: &SolutionCode) -> MetricBreakdown {
        let weights = &self.weights.dta;
        if solution.is_empty() {
            return MetricBreakdown::zero(MetricKind::DependencyTraversal, weights);
        }
        MetricBreakdown::weighted(
            MetricKind::DependencyTraversal,
            weights,
            &[
                imports::import_accuracy(solution),
                imports::cross_file_references(solution),
                imports::dependency_order(solution),
            ],
        )
    }

    fn multi_session_memory_breakdown(
        &self,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> MetricBreakdown {
        match scenario.category() {
            TaskCategory::MultiSessionDevelopment => MetricBreakdown::weighted(
                MetricKind::MultiSessionMemory,
                &self.weights.mmr,
                &[
                    sessions::naming_consistency_across_files(solution),
                    sessions::approach_consistency(solution),
                    sessions::state_management(solution),
                ],
            )
            .with_branch(MULTI_SESSION_BRANCH),
            _ => self
                .context_consistency(scenario, solution)
                .with_branch(CONTEXT_CONSISTENCY_BRANCH),
        }
    }

    fn context_consistency(&self, scenario: &Scenario, solution: &SolutionCode) -> MetricBreakdown {
        MetricBreakdown::weighted(
            MetricKind::MultiSessionMemory,
            &self.weights.mmr_fallback,
            &[
                coverage::context_usage(solution, &scenario.context_files),
                coverage::requirement_coverage(solution, &scenario.task_prompt),
                coverage::terminology_consistency(solution, scenario),
            ],
        )
    }

    fn cross_file_reasoning_breakdown(
        &self,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> MetricBreakdown {
        let weights = &self.weights.cfrd;
        if solution.is_empty() {
            return MetricBreakdown::zero(MetricKind::CrossFileReasoning, weights);
        }
        MetricBreakdown::weighted(
            MetricKind::CrossFileReasoning,
            weights,
            &[
                coordination::interface_usage(solution),
                coordination::shared_state_coordination(solution),
                coordination::modification_coordination(solution, scenario),
                coordination::data_flow_understanding(solution),
            ],
        )
    }

    fn incremental_development_breakdown(
        &self,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> MetricBreakdown {
        let weights = &self.weights.idc;
        if solution.is_empty() {
            return MetricBreakdown::zero(MetricKind::IncrementalDevelopment, weights);
        }
        MetricBreakdown::weighted(
            MetricKind::IncrementalDevelopment,
            weights,
            &[
                evolution::backward_compatibility(solution, scenario),
                evolution::code_reuse(solution),
                evolution::extension_patterns(solution),
                evolution::minimal_disruption(solution, scenario),
            ],
        )
    }

    fn information_coverage_breakdown(
        &self,
        scenario: &Scenario,
        solution: &SolutionCode,
    ) -> MetricBreakdown {
        let strategy = ExtractionStrategy::for_category(scenario.category());
        MetricBreakdown::weighted(
            MetricKind::InformationCoverage,
            &self.weights.icu,
            &[
                coverage::context_usage(solution, &scenario.context_files),
                coverage::requirement_coverage(solution, &scenario.task_prompt),
                information_extraction(solution, scenario, &self.weights),
            ],
        )
        .with_branch(strategy.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> AgentMetricsCalculator {
        AgentMetricsCalculator::default()
    }

    #[test]
    fn test_empty_solution_short_circuits() {
        let calc = calculator();
        let scenario = Scenario::new("Update the legacy API").with_category("multi_session_development");
        let empty = SolutionCode::new();
        assert_eq!(calc.architectural_coherence_score(&scenario, &empty), 0.0);
        assert_eq!(calc.dependency_traversal_accuracy(&scenario, &empty), 0.0);
        assert_eq!(calc.cross_file_reasoning_depth(&scenario, &empty), 0.0);
        assert_eq!(calc.incremental_development_capability(&scenario, &empty), 0.0);
    }

    #[test]
    fn test_mmr_branches_on_category() {
        let calc = calculator();
        let solution = SolutionCode::new()
            .with_file("a.py", "def getUser():\n    pass")
            .with_file("b.py", "def get_user():\n    pass");

        let multi = Scenario::new("x").with_category("multi_session_development");
        let card = calc.breakdown(MetricKind::MultiSessionMemory, &multi, &solution);
        assert_eq!(card.branch.as_deref(), Some(MULTI_SESSION_BRANCH));
        assert!(card.component("naming_consistency").unwrap() < 1.0);

        let other = Scenario::new("x").with_category("feature_implementation");
        let card = calc.breakdown(MetricKind::MultiSessionMemory, &other, &solution);
        assert_eq!(card.branch.as_deref(), Some(CONTEXT_CONSISTENCY_BRANCH));
        assert!(card.component("naming_consistency").is_none());
        assert_eq!(card.component("context_usage"), Some(0.5));
    }

    #[test]
    fn test_icu_records_extraction_strategy() {
        let calc = calculator();
        let scenario = Scenario::new("x").with_category("architectural_understanding");
        let card = calc.breakdown(
            MetricKind::InformationCoverage,
            &scenario,
            &SolutionCode::new().with_file("a.go", "package a"),
        );
        assert_eq!(card.branch.as_deref(), Some("architectural"));
    }

    #[test]
    fn test_scorecard_matches_entry_points() {
        let calc = calculator();
        let scenario = Scenario::new("Add caching to UserService")
            .with_category("feature_implementation")
            .with_context_files(["service/user_service.py"]);
        let solution = SolutionCode::new()
            .with_file(
                "service.py",
                "import os\n\nclass UserService:\n    def get_user(self, user_id):\n        return self.cache.get(user_id)\n",
            )
            .with_file("cache.py", "class Cache:\n    def get(self, key):\n        return None\n");

        let card = calc.evaluate(&scenario, &solution);
        assert_eq!(card.file_count, 2);
        assert_eq!(
            card.value(MetricKind::ArchitecturalCoherence),
            Some(calc.architectural_coherence_score(&scenario, &solution))
        );
        assert_eq!(
            card.value(MetricKind::InformationCoverage),
            Some(calc.information_coverage_utilization(&scenario, &solution))
        );
        for metric in &card.metrics {
            assert!((0.0..=1.0).contains(&metric.value), "{:?}", metric);
        }
    }
}
