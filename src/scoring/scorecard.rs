use crate::common::{clamp_unit, mean};
use crate::config::ComponentWeights;
use crate::core::MetricKind;
use serde::{Deserialize, Serialize};

/// One weighted input of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub name: String,
    pub weight: f64,
    pub value: f64,
}

impl ComponentScore {
    pub fn contribution(&self) -> f64 {
        self.value * self.weight
    }
}

/// A metric value together with the components that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBreakdown {
    pub metric: MetricKind,
    pub value: f64,
    /// Category-dependent path taken, e.g. the MMR fallback or the ICU
    /// extraction strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub components: Vec<ComponentScore>,
}

impl MetricBreakdown {
    /// Pair `values` with `weights` in declaration order and clamp the
    /// weighted sum to [0, 1].
    pub fn weighted<W: ComponentWeights>(metric: MetricKind, weights: &W, values: &[f64]) -> Self {
        let components: Vec<ComponentScore> = weights
            .components()
            .into_iter()
            .zip(values.iter().copied())
            .map(|((name, weight), value)| ComponentScore {
                name: name.to_string(),
                weight,
                value,
            })
            .collect();

        let raw = components
            .iter()
            .fold(0.0, |acc, component| acc + component.contribution());

        Self {
            metric,
            value: clamp_unit(raw),
            branch: None,
            components,
        }
    }

    /// Every component zero; used for empty solutions.
    pub fn zero<W: ComponentWeights>(metric: MetricKind, weights: &W) -> Self {
        let zeros = vec![0.0; weights.components().len()];
        Self::weighted(metric, weights, &zeros)
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn component(&self, name: &str) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value)
    }
}

/// All six metrics for one `(scenario, solution)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub task_category: String,
    pub file_count: usize,
    pub metrics: Vec<MetricBreakdown>,
    /// Unweighted mean of the six metric values.
    pub overall: f64,
}

impl ScoreCard {
    pub fn new(task_category: impl Into<String>, file_count: usize, metrics: Vec<MetricBreakdown>) -> Self {
        let values: Vec<f64> = metrics.iter().map(|m| m.value).collect();
        Self {
            task_category: task_category.into(),
            file_count,
            overall: mean(&values),
            metrics,
        }
    }

    pub fn get(&self, metric: MetricKind) -> Option<&MetricBreakdown> {
        self.metrics.iter().find(|m| m.metric == metric)
    }

    pub fn value(&self, metric: MetricKind) -> Option<f64> {
        self.get(metric).map(|m| m.value)
    }
}
