//! Metric computation: the calculator and the score card it produces.

pub mod calculator;
pub mod scorecard;

pub use calculator::{AgentMetricsCalculator, CONTEXT_CONSISTENCY_BRANCH, MULTI_SESSION_BRANCH};
pub use scorecard::{ComponentScore, MetricBreakdown, ScoreCard};
