//! Core data model: the scenario an agent was given, the files it produced,
//! and the error type used at the input boundary.

pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{MetricKind, Scenario, SolutionCode, TaskCategory};
