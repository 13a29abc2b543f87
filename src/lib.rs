//! Heuristic scoring of multi-file solutions produced by coding agents.
//!
//! Six independent metrics, each in `[0, 1]`:
//!
//! | Metric | Measures |
//! |--------|----------|
//! | ACS  | architectural coherence: patterns, organization, naming, imports |
//! | DTA  | dependency traversal: import validity, call resolution, import placement |
//! | MMR  | multi-session memory: cross-file naming, approach and state handling |
//! | CFRD | cross-file reasoning: interfaces, shared state, edits, data flow |
//! | IDC  | incremental development: compatibility, reuse, extension, disruption |
//! | ICU  | information coverage: context files, requirements, extracted vocabulary |
//!
//! ```rust
//! use agentscore::{AgentMetricsCalculator, Scenario, SolutionCode};
//!
//! let scenario = Scenario::new("Add caching to UserService");
//! let solution = SolutionCode::new().with_file("service.py", "class UserService:\n    pass\n");
//!
//! let calculator = AgentMetricsCalculator::default();
//! let score = calculator.architectural_coherence_score(&scenario, &solution);
//! assert!((0.0..=1.0).contains(&score));
//! ```
//!
//! The heuristics read surface text only. They assume a mixed Python/Go
//! dialect (`def`/`class`/`import`/`from` and `func`/`var`/`type`/`package`);
//! solutions in other languages under-count silently.

pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod io;
pub mod patterns;
pub mod scoring;

pub use crate::config::{AgentScoreConfig, MetricWeights};
pub use crate::core::{Error, MetricKind, Result, Scenario, SolutionCode, TaskCategory};
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
pub use crate::patterns::NamingStyle;
pub use crate::scoring::{AgentMetricsCalculator, ComponentScore, MetricBreakdown, ScoreCard};
