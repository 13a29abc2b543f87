use super::{emit_report, resolve_config};
use crate::io::{self, OutputFormat, ScoreReport, ScoredSolution};
use crate::scoring::AgentMetricsCalculator;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub scenario: PathBuf,
    pub solution: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run_score(options: ScoreConfig) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;

    let scenario = io::load_scenario(&options.scenario)
        .with_context(|| format!("Failed to load scenario {}", options.scenario.display()))?;
    let solution = io::load_solution(&options.solution)
        .with_context(|| format!("Failed to load solution {}", options.solution.display()))?;

    log::info!(
        "Scoring {} files from {} ({})",
        solution.len(),
        options.solution.display(),
        scenario.category()
    );

    let calculator = AgentMetricsCalculator::new(&config);
    let card = calculator.evaluate(&scenario, &solution);
    let report = ScoreReport::new(vec![ScoredSolution {
        id: options.solution.display().to_string(),
        card,
    }]);

    let format = options.format.unwrap_or(config.output.format);
    emit_report(&report, format, options.output.as_ref())
}
