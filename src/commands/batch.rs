use super::{emit_report, resolve_config};
use crate::io::{self, BatchItem, OutputFormat, ScoreReport, ScoredSolution};
use crate::scoring::AgentMetricsCalculator;
use anyhow::{Context, Result};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;

const TEMPLATE_BATCH: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} solutions";

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub file: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// 0 uses the global rayon pool.
    pub jobs: usize,
}

/// Score every item; results keep input order.
pub fn score_items(
    calculator: &AgentMetricsCalculator,
    items: &[BatchItem],
    progress: ProgressBar,
) -> Vec<ScoredSolution> {
    items
        .par_iter()
        .progress_with(progress)
        .map(|item| ScoredSolution {
            id: item.id.clone(),
            card: calculator.evaluate(&item.scenario, &item.solution_code),
        })
        .collect()
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(TEMPLATE_BATCH)
            .context("Invalid progress bar template")?
            .progress_chars("█▓▒░  "),
    );
    Ok(pb)
}

pub fn run_batch(options: BatchConfig) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;
    let items = io::load_batch(&options.file)
        .with_context(|| format!("Failed to load batch {}", options.file.display()))?;

    log::info!("Scoring {} solutions from {}", items.len(), options.file.display());

    let calculator = AgentMetricsCalculator::new(&config);
    let progress = progress_bar(items.len())?;

    let results = if options.jobs > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()
            .context("Failed to build thread pool")?;
        pool.install(|| score_items(&calculator, &items, progress.clone()))
    } else {
        score_items(&calculator, &items, progress.clone())
    };
    progress.finish_and_clear();

    let report = ScoreReport::new(results);
    log::info!("Mean overall score {:.3}", report.mean_overall());

    let format = options.format.unwrap_or(config.output.format);
    emit_report(&report, format, options.output.as_ref())
}
