pub mod input;
pub mod output;

pub use input::{load_batch, load_scenario, load_solution, BatchItem};
pub use output::{create_writer, OutputFormat, ReportWriter, ScoreReport, ScoredSolution};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io_with_path(e, path))
}
