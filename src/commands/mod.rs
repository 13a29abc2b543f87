//! CLI command implementations.
//!
//! - **score**: score one solution against one scenario
//! - **batch**: score a JSON batch file in parallel
//! - **init**: write a default `.agentscore.toml`

pub mod batch;
pub mod init;
pub mod score;

pub use batch::{run_batch, BatchConfig};
pub use init::init_config;
pub use score::{run_score, ScoreConfig};

use crate::config::{self, AgentScoreConfig};
use crate::io::{create_writer, OutputFormat, ScoreReport};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Explicit `--config` file, or the nearest `.agentscore.toml`.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<AgentScoreConfig> {
    match explicit {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

pub(crate) fn emit_report(
    report: &ScoreReport,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            create_writer(format, &mut writer).write_report(report)?;
            writer.flush()?;
            log::info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            create_writer(format, &mut handle).write_report(report)?;
        }
    }
    Ok(())
}
