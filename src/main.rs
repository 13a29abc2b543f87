use agentscore::cli::{log_level, Cli, Commands};
use agentscore::commands::{self, BatchConfig, ScoreConfig};
use anyhow::Result;
use clap::Parser;

fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Score {
            scenario,
            solution,
            format,
            output,
            config,
        } => commands::run_score(ScoreConfig {
            scenario,
            solution,
            format: format.map(Into::into),
            output,
            config,
        }),
        Commands::Batch {
            file,
            format,
            output,
            config,
            jobs,
        } => commands::run_batch(BatchConfig {
            file,
            format: format.map(Into::into),
            output,
            config,
            jobs,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
