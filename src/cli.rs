use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agentscore")]
#[command(about = "Heuristic multi-metric scorer for agent-written multi-file solutions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one solution against one scenario
    Score {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Solution JSON object (file name -> source) or a directory of files
        solution: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .agentscore.toml)
        #[arg(short, long, env = "AGENTSCORE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Score every entry of a batch file in parallel
    Batch {
        /// JSON array of {id, scenario, solution_code}
        file: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .agentscore.toml)
        #[arg(short, long, env = "AGENTSCORE_CONFIG")]
        config: Option<PathBuf>,

        /// Worker threads (0 = one per core)
        #[arg(short, long, default_value = "0")]
        jobs: usize,
    },

    /// Write a default .agentscore.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Yaml => crate::io::output::OutputFormat::Yaml,
            OutputFormat::Table => crate::io::output::OutputFormat::Table,
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` flags pick the level.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Yaml),
            crate::io::output::OutputFormat::Yaml
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Table),
            crate::io::output::OutputFormat::Table
        );
    }

    #[test]
    fn test_score_command_parsing() {
        let cli = Cli::try_parse_from([
            "agentscore",
            "-vv",
            "score",
            "scenario.json",
            "solution/",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Score {
                scenario,
                solution,
                format,
                output,
                ..
            } => {
                assert_eq!(scenario, PathBuf::from("scenario.json"));
                assert_eq!(solution, PathBuf::from("solution/"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_batch_jobs_default() {
        let cli = Cli::try_parse_from(["agentscore", "batch", "items.json"]).unwrap();
        match cli.command {
            Commands::Batch { jobs, format, .. } => {
                assert_eq!(jobs, 0);
                assert!(format.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(2), log::LevelFilter::Debug);
        assert_eq!(log_level(9), log::LevelFilter::Trace);
    }
}
