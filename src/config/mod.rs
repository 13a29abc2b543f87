//! `.agentscore.toml` configuration.
//!
//! ```toml
//! [weights.acs]
//! pattern_consistency = 0.4
//! file_organization = 0.3
//! naming_consistency = 0.2
//! dependency_structure = 0.1
//!
//! [output]
//! format = "table"
//! ```

mod loader;
pub mod weights;

pub use loader::{
    default_config_toml, directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME, MAX_TRAVERSAL_DEPTH,
};
pub use weights::{ComponentWeights, MetricWeights};

use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentScoreConfig {
    #[serde(default)]
    pub weights: MetricWeights,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Used when `--format` is not given on the command line.
    #[serde(default)]
    pub format: OutputFormat,
}

impl AgentScoreConfig {
    pub fn with_weights(mut self, weights: MetricWeights) -> Self {
        self.weights = weights;
        self
    }
}
