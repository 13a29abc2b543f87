use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::AgentScoreConfig;
use crate::core::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".agentscore.toml";

/// How many directories, starting with the current one, are searched.
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document, then replace invalid weight sets with defaults and
/// normalise the valid ones.
pub fn parse_and_validate_config(contents: &str) -> Result<AgentScoreConfig> {
    let mut config = toml::from_str::<AgentScoreConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    for problem in config.weights.sanitize() {
        log::warn!("Invalid weights ({problem}). Using defaults for that set.");
    }

    Ok(config)
}

/// Load an explicitly named config file. Unlike discovery, a missing or
/// malformed file is an error.
pub fn load_config_file(path: &Path) -> Result<AgentScoreConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io_with_path(e, path))?;
    let config = parse_and_validate_config(&contents).context(path.display().to_string())?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<AgentScoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for [`CONFIG_FILE_NAME`].
pub fn load_config_from(start: &Path) -> AgentScoreConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AgentScoreConfig::default()
        })
}

pub fn load_config() -> AgentScoreConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AgentScoreConfig::default()
        }
    }
}

/// The document `agentscore init` writes: every default weight spelled out.
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&AgentScoreConfig::default())
        .map_err(|e| Error::Configuration(format!("Failed to render default config: {e}")))?;
    Ok(format!(
        "# agentscore configuration\n#\n# Each [weights.<set>] table must sum to 1.0.\n\n{body}"
    ))
}
