//! Reading scenarios and solutions from disk.

use crate::core::{Error, Result, Scenario, SolutionCode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// One entry of a batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub scenario: Scenario,
    /// Required: a batch entry without a solution is rejected, never scored as empty.
    pub solution_code: SolutionCode,
}

fn read_text(path: &Path, what: &str) -> Result<String> {
    if !path.exists() {
        return Err(Error::InvalidInput(format!(
            "{what} not found: {}",
            path.display()
        )));
    }
    fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

fn decode<T: serde::de::DeserializeOwned>(text: &str, path: &Path, what: &str) -> Result<T> {
    serde_json::from_str(text)
        .map_err(|e| Error::InvalidInput(format!("{what} {}: {e}", path.display())))
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = read_text(path, "scenario")?;
    decode(&text, path, "scenario")
}

/// A JSON object file (`name -> source`) or a directory whose files become
/// the solution, keyed by their path relative to the directory.
pub fn load_solution(path: &Path) -> Result<SolutionCode> {
    if path.is_dir() {
        return load_solution_dir(path);
    }
    let text = read_text(path, "solution")?;
    decode(&text, path, "solution")
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

fn load_solution_dir(root: &Path) -> Result<SolutionCode> {
    let mut solution = SolutionCode::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| {
            Error::file_system(format!("Failed to walk solution directory: {e}"), root)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        if is_hidden(relative) {
            continue;
        }

        let bytes = fs::read(entry.path()).map_err(|e| Error::io_with_path(e, entry.path()))?;
        match String::from_utf8(bytes) {
            Ok(source) => {
                let name = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                solution.insert(name, source);
            }
            Err(_) => log::warn!("Skipping non UTF-8 file {}", entry.path().display()),
        }
    }

    log::debug!("Loaded {} files from {}", solution.len(), root.display());
    Ok(solution)
}

pub fn load_batch(path: &Path) -> Result<Vec<BatchItem>> {
    let text = read_text(path, "batch file")?;
    let mut items: Vec<BatchItem> = decode(&text, path, "batch file")?;
    for (index, item) in items.iter_mut().enumerate() {
        if item.id.is_empty() {
            item.id = format!("#{}", index + 1);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_solution_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let err = load_solution(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "{err}");
    }

    #[test]
    fn test_solution_from_json_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solution.json");
        fs::write(&path, r#"{"b.py": "x = 1", "a.py": "y = 2"}"#).unwrap();

        let solution = load_solution(&path).unwrap();
        let names: Vec<_> = solution.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_solution_json_must_be_an_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solution.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(
            load_solution(&path).unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_solution_from_directory_skips_hidden() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pkg")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("main.go"), "package main").unwrap();
        fs::write(dir.path().join("pkg").join("store.go"), "package pkg").unwrap();
        fs::write(dir.path().join(".git").join("HEAD"), "ref").unwrap();

        let solution = load_solution(dir.path()).unwrap();
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.get("pkg/store.go"), Some("package pkg"));
    }

    #[test]
    fn test_scenario_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenario.json");
        fs::write(&path, r#"{"task_prompt": "Add caching", "description": null}"#).unwrap();

        let scenario = load_scenario(&path).unwrap();
        assert_eq!(scenario.task_prompt, "Add caching");
        assert_eq!(scenario.description, "");
        assert!(scenario.context_files.is_empty());
    }

    #[test]
    fn test_batch_assigns_missing_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch.json");
        fs::write(
            &path,
            r#"[{"id": "first", "solution_code": {}}, {"scenario": {"task_prompt": "x"}, "solution_code": {"a.py": ""}}]"#,
        )
        .unwrap();

        let items = load_batch(&path).unwrap();
        assert_eq!(items[0].id, "first");
        assert_eq!(items[1].id, "#2");
        assert_eq!(items[1].scenario.task_prompt, "x");
    }

    #[test]
    fn test_batch_entry_without_solution_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch.json");
        fs::write(&path, r#"[{"id": "x", "scenario": {}}]"#).unwrap();
        assert!(load_batch(&path).is_err());
    }
}
