use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Task description an agent was asked to solve.
///
/// Every field defaults to empty so partially filled scenario files decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub task_prompt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub task_category: String,
    #[serde(default)]
    pub context_files: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Scenario {
    pub fn new(task_prompt: impl Into<String>) -> Self {
        Self {
            task_prompt: task_prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.task_category = category.into();
        self
    }

    pub fn with_context_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn category(&self) -> TaskCategory {
        TaskCategory::from_tag(&self.task_category)
    }

    /// Lowercased `description + ' ' + task_prompt`, the text that
    /// "mentioned" vocabulary is looked up in.
    pub fn combined_text_lower(&self) -> String {
        format!("{} {}", self.description, self.task_prompt).to_lowercase()
    }
}

/// Known task categories. Any unrecognised tag is `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    MultiSessionDevelopment,
    ArchitecturalUnderstanding,
    FeatureImplementation,
    General,
}

impl TaskCategory {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "multi_session_development" => Self::MultiSessionDevelopment,
            "architectural_understanding" => Self::ArchitecturalUnderstanding,
            "feature_implementation" => Self::FeatureImplementation,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultiSessionDevelopment => "multi_session_development",
            Self::ArchitecturalUnderstanding => "architectural_understanding",
            Self::FeatureImplementation => "feature_implementation",
            Self::General => "general",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate files keyed by file name.
///
/// Backed by a `BTreeMap` so iteration order, and therefore every
/// floating point sum over files, is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionCode {
    files: BTreeMap<String, String>,
}

impl SolutionCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.files.insert(name.into(), source.into());
    }

    pub fn with_file(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(name, source);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.files.values().map(String::as_str)
    }

    /// All file texts joined by a single space.
    pub fn joined(&self) -> String {
        self.sources().collect::<Vec<_>>().join(" ")
    }

    pub fn joined_lower(&self) -> String {
        self.joined().to_lowercase()
    }
}

impl<K, V> FromIterator<(K, V)> for SolutionCode
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for SolutionCode {
    fn from(files: BTreeMap<String, String>) -> Self {
        Self { files }
    }
}

/// The six evaluation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKind {
    ArchitecturalCoherence,
    DependencyTraversal,
    MultiSessionMemory,
    CrossFileReasoning,
    IncrementalDevelopment,
    InformationCoverage,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::ArchitecturalCoherence,
        MetricKind::DependencyTraversal,
        MetricKind::MultiSessionMemory,
        MetricKind::CrossFileReasoning,
        MetricKind::IncrementalDevelopment,
        MetricKind::InformationCoverage,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::ArchitecturalCoherence => "ACS",
            Self::DependencyTraversal => "DTA",
            Self::MultiSessionMemory => "MMR",
            Self::CrossFileReasoning => "CFRD",
            Self::IncrementalDevelopment => "IDC",
            Self::InformationCoverage => "ICU",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ArchitecturalCoherence => "Architectural Coherence",
            Self::DependencyTraversal => "Dependency Traversal Accuracy",
            Self::MultiSessionMemory => "Multi-Session Memory Retention",
            Self::CrossFileReasoning => "Cross-File Reasoning Depth",
            Self::IncrementalDevelopment => "Incremental Development Capability",
            Self::InformationCoverage => "Information Coverage Utilization",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_general() {
        assert_eq!(TaskCategory::from_tag("bug_fixing"), TaskCategory::General);
        assert_eq!(TaskCategory::from_tag(""), TaskCategory::General);
        assert_eq!(
            TaskCategory::from_tag("multi_session_development"),
            TaskCategory::MultiSessionDevelopment
        );
    }

    #[test]
    fn test_scenario_decodes_with_missing_and_null_fields() {
        let scenario: Scenario =
            serde_json::from_str(r#"{"task_prompt": "Add Login", "description": null}"#).unwrap();
        assert_eq!(scenario.task_prompt, "Add Login");
        assert_eq!(scenario.description, "");
        assert!(scenario.context_files.is_empty());
        assert_eq!(scenario.category(), TaskCategory::General);
    }

    #[test]
    fn test_scenario_ignores_unknown_fields() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"task_category": "feature_implementation", "difficulty": "hard"}"#,
        )
        .unwrap();
        assert_eq!(scenario.category(), TaskCategory::FeatureImplementation);
    }

    #[test]
    fn test_solution_code_iterates_by_name() {
        let solution: SolutionCode = [("b.py", "two"), ("a.py", "one")].into_iter().collect();
        let names: Vec<_> = solution.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a.py", "b.py"]);
        assert_eq!(solution.joined(), "one two");
    }

    #[test]
    fn test_solution_code_decodes_from_json_map() {
        let solution: SolutionCode =
            serde_json::from_str(r#"{"main.go": "package main"}"#).unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.get("main.go"), Some("package main"));
    }
}
