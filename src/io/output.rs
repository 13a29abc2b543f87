use crate::core::{MetricKind, Result};
use crate::scoring::ScoreCard;
use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Score at or above which a metric is shown as good.
const GOOD_SCORE: f64 = 0.7;
/// Score below which a metric is shown as poor.
const POOR_SCORE: f64 = 0.4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    #[default]
    Table,
}

/// Score card for one evaluated solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSolution {
    pub id: String,
    #[serde(flatten)]
    pub card: ScoreCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub results: Vec<ScoredSolution>,
}

impl ScoreReport {
    pub fn new(results: Vec<ScoredSolution>) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            results,
        }
    }

    /// Mean of the per-solution overall scores, `0.0` for an empty report.
    pub fn mean_overall(&self) -> f64 {
        let overall: Vec<f64> = self.results.iter().map(|r| r.card.overall).collect();
        crate::common::mean(&overall)
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &ScoreReport) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for YamlWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> Result<()> {
        let yaml = serde_yaml::to_string(report)?;
        self.writer.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

pub struct TableWriter<W: Write> {
    writer: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_solution(&mut self, result: &ScoredSolution) -> Result<()> {
        let card = &result.card;
        let category = if card.task_category.is_empty() {
            "general"
        } else {
            card.task_category.as_str()
        };
        writeln!(
            self.writer,
            "{} {} ({} files, {})",
            "Solution".bold(),
            result.id.bold(),
            card.file_count,
            category
        )?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            Cell::new("Metric").fg(Color::Cyan),
            Cell::new("Score").fg(Color::Cyan),
            Cell::new("Components").fg(Color::Cyan),
        ]);

        for metric in &card.metrics {
            let components = metric
                .components
                .iter()
                .map(|c| format!("{} {:.3} x {:.2}", c.name, c.value, c.weight))
                .collect::<Vec<_>>()
                .join("\n");
            let label = match &metric.branch {
                Some(branch) => format!("{} [{}]", metric_label(metric.metric), branch),
                None => metric_label(metric.metric),
            };
            table.add_row(vec![
                Cell::new(label),
                Cell::new(format!("{:.3}", metric.value)).fg(score_color(metric.value)),
                Cell::new(components),
            ]);
        }
        table.add_row(vec![
            Cell::new("Overall"),
            Cell::new(format!("{:.3}", card.overall)).fg(score_color(card.overall)),
            Cell::new(""),
        ]);

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TableWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "agentscore".bold(),
            report
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed()
        )?;
        writeln!(self.writer)?;

        for result in &report.results {
            self.write_solution(result)?;
        }

        if report.results.len() > 1 {
            writeln!(
                self.writer,
                "{} {:.3} over {} solutions",
                "Mean overall:".bold(),
                report.mean_overall(),
                report.results.len()
            )?;
        }
        Ok(())
    }
}

fn metric_label(metric: MetricKind) -> String {
    format!("{} {}", metric.abbreviation(), metric.display_name())
}

fn score_color(score: f64) -> Color {
    if score >= GOOD_SCORE {
        Color::Green
    } else if score >= POOR_SCORE {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn ReportWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
        OutputFormat::Table => Box::new(TableWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Scenario, SolutionCode};
    use crate::scoring::AgentMetricsCalculator;

    fn sample_report() -> ScoreReport {
        let scenario = Scenario::new("Add caching to UserService");
        let solution = SolutionCode::new().with_file("svc.py", "class UserService:\n    pass\n");
        let card = AgentMetricsCalculator::default().evaluate(&scenario, &solution);
        ScoreReport::new(vec![ScoredSolution {
            id: "sample".to_string(),
            card,
        }])
    }

    #[test]
    fn test_json_report_round_trips() {
        let report = sample_report();
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();

        let parsed: ScoreReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].id, "sample");
        assert_eq!(parsed.results[0].card.metrics.len(), 6);
    }

    #[test]
    fn test_yaml_report_has_timestamp() {
        let mut buffer = Vec::new();
        YamlWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("generated_at:"));
        assert!(text.contains("ArchitecturalCoherence"));
    }

    #[test]
    fn test_table_report_lists_every_metric() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        create_writer(OutputFormat::Table, &mut buffer)
            .write_report(&sample_report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        for metric in MetricKind::ALL {
            assert!(text.contains(metric.abbreviation()), "missing {metric}");
        }
        assert!(text.contains("Overall"));
    }

    #[test]
    fn test_score_colors() {
        assert_eq!(score_color(0.9), Color::Green);
        assert_eq!(score_color(0.5), Color::Yellow);
        assert_eq!(score_color(0.1), Color::Red);
    }
}
