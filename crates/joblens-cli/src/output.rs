//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use joblens_eval::{FieldComparison, FieldOutcome, FieldReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest expected/actual text shown in table cells. The comparison
/// itself always uses the full strings.
const DISPLAY_WIDTH: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a field comparison report.
    pub fn format_report(&self, report: &FieldReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
        }
    }

    fn format_report_table(&self, report: &FieldReport) -> String {
        if report.comparisons.is_empty() {
            return self.colorize("No fields compared.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Outcome", "Score", "Expected", "Actual"]);

        for comparison in &report.comparisons {
            let score = comparison
                .score
                .map(|s| format!("{} / {}", s, comparison.threshold))
                .unwrap_or_else(|| "-".to_string());
            builder.push_record([
                comparison.field.as_str(),
                outcome_label(comparison.outcome),
                &score,
                &truncate(comparison.expected.as_deref().unwrap_or("-")),
                &truncate(&comparison.actual),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary = format!(
            "{} passed, {} failed, {} skipped",
            report.passed(),
            report.failed(),
            report.skipped()
        );
        let summary = if report.has_failures() {
            self.colorize(&summary, "red")
        } else {
            self.colorize(&summary, "green")
        };

        format!("{}\n{}", table, summary)
    }

    /// Quiet mode prints failed field names only, one per line.
    fn format_report_quiet(&self, report: &FieldReport) -> String {
        report
            .comparisons
            .iter()
            .filter(|c| c.outcome == FieldOutcome::Failed)
            .map(|c: &FieldComparison| c.field.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a similarity percentage.
    pub fn format_similarity(&self, score: f64) -> String {
        match self.format {
            OutputFormat::Json => {
                format!("{{\"similarity_percent\": {:.2}}}", score)
            }
            _ => format!("Similarity Score: {:.2}%", score),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn outcome_label(outcome: FieldOutcome) -> &'static str {
    match outcome {
        FieldOutcome::Passed => "pass",
        FieldOutcome::Failed => "FAIL",
        FieldOutcome::Skipped => "skip",
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= DISPLAY_WIDTH {
        text.to_string()
    } else {
        let shortened: String = text.chars().take(DISPLAY_WIDTH).collect();
        format!("{}...", shortened)
    }
}
