//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fcnscrape_domain::{Release, ToolboxUrlMap};
use fcnscrape_extractor::Rejection;
use fcnscrape_pipeline::PipelineReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Outcome of filtering one candidate, for display.
pub type FilterOutcome = (String, std::result::Result<Vec<String>, Rejection>);

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

    /// Format a pipeline report.
    pub fn format_report(&self, report: &PipelineReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let written: serde_json::Map<String, serde_json::Value> = report
                    .written
                    .iter()
                    .map(|(name, count)| (name.clone(), serde_json::json!(count)))
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "release": report.release.as_str(),
                    "toolboxes": report.toolbox_count,
                    "written": written,
                    "empty": report.empty,
                    "skipped": report.skipped,
                    "combined": report.combined_count,
                    "elapsed_secs": report.elapsed.as_secs_f64(),
                }))?)
            }
            OutputFormat::Quiet => Ok(report.combined_count.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Toolbox", "Outcome", "Functions"]);
                for (name, count) in &report.written {
                    builder.push_record([name.as_str(), "written", &count.to_string()]);
                }
                for name in &report.empty {
                    builder.push_record([name.as_str(), "no functions", "-"]);
                }
                for name in &report.skipped {
                    builder.push_record([name.as_str(), "skipped", "-"]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let mut out = table.to_string();
                out.push('\n');
                out.push_str(&self.success(&format!(
                    "{}: {} unique functions from {} of {} toolboxes in {:.1}s",
                    report.release,
                    report.combined_count,
                    report.written.len(),
                    report.toolbox_count,
                    report.elapsed.as_secs_f64()
                )));
                if !report.skipped.is_empty() {
                    out.push('\n');
                    out.push_str(&self.warning(&format!(
                        "{} toolbox(es) skipped on timeout or connection failure",
                        report.skipped.len()
                    )));
                }
                Ok(out)
            }
        }
    }

    /// Format a toolbox URL map.
    pub fn format_urls(&self, urls: &ToolboxUrlMap) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = urls
                    .iter()
                    .map(|(name, url)| (name.to_string(), serde_json::json!(url)))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Quiet => Ok(urls.iter().map(|(_, url)| url).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if urls.is_empty() {
                    return Ok(self.colorize("No toolboxes found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Toolbox", "URL"]);
                for (name, url) in urls.iter() {
                    builder.push_record([name, url]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the combiner result.
    pub fn format_combined(&self, release: &Release, count: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "release": release.as_str(),
                "combined": count,
            }))?),
            OutputFormat::Quiet => Ok(count.to_string()),
            OutputFormat::Table => Ok(self.success(&format!(
                "Combined {} unique functions for {}",
                count, release
            ))),
        }
    }

    /// Format filter outcomes.
    pub fn format_filtered(&self, outcomes: &[FilterOutcome]) -> Result<String> {
        let names: Vec<&str> = outcomes
            .iter()
            .filter_map(|(_, outcome)| outcome.as_ref().ok())
            .flatten()
            .map(String::as_str)
            .collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&names)?),
            OutputFormat::Quiet => Ok(names.join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Candidate", "Result"]);
                for (candidate, outcome) in outcomes {
                    let result = match outcome {
                        Ok(names) if names.is_empty() => self.colorize("(nothing)", "yellow"),
                        Ok(names) => self.colorize(&names.join(", "), "green"),
                        Err(rejection) => {
                            self.colorize(&format!("rejected: {}", rejection.as_str()), "red")
                        }
                    };
                    builder.push_record([candidate.clone(), result]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
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

    /// Whether informational messages should be printed.
    pub fn is_quiet(&self) -> bool {
        self.format != OutputFormat::Table
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
