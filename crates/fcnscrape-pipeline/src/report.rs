//! Outcome report for a pipeline run

use fcnscrape_domain::Release;
use std::time::Duration;

/// What happened to each toolbox during a run
///
/// Toolboxes appear in processing order within each list.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Release that was scraped
    pub release: Release,

    /// Toolboxes in the URL map
    pub toolbox_count: usize,

    /// Toolboxes with an artifact written, with their function counts
    pub written: Vec<(String, usize)>,

    /// Toolboxes whose documentation yielded no candidates
    pub empty: Vec<String>,

    /// Toolboxes skipped after a timeout or connection failure
    pub skipped: Vec<String>,

    /// Unique functions in the combined artifact
    pub combined_count: usize,

    /// Wall clock time of the run
    pub elapsed: Duration,
}

impl PipelineReport {
    /// Create an empty report for a run over `toolbox_count` toolboxes
    pub fn new(release: Release, toolbox_count: usize) -> Self {
        Self {
            release,
            toolbox_count,
            written: Vec::new(),
            empty: Vec::new(),
            skipped: Vec::new(),
            combined_count: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Record a written toolbox artifact
    pub fn record_written(&mut self, toolbox: &str, functions: usize) {
        self.written.push((toolbox.to_string(), functions));
    }

    /// Record a toolbox with no functions
    pub fn record_empty(&mut self, toolbox: &str) {
        self.empty.push(toolbox.to_string());
    }

    /// Record a toolbox skipped on transport failure
    pub fn record_skipped(&mut self, toolbox: &str) {
        self.skipped.push(toolbox.to_string());
    }

    /// Total functions written across toolbox artifacts, duplicates included
    pub fn total_written(&self) -> usize {
        self.written.iter().map(|(_, count)| count).sum()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Scrape Summary for {}", self.release),
            "========================".to_string(),
            format!("Toolboxes: {}", self.toolbox_count),
            format!(
                "Written: {} ({} functions)",
                self.written.len(),
                self.total_written()
            ),
            format!("No functions: {}", self.empty.len()),
            format!("Skipped: {}", self.skipped.len()),
            format!("Combined unique functions: {}", self.combined_count),
            format!("Elapsed: {:.1}s", self.elapsed.as_secs_f64()),
        ];

        if !self.skipped.is_empty() {
            lines.push(String::new());
            lines.push("Skipped toolboxes:".to_string());
            for toolbox in &self.skipped {
                lines.push(format!("  {}", toolbox));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> PipelineReport {
        PipelineReport::new(Release::parse("R2022a").unwrap(), 4)
    }

    #[test]
    fn test_report_creation() {
        let report = report();
        assert_eq!(report.toolbox_count, 4);
        assert_eq!(report.total_written(), 0);
        assert!(report.written.is_empty());
    }

    #[test]
    fn test_record_outcomes() {
        let mut report = report();
        report.record_written("MATLAB", 10);
        report.record_written("Simulink", 5);
        report.record_empty("Restricted Toolbox");
        report.record_skipped("Slow Toolbox");

        assert_eq!(report.total_written(), 15);
        assert_eq!(report.empty, vec!["Restricted Toolbox"]);
        assert_eq!(report.skipped, vec!["Slow Toolbox"]);
    }

    #[test]
    fn test_summary() {
        let mut report = report();
        report.record_written("MATLAB", 3);
        report.record_skipped("Slow Toolbox");
        report.combined_count = 3;

        let summary = report.summary();
        assert!(summary.contains("R2022a"));
        assert!(summary.contains("Written: 1 (3 functions)"));
        assert!(summary.contains("Combined unique functions: 3"));
        assert!(summary.contains("  Slow Toolbox"));
    }
}
