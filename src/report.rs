/*!
 * Console completion report
 *
 * Renders the end-of-run summary to stdout using the tabled library. This
 * is terminal output only, never part of the persisted report file.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Statistics for one completed scan
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// Report file path
    pub output_file: String,
    /// Time taken for the full run
    pub duration: Duration,
    /// Number of files whose content made it into the report
    pub included_files: usize,
    /// Number of files listed but excluded
    pub excluded_files: usize,
    /// Total bytes of included content
    pub included_size: u64,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on the scan summary
    pub fn generate_report(&self, summary: &ScanSummary) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(summary),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, summary: &ScanSummary) {
        println!("\n{}", self.generate_report(summary));
    }

    // Build the summary table using the tabled crate
    fn generate_console_report(&self, summary: &ScanSummary) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: summary.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", summary.duration),
            },
            SummaryRow {
                key: "📄 Included Files".to_string(),
                value: summary.included_files.to_string(),
            },
            SummaryRow {
                key: "🚫 Excluded Files".to_string(),
                value: summary.excluded_files.to_string(),
            },
            SummaryRow {
                key: "📦 Included Content".to_string(),
                value: format!(
                    "{} ({} bytes)",
                    format_file_size(summary.included_size),
                    summary.included_size
                ),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!("✅  CONTEXT FILE GENERATED\n{}", table)
    }
}
