/*!
 * Reporting functionality for gvexport
 *
 * Provides functionality for generating formatted reports of export results
 * using the tabled library for clean, consistent table rendering.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::truncate_tail;

/// Information about a variable document in the report
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Number of variables the document contributed
    pub variables: usize,
}

/// Statistics for an export run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to export
    pub duration: Duration,
    /// Number of variable documents processed
    pub files_processed: usize,
    /// Total number of variables merged
    pub variables_merged: usize,
    /// Number of distinct keys written to the output file
    pub variables_exported: usize,
    /// Details for each document
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
    // JSON, HTML, etc.
}

/// Report generator for export results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on export statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Format path for display and handle truncation if needed
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() <= 2 {
            return truncate_tail(path, max_len);
        }

        // Keep the last few segments
        let mut current_len = 3; // Start with "..."
        let mut segments = Vec::new();

        for part in parts.iter().rev() {
            let part_len = part.len() + 1; // +1 for '/'
            if current_len + part_len <= max_len {
                segments.push(*part);
                current_len += part_len;
            } else {
                break;
            }
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }

        result
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ScanReport) -> String {
        // Define the summary table data structure
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        // Add rows to the summary table
        rows.push(SummaryRow {
            key: "📂 Output File".to_string(),
            value: report.output_file.clone(),
        });

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "📄 Documents Processed".to_string(),
            value: self.format_number(report.files_processed),
        });

        rows.push(SummaryRow {
            key: "📝 Variables Merged".to_string(),
            value: self.format_number(report.variables_merged),
        });

        rows.push(SummaryRow {
            key: "🔑 Keys Exported".to_string(),
            value: self.format_number(report.variables_exported),
        });

        // Surface key collisions when later documents overwrote earlier ones
        if report.variables_merged > report.variables_exported {
            rows.push(SummaryRow {
                key: "♻️ Keys Overwritten".to_string(),
                value: self.format_number(report.variables_merged - report.variables_exported),
            });
        }

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a documents table using the tabled crate
    fn create_files_table(&self, report: &ScanReport) -> String {
        // Define the documents table data structure
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "Document")]
            path: String,

            #[tabled(rename = "Variables")]
            variables: String,
        }

        // Sort documents by variable count
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.variables.cmp(&a.variables));

        // Determine if we show all documents or just top 10
        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        // Generate rows for the table
        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                variables: self.format_number(info.variables),
            })
            .collect();

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ScanReport) -> String {
        // Generate summary and documents tables
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        // Create proper section titles
        let summary_title = "✅  EXPORT COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 DOCUMENTS BY VARIABLE COUNT  📋"
        } else {
            "📋  PROCESSED DOCUMENTS"
        };

        // Combine them with appropriate spacing and titles, but put documents first
        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
