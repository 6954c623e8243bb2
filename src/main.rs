/*!
 * Command-line interface for gvexport
 */

use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use gvexport::config::{Args, Config};
use gvexport::error::Result;
use gvexport::report::{ReportFormat, Reporter, ScanReport};
use gvexport::scanner::Scanner;
use gvexport::utils::count_files;
use gvexport::writer::JsonWriter;

fn main() {
    // Parse command line arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                process::exit(0);
            }
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    if let Err(e) = run(Config::from_args(args)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    // Validate configuration
    config.validate()?;

    println!(
        "Exporting GV definitions from the BE Project[{}] into the file[{}]",
        config.project_dir.display(),
        config.output_file.display()
    );

    // Create progress bar with advanced Unicode styling
    let progress = ProgressBar::new(0);
    progress.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}  Remaining: {eta_precise}  Speed: {per_sec}/s")
        .unwrap());
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");

    let scan_root = config.scan_root();
    progress.set_message(format!("📂 Scanning directory: {}", scan_root.display()));

    // Count documents for progress tracking
    let total_files = match count_files(&scan_root) {
        Ok(count) => {
            progress.set_message(format!("🔎 Found {} documents to process", count));
            count
        }
        Err(e) => {
            progress.set_message(format!("⚠️ Warning: Failed to count documents: {}", e));
            0
        }
    };

    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");
    progress.set_message("Starting scan...");

    // Create scanner and writer
    let mut scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let writer = JsonWriter::new(config.clone());

    // Start timing both scan and write operations
    let start_time = Instant::now();

    // Scan the defaultVars tree
    let variables = scanner.scan()?;

    // Write JSON output
    writer.write(&variables)?;

    // Calculate total duration (scan + write)
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Get scan statistics
    let scan_stats = scanner.get_statistics();

    // Prepare the export report
    let scan_report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        files_processed: scan_stats.files_processed,
        variables_merged: scan_stats.variables_merged,
        variables_exported: variables.len(),
        file_details: scan_stats.file_details,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&scan_report);

    println!("DONE");

    Ok(())
}
