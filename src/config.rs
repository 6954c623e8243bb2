/*!
 * Configuration handling for gvexport
 */

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::ensure;
use crate::error::Result;

/// Name of the directory that roots the variable tree inside a project
pub const DEFAULT_VARS_DIR: &str = "defaultVars";

/// Command-line arguments for gvexport
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "gvexport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Export TIBCO BusinessEvents global variable definitions to JSON",
    long_about = "Scans the defaultVars tree of a TIBCO BusinessEvents project, decodes every defaultVars.substvar document found there and merges all global variables into one flat JSON object keyed by path prefix and variable name."
)]
pub struct Args {
    /// Input BE project path
    #[clap(short = 'i', value_name = "DIR")]
    pub project_path: String,

    /// Output JSON file name
    #[clap(short = 'o', value_name = "FILE")]
    pub output_file: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// BE project directory to export from
    pub project_dir: PathBuf,

    /// Output JSON file path
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            project_dir: PathBuf::from(args.project_path),
            output_file: PathBuf::from(args.output_file),
        }
    }

    /// Directory scanned for substvar documents
    pub fn scan_root(&self) -> PathBuf {
        self.project_dir.join(DEFAULT_VARS_DIR)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.project_dir.is_dir(),
            Config,
            "Project directory not found: {}",
            self.project_dir.display()
        );

        let scan_root = self.scan_root();
        ensure!(
            scan_root.is_dir(),
            Config,
            "Project has no {} directory: {}",
            DEFAULT_VARS_DIR,
            scan_root.display()
        );

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}
