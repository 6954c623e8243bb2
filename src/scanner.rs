/*!
 * Directory scanning and variable merging functionality
 */

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, MAIN_SEPARATOR};
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::report::FileReportInfo;
use crate::substvar::parse_variables;
use crate::types::VariableMap;
use crate::utils::truncate_tail;

/// Filename suffix that marks a variable document
pub const SUBSTVAR_SUFFIX: &str = "defaultVars.substvar";

/// Scan statistics
#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    /// Number of variable documents processed
    pub files_processed: usize,
    /// Total number of variables merged into the map
    pub variables_merged: usize,
    /// Details for each document
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Scanner for substvar documents under a project's defaultVars tree
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scan statistics
    statistics: ScanStatistics,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: ScanStatistics::default(),
        }
    }

    /// Get scan statistics
    pub fn get_statistics(&self) -> ScanStatistics {
        self.statistics.clone()
    }

    /// Scan the defaultVars tree and merge every variable document
    ///
    /// Documents are visited in sorted filename order, so when two documents
    /// produce the same composite key the winner is always the same one.
    pub fn scan(&mut self) -> Result<VariableMap> {
        let scan_root = self.config.scan_root();
        let mut variables = VariableMap::new();

        for entry in WalkDir::new(&scan_root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_substvar_file(entry.path()) {
                continue;
            }

            self.process_file(&scan_root, entry.path(), &mut variables)?;
        }

        Ok(variables)
    }

    /// Decode a single document and merge its variables into the map
    fn process_file(
        &mut self,
        scan_root: &Path,
        path: &Path,
        variables: &mut VariableMap,
    ) -> Result<()> {
        self.progress.inc(1);

        // Update progress message to show current file
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        // Truncate if too long to avoid display issues
        let display_name = truncate_tail(&file_name, 40);
        self.progress
            .set_message(format!("Current file: {}", display_name));

        let mut file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let mut content = String::new();
        // A document that cannot be read (or is not UTF-8) decodes as empty
        let _ = file.read_to_string(&mut content);

        // Undecodable documents contribute zero variables instead of
        // aborting the export.
        let records = parse_variables(&content).unwrap_or_default();

        let prefix = key_prefix(scan_root, path);
        let merged = records.len();
        for variable in records {
            variables.insert(format!("{}{}", prefix, variable.name), variable.value);
        }

        self.statistics.files_processed += 1;
        self.statistics.variables_merged += merged;
        self.statistics.file_details.insert(
            relative_path(scan_root, path),
            FileReportInfo { variables: merged },
        );

        Ok(())
    }
}

/// Check whether a path names a variable document
pub fn is_substvar_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(SUBSTVAR_SUFFIX))
        .unwrap_or(false)
}

/// Derive the composite-key prefix for a document
///
/// The prefix is the document path relative to the scan root with the
/// `defaultVars.substvar` suffix removed. Nothing else is inserted, so a
/// document in a subdirectory keeps its trailing path separator and a
/// document at the scan root contributes no prefix at all.
pub fn key_prefix(scan_root: &Path, path: &Path) -> String {
    let rel = relative_path(scan_root, path);
    match rel.strip_suffix(SUBSTVAR_SUFFIX) {
        Some(prefix) => prefix.to_string(),
        None => rel,
    }
}

/// Strip the scan root (and its trailing separator) from a document path
fn relative_path(scan_root: &Path, path: &Path) -> String {
    let path = path.to_string_lossy();
    let root = scan_root.to_string_lossy();

    match path.strip_prefix(root.as_ref()) {
        Some(rest) => rest.strip_prefix(MAIN_SEPARATOR).unwrap_or(rest).to_string(),
        None => path.into_owned(),
    }
}
