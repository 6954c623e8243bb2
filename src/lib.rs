/*!
 * gvexport - Export TIBCO BusinessEvents global variable definitions to JSON
 *
 * This library scans the defaultVars tree of a BusinessEvents project for
 * substvar documents and merges every global variable they define into one
 * flat JSON object keyed by path prefix and variable name.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod substvar;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{GvExportError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{GlobalVariable, VariableMap};
pub use utils::{count_files, truncate_tail};
pub use writer::JsonWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
