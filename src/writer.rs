/*!
 * JSON writer implementation for gvexport
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::Config;
use crate::error::Result;
use crate::types::VariableMap;

/// JSON writer for merged variable maps
pub struct JsonWriter {
    /// Writer configuration
    config: Config,
}

impl JsonWriter {
    /// Create a new JSON writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the variable map to the output file
    ///
    /// The map is serialized as a single JSON object with two-space
    /// indentation and no trailing newline. Keys come out in the map's
    /// sorted order, and any existing file is replaced.
    pub fn write(&self, variables: &VariableMap) -> Result<()> {
        let file = File::create(&self.config.output_file)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, variables)?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    fn writer_for(output_file: PathBuf) -> JsonWriter {
        JsonWriter::new(Config {
            project_dir: PathBuf::from("."),
            output_file,
        })
    }

    #[test]
    fn test_sorted_output() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.json");

        let mut variables = VariableMap::new();
        variables.insert("b/Port".to_string(), "8080".to_string());
        variables.insert("a/Port".to_string(), "9090".to_string());

        writer_for(output.clone()).write(&variables).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "{\n  \"a/Port\": \"9090\",\n  \"b/Port\": \"8080\"\n}"
        );
    }

    #[test]
    fn test_empty_map() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.json");

        writer_for(output.clone()).write(&VariableMap::new()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "{}");
    }

    #[test]
    fn test_replaces_existing_file() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.json");
        fs::write(&output, "previous contents that are much longer than the new ones").unwrap();

        let mut variables = VariableMap::new();
        variables.insert("Name".to_string(), "value".to_string());

        writer_for(output.clone()).write(&variables).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\n  \"Name\": \"value\"\n}"
        );
    }

    #[test]
    fn test_escaped_values() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.json");

        let mut variables = VariableMap::new();
        variables.insert("Motd".to_string(), "line1\nline2 \"quoted\"".to_string());

        writer_for(output.clone()).write(&variables).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\n  \"Motd\": \"line1\\nline2 \\\"quoted\\\"\"\n}"
        );
    }

    #[test]
    fn test_unwritable_output_path() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("missing-dir").join("out.json");

        let err = writer_for(output).write(&VariableMap::new()).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
