use std::fs;
use std::io::Write;
use std::path::Path;

use crate::demo::DemoReport;
use crate::error::Result;

/// JSON exporter for demo reports
#[derive(Clone)]
pub struct JsonExporter {
    pretty_print: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter with default settings
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    /// Enable or disable pretty printing (formatted JSON)
    pub fn pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Format a demo report as a JSON string
    pub fn format_json(&self, report: &DemoReport) -> Result<String> {
        let json = if self.pretty_print {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };

        Ok(json)
    }

    /// Export a demo report to a JSON file
    pub fn export_to_file<P: AsRef<Path>>(&self, report: &DemoReport, file_path: P) -> Result<()> {
        let json_content = self.format_json(report)?;

        let mut file = fs::File::create(&file_path)?;
        file.write_all(json_content.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}
