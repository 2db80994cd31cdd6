use crate::cli::CliArgs;
use crate::demo::DemoReport;
use crate::error::{CalculatorError, Result};

pub mod json;
pub mod terminal;

pub use json::JsonExporter;
pub use terminal::TerminalReporter;

/// Output manager that coordinates terminal and JSON output
pub struct OutputManager {
    terminal_reporter: TerminalReporter,
    json_exporter: JsonExporter,
}

impl OutputManager {
    /// Create a new output manager with default settings
    pub fn new() -> Self {
        Self {
            terminal_reporter: TerminalReporter::new(),
            json_exporter: JsonExporter::new(),
        }
    }

    /// Create an output manager configured from CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let terminal_reporter = TerminalReporter::new()
            .show_summary(!args.json_only)
            .color_enabled(args.should_use_colors());

        // Reports on disk are meant to be read; always pretty print
        let json_exporter = JsonExporter::new().pretty_print(true);

        Self {
            terminal_reporter,
            json_exporter,
        }
    }

    /// Generate output according to CLI arguments
    pub fn generate_output(&self, report: &DemoReport, args: &CliArgs) -> Result<()> {
        let show_terminal = args.should_output_terminal();
        let show_json = args.should_output_json();

        if !show_terminal && !show_json {
            return Err(CalculatorError::validation_error(
                "No output format specified",
            ));
        }

        if show_terminal {
            self.terminal_reporter.display_report(report)?;
        }

        if show_json {
            self.json_exporter
                .export_to_file(report, args.json_output_path())?;

            if args.verbose {
                println!(
                    "JSON report saved to: {}",
                    args.json_output_path().display()
                );
            }
        }

        Ok(())
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}
