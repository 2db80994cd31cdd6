use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum, Default)]
pub enum ColorMode {
    /// Auto-detect based on terminal (TTY)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors (for piping)
    Never,
}

/// CLI arguments for the calculator demo application
#[derive(Parser)]
#[command(name = "bdd-calculator")]
#[command(about = "A small calculator driven by BDD-style scenarios")]
#[command(version)]
#[command(
    long_about = "An educational BDD demonstration. By default the binary walks through the scripted demo scenarios (the same ones the Gherkin feature files assert on) and reports each outcome as a table and/or JSON. With --interactive it reads <operation> <a> <b> commands from stdin instead."
)]
pub struct CliArgs {
    /// Start an interactive session instead of the scripted demo
    #[arg(
        short,
        long,
        help = "Read <operation> <a> <b>, clear, or quit commands from stdin"
    )]
    pub interactive: bool,

    /// Output format selection
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, help = "Choose output format for the demo report")]
    pub output: OutputFormat,

    /// Only write the JSON report, skip terminal output
    #[arg(long, help = "Generate only the JSON report file, no terminal display")]
    pub json_only: bool,

    /// Output JSON to custom file path
    #[arg(long, value_name = "FILE", help = "Custom path for the JSON report file")]
    pub output_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, help = "Show detailed progress information")]
    pub verbose: bool,

    /// Color output mode
    #[arg(
        long,
        value_enum,
        default_value_t = ColorMode::Auto,
        help = "Control color output (auto, always, never)"
    )]
    pub color: ColorMode,
}

/// Output format options for the demo report
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table only
    Table,
    /// JSON report file only
    Json,
    /// Both terminal table and JSON report
    Both,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}

impl CliArgs {
    /// Validate CLI arguments and return meaningful errors
    pub fn validate(&self) -> Result<(), crate::error::CalculatorError> {
        // Interactive mode produces no report, so report flags conflict with it
        if self.interactive && self.should_output_json() {
            return Err(crate::error::CalculatorError::validation_error(
                "JSON report output cannot be combined with --interactive",
            ));
        }

        if self.interactive && self.output_file.is_some() {
            return Err(crate::error::CalculatorError::validation_error(
                "--output-file cannot be combined with --interactive",
            ));
        }

        // Validate output file path if provided
        if let Some(ref output_path) = self.output_file {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(crate::error::CalculatorError::validation_error(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Get the output file path (default to demo-report.json)
    pub fn json_output_path(&self) -> PathBuf {
        self.output_file
            .as_ref()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("demo-report.json"))
    }

    /// Check if JSON output should be generated
    pub fn should_output_json(&self) -> bool {
        matches!(self.output, OutputFormat::Json | OutputFormat::Both) || self.json_only
    }

    /// Check if terminal output should be displayed
    pub fn should_output_terminal(&self) -> bool {
        !self.json_only && matches!(self.output, OutputFormat::Table | OutputFormat::Both)
    }

    /// Determine if colors should be used based on ColorMode and TTY detection
    pub fn should_use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        }
    }
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            interactive: false,
            output: OutputFormat::Table,
            json_only: false,
            output_file: None,
            verbose: false,
            color: ColorMode::Auto,
        }
    }
}
