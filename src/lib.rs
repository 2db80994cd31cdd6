//! BDD Calculator Library
//!
//! An educational demonstration of Behavior-Driven Development: a small
//! calculator (add, subtract, multiply, divide, power, plus a one-slot
//! stored-result register) exercised by Gherkin feature files under
//! `features/` and the cucumber step definitions in `tests/cucumber.rs`.
//!
//! # Quick Start
//!
//! ```
//! use bdd_calculator::Calculator;
//!
//! let mut calc = Calculator::new();
//! let sum = calc.add(50.0, 70.0);
//! calc.set_result(sum);
//! assert_eq!(calc.get_result(), 120.0);
//! assert_eq!(
//!     calc.divide(10.0, 0.0).unwrap_err().to_string(),
//!     "Cannot divide by zero"
//! );
//! ```
//!
//! # Library Components
//!
//! - **Calculator**: The arithmetic core with its result register
//! - **Demo**: Scripted demo scenarios and the interactive session
//! - **Output**: Terminal table and JSON report formatting
//! - **CLI**: Command-line interface definitions
//! - **Error**: Error handling with the verbatim division-by-zero message

use std::io;

pub mod calculator;
pub mod cli;
pub mod demo;
pub mod error;
pub mod output;

// Re-export main types for convenience
pub use calculator::Calculator;
pub use cli::{CliArgs, ColorMode, OutputFormat};
pub use demo::{
    format_number, parse_command, run_scripted_demo, Command, DemoReport, DemoSummary, Operation,
    Repl, ScenarioResult,
};
pub use error::{CalculatorError, Result};
pub use output::{JsonExporter, OutputManager, TerminalReporter};

/// Main entry point for the demo binary
///
/// Validates the CLI arguments, then either starts an interactive session
/// on stdin/stdout or runs the scripted demo scenarios and renders the
/// resulting report as a terminal table and/or JSON file.
///
/// # Examples
///
/// ```no_run
/// use bdd_calculator::{run, CliArgs};
///
/// let args = CliArgs::default();
/// if let Err(e) = run(args) {
///     eprintln!("Demo failed: {e}");
/// }
/// ```
pub fn run(args: CliArgs) -> Result<()> {
    args.validate()?;

    if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut repl = Repl::new();
        return repl.run(stdin.lock(), &mut stdout);
    }

    if args.verbose {
        println!("Running scripted demo scenarios...");
        println!("Output format: {}", args.output);
        println!();
    }

    let report = demo::run_scripted_demo();

    let output_manager = OutputManager::from_cli_args(&args);
    output_manager.generate_output(&report, &args)?;

    if args.verbose {
        println!();
        println!(
            "Demo completed: {}/{} scenarios passed",
            report.summary.passed, report.summary.total
        );
    }

    Ok(())
}
