use prettytable::{format, row, Cell, Row, Table};

use crate::demo::{DemoReport, DemoSummary, ScenarioResult};
use crate::error::Result;

/// Terminal reporter for displaying demo results as a formatted table
pub struct TerminalReporter {
    show_summary: bool,
    color_enabled: bool,
}

impl TerminalReporter {
    /// Create a new terminal reporter with default settings
    pub fn new() -> Self {
        Self {
            show_summary: true,
            color_enabled: true,
        }
    }

    /// Enable or disable summary display
    pub fn show_summary(mut self, show: bool) -> Self {
        self.show_summary = show;
        self
    }

    /// Enable or disable colored output
    pub fn color_enabled(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Display the complete demo report
    pub fn display_report(&self, report: &DemoReport) -> Result<()> {
        println!("Calculator Demo Report");
        println!("======================");
        println!();

        self.format_report_table(&report.scenarios).printstd();

        if self.show_summary {
            println!();
            self.display_summary(&report.summary);
        }

        Ok(())
    }

    /// Format the scenario results as a table
    pub fn format_report_table(&self, scenarios: &[ScenarioResult]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_DEFAULT);

        table.add_row(row![
            bFg->"Scenario",
            bFg->"Expression",
            bFg->"Expected",
            bFg->"Actual",
            bFg->"Status"
        ]);

        for scenario in scenarios {
            table.add_row(Row::new(vec![
                Cell::new(&scenario.name),
                Cell::new(&scenario.expression),
                Cell::new(&scenario.expected).style_spec("r"),
                Cell::new(&scenario.actual).style_spec("r"),
                self.format_status_cell(scenario.passed),
            ]));
        }

        table
    }

    /// Display the pass/fail summary
    pub fn display_summary(&self, summary: &DemoSummary) {
        println!("Demo Summary:");
        println!("├─ Scenarios run: {}", summary.total);
        println!("├─ Passed: {}", summary.passed);
        println!("└─ Failed: {}", summary.failed);
    }

    fn format_status_cell(&self, passed: bool) -> Cell {
        let (text, spec) = if passed { ("PASS", "Fg") } else { ("FAIL", "Fr") };
        if self.color_enabled {
            Cell::new(text).style_spec(spec)
        } else {
            Cell::new(text)
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
