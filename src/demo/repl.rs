use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::calculator::Calculator;
use crate::demo::format_number;
use crate::error::{CalculatorError, Result};

/// Prompt printed before each interactive command
pub const PROMPT: &str = "calculator> ";

/// The arithmetic operations an interactive command can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "power" => Ok(Operation::Power),
            other => Err(CalculatorError::unknown_operation(other)),
        }
    }
}

impl Operation {
    /// Dispatch the operation against a calculator
    ///
    /// Only division can fail; the other operations are total.
    pub fn apply(self, calculator: &Calculator, a: f64, b: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(calculator.add(a, b)),
            Operation::Subtract => Ok(calculator.subtract(a, b)),
            Operation::Multiply => Ok(calculator.multiply(a, b)),
            Operation::Divide => calculator.divide(a, b),
            Operation::Power => Ok(calculator.power(a, b)),
        }
    }
}

/// A parsed interactive command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank line; ignored
    Empty,
    /// Exit the session
    Quit,
    /// Reset the stored result to 0
    Clear,
    /// Apply an arithmetic operation to two operands
    Apply { op: Operation, a: f64, b: f64 },
}

/// Parse one line of interactive input into a [`Command`]
///
/// Input is case-insensitive. Lines with more than three tokens are
/// accepted; the extra tokens are ignored. All failures are boundary
/// errors ([`CalculatorError::MalformedCommand`],
/// [`CalculatorError::UnknownOperation`],
/// [`CalculatorError::InvalidNumber`]), never domain errors.
pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim().to_lowercase();
    if trimmed.is_empty() {
        return Ok(Command::Empty);
    }
    if trimmed == "quit" {
        return Ok(Command::Quit);
    }
    if trimmed == "clear" {
        return Ok(Command::Clear);
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(CalculatorError::malformed_command(
            "use: <operation> <a> <b>",
        ));
    }

    let op = parts[0].parse()?;
    let a = parse_operand(parts[1])?;
    let b = parse_operand(parts[2])?;

    Ok(Command::Apply { op, a, b })
}

fn parse_operand(raw: &str) -> Result<f64> {
    raw.parse()
        .map_err(|_| CalculatorError::invalid_number(raw))
}

/// Interactive calculator session
///
/// Reads commands from any [`BufRead`] source and writes responses to any
/// [`Write`] sink, so sessions are testable with in-memory buffers. Every
/// error is printed and the loop continues; only `quit` or end of input
/// ends the session.
pub struct Repl {
    calculator: Calculator,
}

impl Repl {
    /// Create a session with a fresh calculator
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Run the session until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        self.write_banner(output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next() else { break };
            let line = line?;
            match parse_command(&line) {
                Ok(Command::Empty) => continue,
                Ok(Command::Quit) => {
                    writeln!(output, "Goodbye!")?;
                    break;
                }
                Ok(Command::Clear) => {
                    self.calculator.clear();
                    writeln!(
                        output,
                        "Calculator cleared. Result: {}",
                        format_number(self.calculator.get_result())
                    )?;
                }
                Ok(Command::Apply { op, a, b }) => match op.apply(&self.calculator, a, b) {
                    Ok(result) => {
                        self.calculator.set_result(result);
                        writeln!(output, "Result: {}", format_number(result))?;
                    }
                    Err(err) => writeln!(output, "Error: {err}")?,
                },
                Err(err) => writeln!(output, "Error: {err}")?,
            }
        }

        Ok(())
    }

    /// The stored result after the commands processed so far
    pub fn current_result(&self) -> f64 {
        self.calculator.get_result()
    }

    fn write_banner<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Interactive calculator")?;
        writeln!(output, "Commands:")?;
        writeln!(output, "  add <a> <b>        Add two numbers")?;
        writeln!(output, "  subtract <a> <b>   Subtract b from a")?;
        writeln!(output, "  multiply <a> <b>   Multiply two numbers")?;
        writeln!(output, "  divide <a> <b>     Divide a by b")?;
        writeln!(output, "  power <base> <exp> Raise base to the power of exp")?;
        writeln!(output, "  clear              Reset the stored result to 0")?;
        writeln!(output, "  quit               Exit")?;
        writeln!(output)?;
        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
