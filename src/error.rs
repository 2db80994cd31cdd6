use std::fmt;

/// Comprehensive error type for the calculator application
#[derive(Debug)]
pub enum CalculatorError {
    /// Division with a zero denominator
    DivisionByZero,

    /// An operand could not be parsed as a number
    InvalidNumber(String),

    /// A command named an operation the calculator does not provide
    UnknownOperation(String),

    /// A command line did not match the expected `<operation> <a> <b>` shape
    MalformedCommand(String),

    /// I/O operations failed (reading commands, writing reports, etc.)
    Io(std::io::Error),

    /// JSON serialization errors from report export
    Json(serde_json::Error),

    /// General validation errors
    Validation(String),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // A scenario asserts on this literal text; keep it verbatim
            CalculatorError::DivisionByZero => write!(f, "Cannot divide by zero"),
            CalculatorError::InvalidNumber(raw) => write!(f, "Invalid number: {raw}"),
            CalculatorError::UnknownOperation(op) => write!(f, "Unknown operation: {op}"),
            CalculatorError::MalformedCommand(msg) => write!(f, "Invalid command: {msg}"),
            CalculatorError::Io(err) => write!(f, "IO error: {err}"),
            CalculatorError::Json(err) => write!(f, "JSON error: {err}"),
            CalculatorError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for CalculatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculatorError::Io(err) => Some(err),
            CalculatorError::Json(err) => Some(err),
            _ => None,
        }
    }
}

// Implement From trait for automatic error conversions
impl From<std::io::Error> for CalculatorError {
    fn from(err: std::io::Error) -> Self {
        CalculatorError::Io(err)
    }
}

impl From<serde_json::Error> for CalculatorError {
    fn from(err: serde_json::Error) -> Self {
        CalculatorError::Json(err)
    }
}

/// Convenience Result type alias for the calculator
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Helper functions for creating common errors
impl CalculatorError {
    /// Create an invalid number error from the raw operand text
    pub fn invalid_number<S: Into<String>>(raw: S) -> Self {
        CalculatorError::InvalidNumber(raw.into())
    }

    /// Create an unknown operation error
    pub fn unknown_operation<S: Into<String>>(op: S) -> Self {
        CalculatorError::UnknownOperation(op.into())
    }

    /// Create a malformed command error
    pub fn malformed_command<S: Into<String>>(msg: S) -> Self {
        CalculatorError::MalformedCommand(msg.into())
    }

    /// Create a validation error
    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        CalculatorError::Validation(msg.into())
    }

    /// Whether this is the division-by-zero domain error
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, CalculatorError::DivisionByZero)
    }
}
