use thiserror::Error;

/// Failures of the finance formulas themselves. Always recoverable: the
/// caller decides how to surface them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    #[error("Invalid input: {field} must be a positive finite number, got {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("Division by zero: {context}")]
    DivisionByZero { context: &'static str },

    #[error("Overflow: {context} is too large to represent")]
    Overflow { context: &'static str },
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Ledger format error: {0}")]
    LedgerFormatError(String),

    #[error("Calculation error: {source}")]
    CalculationError {
        #[from]
        source: FinanceError,
    },

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    /// Process exit code used by the command-line entry point.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::ConfigError(_) => 78,
            EngineError::CsvSystemError { .. } | EngineError::LedgerFormatError(_) => 65,
            EngineError::IoError { .. } => 74,
            EngineError::CalculationError { .. } => 2,
            EngineError::AnyhowError(_) => 1,
        }
    }
}
