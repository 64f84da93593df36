use crate::expr::Op;
use numval::NumvalError;
use std::path::PathBuf;

/// Error type for the evaluator.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Error raised by the value types themselves.
    #[error(transparent)]
    Numval(#[from] NumvalError),
    /// No operand was given.
    #[error("Empty expression")]
    EmptyExpression,
    /// A token in operator position is not a known operator.
    #[error("Unknown operator '{0}', expected one of +=, -=, *=, /=")]
    UnknownOperator(String),
    /// The operator exists but is not defined for this kind of value.
    #[error("Operator '{op}' is not supported on {kind} values")]
    UnsupportedOperator {
        /// The rejected operator.
        op: Op,
        /// Kind of value the expression works on.
        kind: &'static str,
    },
    /// The expression ends with an operator.
    #[error("Operator '{0}' is missing its right-hand operand")]
    MissingOperand(Op),
    /// An operand could not be parsed.
    #[error("Invalid operand '{operand}': {reason}")]
    InvalidOperand {
        /// The offending token.
        operand: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    ConfigIo {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`crate::config::UserConfig`].
    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// The logger could not be installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
