//! Error types for editing, evaluation and the keypad front end.

use crate::field::Field;
use crate::operation::Operation;
use thiserror::Error;

/// Errors raised by the field editor.
///
/// Editing itself never fails on malformed numbers; only a reference to a
/// field that does not exist is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("unknown field {0:?} (expected a, b or base)")]
    InvalidField(String),
}

/// Errors raised by a single evaluation attempt.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    /// A field string could not be read as a number.
    #[error("{field} is not a number: {raw:?}")]
    NumericParse { field: Field, raw: String },

    /// The operation needs an auxiliary value that was not supplied.
    #[error("{operation} needs a value for {field}")]
    MissingOperand { operation: Operation, field: Field },

    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("the remainder of a division by zero is undefined")]
    ModuloByZero,

    #[error("the logarithm argument must be positive")]
    LogDomain,

    #[error("the logarithm base must be positive and not equal to 1")]
    LogBase,

    /// The dispatch was defined but produced NaN or an infinity.
    #[error("{operation} has no finite result ({value})")]
    InvalidOperationResult { operation: Operation, value: f64 },
}

/// Coarse grouping of [`EvalError`] used when presenting a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The operands themselves are unusable.
    Input,
    /// Division or remainder by zero.
    Arithmetic,
    /// The computation has no finite value.
    Undefined,
}

impl ErrorCategory {
    pub fn title(self) -> &'static str {
        match self {
            ErrorCategory::Input => "Input error",
            ErrorCategory::Arithmetic => "Arithmetic error",
            ErrorCategory::Undefined => "Undefined",
        }
    }
}

impl EvalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalError::NumericParse { .. }
            | EvalError::MissingOperand { .. }
            | EvalError::LogDomain
            | EvalError::LogBase => ErrorCategory::Input,
            EvalError::DivisionByZero | EvalError::ModuloByZero => ErrorCategory::Arithmetic,
            EvalError::InvalidOperationResult { .. } => ErrorCategory::Undefined,
        }
    }
}

/// Errors raised while interpreting a line typed into the terminal keypad.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown key {0:?}")]
    UnknownKey(String),

    #[error("unknown command :{0}")]
    UnknownCommand(String),

    #[error("unknown operation {0:?}")]
    UnknownOperation(String),

    #[error(":{0} needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Edit(#[from] EditError),
}
