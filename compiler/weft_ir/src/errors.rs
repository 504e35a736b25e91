//! Evaluation errors raised by compiled expression units.
//!
//! Factory functions are the public API for the messages this workspace
//! produces itself; expression units are free to build their own with
//! [`EvalError::new`].

use crate::Value;

/// Result of evaluating a compiled expression unit.
pub type EvalResult = Result<Value, EvalError>;

/// An error raised while evaluating a binding expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    message: String,
}

impl EvalError {
    /// Create an error with a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        EvalError {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A name resolved neither in the call's locals nor in the captured globals.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(format!("undefined variable: {name}"))
}

/// An update function was invoked without the value being written back.
#[cold]
pub fn missing_argument(function: &str) -> EvalError {
    EvalError::new(format!("'{function}' expects a written-back value"))
}

/// A value was written back through a binding that has no update function.
#[cold]
pub fn read_only_binding(name: &str) -> EvalError {
    EvalError::new(format!("binding '{name}' is read-only"))
}
