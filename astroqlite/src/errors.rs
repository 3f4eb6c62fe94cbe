//! Host-level error type.
//!
//! These errors never come from evaluating a row. A non-numeric argument is
//! a NULL result, not an [`AdqlError`]. What remains is the plumbing around
//! a call: looking a function up, registering it, and loading configuration.

use astroqlite_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdqlError {
    #[error("No such function: {name}({arity} args)")]
    UnknownFunction { name: String, arity: usize },

    #[error("Wrong number of arguments to {name}: expected {expected}, found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed to register {name}: {message}")]
    Registration { name: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Numeric kernel failed: {source}")]
    Core {
        #[from]
        source: CoreError,
    },
}

/// Convenience alias for `Result<T, AdqlError>`.
pub type AdqlResult<T> = Result<T, AdqlError>;

impl AdqlError {
    pub fn unknown_function(name: impl Into<String>, arity: usize) -> Self {
        Self::UnknownFunction {
            name: name.into(),
            arity,
        }
    }

    pub fn arity_mismatch(name: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ArityMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    pub fn registration(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Registration {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
