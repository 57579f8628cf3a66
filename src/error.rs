//! Error types for digit map generation and the dialplan host.

use thiserror::Error;

/// Errors raised while walking a dialplan and emitting a digit map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("No such context: {0}")]
    ContextNotFound(String),

    #[error("Maximum include depth exceeded at {context} (max {max_depth})")]
    MaxDepthExceeded { context: String, max_depth: usize },

    #[error("Avoiding circular include of {target} within {context}")]
    CircularInclude { target: String, context: String },

    #[error("No space left in digit map buffer ({capacity} bytes)")]
    BufferExhausted { capacity: usize },

    #[error("Empty include context in {0}")]
    MalformedInclude(String),
}

/// Dialplan loading errors
#[derive(Debug, Error)]
pub enum DialplanError {
    #[error("Dialplan I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Errors surfaced through the command-line front end
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Dialplan error: {0}")]
    DialplanError(#[from] DialplanError),

    #[error("Generation failed: {0}")]
    GenerateError(#[from] GenerateError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Non-fatal problems found while translating a pattern.
///
/// Translation always proceeds with a literal copy; these are only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternWarning {
    #[error("Dialplan is invalid: nested '[' at offset {offset}")]
    NestedSet { offset: usize },

    #[error("Dialplan is invalid: unmatched ']' at offset {offset}")]
    UnmatchedClose { offset: usize },

    #[error("Dialplan is invalid: periods should not appear inside [] (offset {offset})")]
    PeriodInSet { offset: usize },

    #[error("Generated digit map will be invalid: cannot literally translate mixed set ending at offset {offset}")]
    MixedSet { offset: usize },

    #[error("Dialplan is invalid: '[' is never closed")]
    UnterminatedSet,
}
