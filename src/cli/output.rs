//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, GenerateError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::GenerateError(GenerateError::BufferExhausted { capacity }) => format!(
            "{}. The digit map does not fit in {} bytes; raise generator.buffer_size or narrow the context.",
            e, capacity
        ),
        _ => e.to_string(),
    }
}

/// Process exit status for a failed command.
pub fn exit_code(e: &ApiError) -> i32 {
    match e {
        ApiError::ConfigError(_) | ApiError::DialplanError(_) => 2,
        ApiError::GenerateError(_) => 1,
    }
}
