//! Pipeline error types.

use thiserror::Error;

/// Errors raised by pipeline operators.
///
/// Every variant is a precondition violation; operators never retry or
/// return partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The operator needs at least one element and got none.
    #[error("Empty input: {operation} requires at least one element")]
    EmptyInput { operation: &'static str },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
