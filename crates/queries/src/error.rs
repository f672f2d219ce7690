//! Query error types.

use pipeline::PipelineError;
use thiserror::Error;

/// Errors that can occur while answering a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A pipeline operator rejected its input.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
