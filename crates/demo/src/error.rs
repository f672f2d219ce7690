//! Demo error types.

use engine::EngineError;
use queries::QueryError;
use thiserror::Error;

/// Errors that can stop the demo report.
#[derive(Debug, Error)]
pub enum DemoError {
    /// `SHOP_STRATEGY` named an unknown strategy.
    #[error("Invalid SHOP_STRATEGY: {0}")]
    Strategy(#[from] EngineError),

    /// `LOG_FORMAT` was neither `pretty` nor `json`.
    #[error("Invalid LOG_FORMAT: {value} (expected pretty or json)")]
    LogFormat { value: String },

    /// `SHOP_CITY` was blank.
    #[error("Invalid SHOP_CITY: {0}")]
    City(#[from] domain::DomainError),

    /// A query failed.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// The report could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the demo.
pub type Result<T> = std::result::Result<T, DemoError>;
