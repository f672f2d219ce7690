//! Domain error types.

use thiserror::Error;

/// Errors raised by the checked entity constructors.
///
/// The plain constructors never fail; these only come from the `try_new`
/// variants that validate raw input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Product price is negative, NaN or infinite.
    #[error("Invalid price for {name}: {price} (must be a finite, non-negative number)")]
    InvalidPrice { name: String, price: f64 },

    /// City name is empty or only whitespace.
    #[error("City name is required")]
    CityNameRequired,
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
