//! Engine error types.

use thiserror::Error;

/// Errors raised by the evaluation engine's configuration surface.
///
/// Evaluation itself never fails; operator failures such as an empty
/// `reduce` come back inside the terminal's output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A strategy name that is neither `eager` nor `lazy`.
    #[error("Unknown evaluation strategy: {0} (expected \"eager\" or \"lazy\")")]
    UnknownStrategy(String),
}
