//! Evaluation strategy selection.

use std::str::FromStr;

use crate::EngineError;

/// How a chain is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Each stage consumes its whole input and materializes its output.
    Eager,
    /// Elements are pulled one at a time on demand from the terminal.
    #[default]
    Lazy,
}

impl Strategy {
    /// Both strategies, eager first.
    pub const ALL: [Strategy; 2] = [Strategy::Eager, Strategy::Lazy];

    /// Returns the lowercase strategy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Eager => "eager",
            Strategy::Lazy => "lazy",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(Strategy::Eager),
            "lazy" => Ok(Strategy::Lazy),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}
