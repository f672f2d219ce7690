//! City identifier.

use serde::{Deserialize, Serialize};

use crate::{DomainError, Result};

/// A city a customer lives in, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Creates a city from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a city, rejecting blank names.
    pub fn try_new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::CityNameRequired);
        }
        Ok(Self(name))
    }

    /// Returns the city name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for City {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for City {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for City {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
