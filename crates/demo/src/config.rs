//! Demo configuration loaded from environment variables.

use domain::City;
use engine::Strategy;

use crate::{DemoError, Result};

/// Which strategies the report runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategySelection {
    Only(Strategy),
    Both,
}

impl StrategySelection {
    /// The strategies to run, in report order.
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            StrategySelection::Only(strategy) => vec![*strategy],
            StrategySelection::Both => Strategy::ALL.to_vec(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `SHOP_STRATEGY`: `eager`, `lazy` or `both` (default: `both`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
/// - `SHOP_CITY`: city the per-city queries target (default: `Tokyo`)
#[derive(Debug, Clone)]
pub struct Config {
    pub strategies: StrategySelection,
    pub log_level: String,
    pub log_format: LogFormat,
    pub city: City,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let strategies = match lookup("SHOP_STRATEGY") {
            Some(value) if value.trim().eq_ignore_ascii_case("both") => StrategySelection::Both,
            Some(value) => StrategySelection::Only(value.parse()?),
            None => defaults.strategies,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(DemoError::LogFormat { value }),
            },
            None => defaults.log_format,
        };

        let city = match lookup("SHOP_CITY") {
            Some(value) => City::try_new(value.trim())?,
            None => defaults.city,
        };

        Ok(Self {
            strategies,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
            city,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategies: StrategySelection::Both,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            city: City::new("Tokyo"),
        }
    }
}
