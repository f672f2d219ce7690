//! Business queries over a [`Shop`](domain::Shop).
//!
//! This crate is a client of the engine: every query is a chain of pipeline
//! operators evaluated with the [`Strategy`](engine::Strategy) the
//! [`ShopQueries`] handle was configured with. Results are identical under
//! either strategy.
//! - customer queries: cities, per-city lookups, grouping, association
//! - product queries: ordered products, most expensive, popularity
//! - spending queries: money spent, delivery backlog
//!
//! [`sample::sample_shop`] builds a small shop used by tests and the demo.

pub mod customers;
pub mod error;
pub mod products;
pub mod sample;
pub mod spending;

pub use error::{QueryError, Result};

use domain::Shop;
use engine::{Chain, Strategy};

/// Query handle over one shop.
#[derive(Debug, Clone, Copy)]
pub struct ShopQueries<'s> {
    shop: &'s Shop,
    strategy: Strategy,
}

impl<'s> ShopQueries<'s> {
    /// Creates a handle that evaluates lazily.
    pub fn new(shop: &'s Shop) -> Self {
        Self {
            shop,
            strategy: Strategy::Lazy,
        }
    }

    /// Switches the evaluation strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the evaluation strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// An empty chain over elements of type `T`.
pub(crate) fn chain_of<'a, T: 'a>() -> Chain<'a, T, T> {
    Chain::new()
}
