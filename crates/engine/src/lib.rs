//! Evaluation engine for pipeline chains.
//!
//! A [`Chain`] describes a sequence of per-element stages (filter, map,
//! flat-map, take) built once and evaluated any number of times with
//! either [`Strategy`]:
//! - [`Strategy::Eager`] materializes every stage in full before the next
//! - [`Strategy::Lazy`] pulls one element at a time through the stages and
//!   stops as soon as the [`Terminal`] has its answer
//!
//! Both strategies produce identical results for finite input. Every
//! evaluation also reports a [`Traversal`] so the amount of work done is
//! observable.

pub mod chain;
pub mod error;
pub mod pull;
pub mod strategy;
pub mod terminal;
pub mod traversal;

pub use chain::{Chain, StageKind};
pub use error::EngineError;
pub use strategy::Strategy;
pub use terminal::Terminal;
pub use traversal::{Evaluation, Traversal};
