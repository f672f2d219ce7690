//! Domain layer for the shop query system.
//!
//! This crate provides the immutable value entities every query reads:
//! - [`City`] identifying where a customer lives
//! - [`Product`] with a name and a non-negative price
//! - [`Order`] holding an ordered product list and a delivery flag
//! - [`Customer`] and [`Shop`] tying them together
//!
//! All entities compare and hash structurally, so they can be used as
//! map and set keys by the pipeline operators.

pub mod city;
pub mod customer;
pub mod error;
pub mod order;
pub mod product;
pub mod shop;

pub use city::City;
pub use customer::Customer;
pub use error::{DomainError, Result};
pub use order::Order;
pub use product::Product;
pub use shop::Shop;
