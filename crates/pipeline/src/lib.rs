//! Pipeline operators over ordered sequences.
//!
//! Every operator is a pure function taking anything that implements
//! [`IntoIterator`] and returning a freshly built value. Inputs are never
//! mutated and relative order is preserved unless an operator says
//! otherwise:
//! - [`transform`]: filter, map, flat-map and stable sorting
//! - [`group`]: group-by, partition, associate and set operations
//! - [`aggregate`]: fold, reduce, sum, count and extremum search
//! - [`search`]: short-circuiting any/all/none/find
//!
//! Keyed results use [`OrderedMap`] and [`OrderedSet`], which remember the
//! order in which keys were first seen.

pub mod aggregate;
pub mod error;
pub mod group;
pub mod ordered;
pub mod search;
pub mod transform;

pub use aggregate::{count, fold, max_by_or_none, min_by_or_none, reduce, sum_of};
pub use error::{PipelineError, Result};
pub use group::{
    associate, associate_by, associate_with, group_by, intersect, intersect_all, partition,
    to_set,
};
pub use ordered::{OrderedMap, OrderedSet};
pub use search::{all, any, find, none};
pub use transform::{filter, flat_map, map, sorted_by, sorted_by_descending};
