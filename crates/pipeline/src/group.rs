//! Grouping, association and set operators.
//!
//! The associate family resolves key collisions by keeping the value of the
//! last occurrence. That overwrite is the contract, not an error: callers
//! that need every value should use [`group_by`] instead.

use std::hash::Hash;

use crate::{OrderedMap, OrderedSet, PipelineError, Result};

/// Groups elements by key.
///
/// Groups appear in order of their key's first occurrence and each group
/// keeps its elements in encounter order.
pub fn group_by<I, K, F>(items: I, mut key: F) -> OrderedMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut groups = OrderedMap::new();
    for item in items {
        groups.get_or_insert_with(key(&item), Vec::new).push(item);
    }
    groups
}

/// Splits elements into `(matches, non_matches)`, both in input order.
pub fn partition<I, P>(items: I, mut pred: P) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut matches = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        if pred(&item) {
            matches.push(item);
        } else {
            rest.push(item);
        }
    }
    (matches, rest)
}

/// Indexes elements by key. On collision the later element wins.
pub fn associate_by<I, K, F>(items: I, mut key: F) -> OrderedMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> K,
{
    associate(items, |item| (key(&item), item))
}

/// Maps each distinct element to `value(element)`. If an equal element
/// recurs, the later computed value wins.
pub fn associate_with<I, V, F>(items: I, mut value: F) -> OrderedMap<I::Item, V>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> V,
{
    associate(items, |item| {
        let v = value(&item);
        (item, v)
    })
}

/// Builds a map from `(key, value)` pairs. On collision the later pair wins.
pub fn associate<I, K, V, F>(items: I, f: F) -> OrderedMap<K, V>
where
    I: IntoIterator,
    K: Hash + Eq + Clone,
    F: FnMut(I::Item) -> (K, V),
{
    items.into_iter().map(f).collect()
}

/// Deduplicates by structural equality, keeping first occurrences in order.
pub fn to_set<I>(items: I) -> OrderedSet<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    items.into_iter().collect()
}

/// Elements of `left` also present in `right`, in `left`'s order.
pub fn intersect<T>(left: &OrderedSet<T>, right: &OrderedSet<T>) -> OrderedSet<T>
where
    T: Hash + Eq + Clone,
{
    left.iter().filter(|v| right.contains(v)).cloned().collect()
}

/// Intersects sets pairwise from left to right.
///
/// Fails with [`PipelineError::EmptyInput`] when given no sets, since the
/// intersection of nothing is undefined.
pub fn intersect_all<I, T>(sets: I) -> Result<OrderedSet<T>>
where
    I: IntoIterator<Item = OrderedSet<T>>,
    T: Hash + Eq + Clone,
{
    let mut sets = sets.into_iter();
    let first = sets.next().ok_or(PipelineError::EmptyInput {
        operation: "intersect_all",
    })?;
    Ok(sets.fold(first, |acc, next| intersect(&acc, &next)))
}
