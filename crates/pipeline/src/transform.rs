//! Element-wise transforms.

use std::cmp::Ordering;

/// Keeps the elements for which `pred` holds, in their original order.
pub fn filter<I, P>(items: I, mut pred: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut kept = Vec::new();
    for item in items {
        if pred(&item) {
            kept.push(item);
        }
    }
    kept
}

/// Transforms every element; the output has the input's length and order.
pub fn map<I, U, F>(items: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    items.into_iter().map(f).collect()
}

/// Concatenates `f(item)` for each item, in order. Duplicates are kept.
pub fn flat_map<I, J, F>(items: I, mut f: F) -> Vec<J::Item>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item) -> J,
{
    let mut flattened = Vec::new();
    for item in items {
        flattened.extend(f(item));
    }
    flattened
}

/// Sorts by `compare`, ascending. Stable: equal elements keep input order.
pub fn sorted_by<I, C>(items: I, compare: C) -> Vec<I::Item>
where
    I: IntoIterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut sorted: Vec<_> = items.into_iter().collect();
    sorted.sort_by(compare);
    sorted
}

/// Sorts by `compare`, descending. Stable: equal elements keep input order.
pub fn sorted_by_descending<I, C>(items: I, mut compare: C) -> Vec<I::Item>
where
    I: IntoIterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    sorted_by(items, |a, b| compare(b, a))
}
