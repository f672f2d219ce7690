//! Folding and extremum operators.

use std::cmp::Ordering;
use std::ops::Add;

use crate::{PipelineError, Result};

/// Accumulates strictly left to right, starting from `initial`.
pub fn fold<I, A, F>(items: I, initial: A, combine: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    items.into_iter().fold(initial, combine)
}

/// Folds using the first element as the seed.
///
/// Fails with [`PipelineError::EmptyInput`] on an empty sequence.
pub fn reduce<I, F>(items: I, combine: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut items = items.into_iter();
    let seed = items.next().ok_or(PipelineError::EmptyInput {
        operation: "reduce",
    })?;
    Ok(items.fold(seed, combine))
}

/// Sums projections left to right, starting from `N::default()`.
///
/// The summation order is fixed so floating point results are reproducible.
pub fn sum_of<I, N, F>(items: I, mut project: F) -> N
where
    I: IntoIterator,
    N: Default + Add<Output = N>,
    F: FnMut(&I::Item) -> N,
{
    fold(items, N::default(), |acc, item| acc + project(&item))
}

/// Counts the elements satisfying `pred`.
pub fn count<I, P>(items: I, mut pred: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    fold(items, 0, |n, item| if pred(&item) { n + 1 } else { n })
}

/// Returns the element with the greatest key, or `None` for empty input.
/// Ties go to the first such element.
pub fn max_by_or_none<I, K, F, C>(items: I, key: F, mut compare: C) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    extremum(items, key, |candidate, best| {
        compare(candidate, best) == Ordering::Greater
    })
}

/// Returns the element with the smallest key, or `None` for empty input.
/// Ties go to the first such element.
pub fn min_by_or_none<I, K, F, C>(items: I, key: F, mut compare: C) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    extremum(items, key, |candidate, best| {
        compare(candidate, best) == Ordering::Less
    })
}

// Replaces the running best only on a strict improvement, which keeps the
// first of equal extremes.
fn extremum<I, K, F, B>(items: I, mut key: F, mut beats: B) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    B: FnMut(&K, &K) -> bool,
{
    let mut best: Option<(K, I::Item)> = None;
    for item in items {
        let k = key(&item);
        best = match best {
            Some((best_key, best_item)) if !beats(&k, &best_key) => Some((best_key, best_item)),
            _ => Some((k, item)),
        };
    }
    best.map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Priced {
        name: &'static str,
        price: f64,
    }

    fn priced(name: &'static str, price: f64) -> Priced {
        Priced { name, price }
    }

    #[test]
    fn test_fold_is_left_to_right() {
        let joined = fold(["a", "b", "c"], String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_fold_empty_returns_initial() {
        assert_eq!(fold(Vec::<i32>::new(), 0, |acc, x| acc * x + 7), 0);
    }

    #[test]
    fn test_reduce_uses_first_as_seed() {
        assert_eq!(reduce([10, 3, 2], |a, b| a - b), Ok(5));
        assert_eq!(reduce([42], |a, b| a + b), Ok(42));
    }

    #[test]
    fn test_reduce_empty_fails() {
        assert_eq!(
            reduce(Vec::<i32>::new(), |a, b| a + b),
            Err(PipelineError::EmptyInput {
                operation: "reduce"
            })
        );
    }

    #[test]
    fn test_sum_of_matches_sequential_float_addition() {
        let values = [0.1, 0.2, 0.3, 1e16, -1e16];
        let expected: f64 = (((0.0 + 0.1) + 0.2) + 0.3 + 1e16) + -1e16;
        let sum: f64 = sum_of(values, |v| *v);
        assert_eq!(sum.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_sum_of_integers() {
        let total: u32 = sum_of(["ab", "cde"], |s| s.len() as u32);
        assert_eq!(total, 5);
    }

    #[test]
    fn test_count_with_predicate() {
        assert_eq!(count([1, 2, 3, 4, 5], |x| *x > 2), 3);
        assert_eq!(count(Vec::<i32>::new(), |_| true), 0);
    }

    #[test]
    fn test_max_by_first_wins_on_tie() {
        let items = [priced("A", 10.0), priced("B", 10.0)];
        let max = max_by_or_none(items, |p| p.price, f64::total_cmp);
        assert_eq!(max.map(|p| p.name), Some("A"));
    }

    #[test]
    fn test_min_by_first_wins_on_tie() {
        let items = [priced("A", 3.0), priced("B", 1.0), priced("C", 1.0)];
        let min = min_by_or_none(items, |p| p.price, f64::total_cmp);
        assert_eq!(min.map(|p| p.name), Some("B"));
    }

    #[test]
    fn test_extremes_of_empty_input_are_none() {
        let empty: Vec<Priced> = Vec::new();
        assert!(max_by_or_none(empty.clone(), |p| p.price, f64::total_cmp).is_none());
        assert!(min_by_or_none(empty, |p| p.price, f64::total_cmp).is_none());
    }

    #[test]
    fn test_max_by_custom_comparator() {
        let words = ["kiwi", "banana", "fig"];
        let shortest_as_max = max_by_or_none(words, |w| w.len(), |a, b| b.cmp(a));
        assert_eq!(shortest_as_max, Some("fig"));
    }
}
