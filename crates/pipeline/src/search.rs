//! Short-circuiting queries.
//!
//! Each operator stops pulling from its input as soon as the answer is
//! known, so passing a lazy iterator bounds the work to the prefix that
//! decides the result.

/// True if any element satisfies `pred`. Stops at the first match.
pub fn any<I, P>(items: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in items {
        if pred(&item) {
            return true;
        }
    }
    false
}

/// True if every element satisfies `pred`. Stops at the first failure.
/// Vacuously true for empty input.
pub fn all<I, P>(items: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    !any(items, |item| !pred(item))
}

/// True if no element satisfies `pred`. Stops at the first match.
pub fn none<I, P>(items: I, pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    !any(items, pred)
}

/// Returns the first element satisfying `pred`.
pub fn find<I, P>(items: I, mut pred: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in items {
        if pred(&item) {
            return Some(item);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counted<'a>(values: &'a [i32], pulls: &'a Cell<usize>) -> impl Iterator<Item = i32> + 'a {
        values.iter().map(move |v| {
            pulls.set(pulls.get() + 1);
            *v
        })
    }

    #[test]
    fn test_any_stops_at_first_match() {
        let pulls = Cell::new(0);
        assert!(any(counted(&[1, 8, 3, 9], &pulls), |x| *x > 5));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_all_stops_at_first_failure() {
        let pulls = Cell::new(0);
        assert!(!all(counted(&[2, 4, 5, 6], &pulls), |x| x % 2 == 0));
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_all_of_empty_is_true() {
        assert!(all(Vec::<i32>::new(), |_| false));
        assert!(!any(Vec::<i32>::new(), |_| true));
        assert!(none(Vec::<i32>::new(), |_| true));
    }

    #[test]
    fn test_find_returns_first_match() {
        let pulls = Cell::new(0);
        assert_eq!(find(counted(&[1, 6, 7, 8], &pulls), |x| *x > 5), Some(6));
        assert_eq!(pulls.get(), 2);
        assert_eq!(find([1, 2], |x| *x > 5), None);
    }
}
