//! Insertion-ordered map and set.

use std::collections::HashMap;
use std::hash::Hash;

/// A hash map that iterates in key first-insertion order.
///
/// Inserting a key that is already present replaces its value but keeps
/// the key at its original position. Equality compares entries in order.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over values in key insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    /// Inserts a value, returning the one it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// result of `default` first if the key is new.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, default()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A hash set that iterates in first-insertion order.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    map: OrderedMap<T, ()>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            map: OrderedMap::new(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.map.keys()
    }
}

impl<T: Hash + Eq + Clone> OrderedSet<T> {
    /// Adds an element, returning false if an equal one was already present.
    /// The first occurrence keeps its position.
    pub fn insert(&mut self, value: T) -> bool {
        if self.map.contains_key(&value) {
            return false;
        }
        self.map.insert(value, ());
        true
    }

    /// Returns true if an equal element is present.
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Hash + Eq + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::iter::Map<std::vec::IntoIter<(T, ())>, fn((T, ())) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        let first: fn((T, ())) -> T = |(value, ())| value;
        self.map.into_iter().map(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_iterates_in_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("c", 3);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_replaces_value_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("Alice", 29);
        map.insert("Bob", 40);
        assert_eq!(map.insert("Alice", 31), Some(29));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"Alice"), Some(&31));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_get_or_insert_with_only_initializes_once() {
        let mut map: OrderedMap<&str, Vec<i32>> = OrderedMap::new();
        map.get_or_insert_with("x", Vec::new).push(1);
        map.get_or_insert_with("x", || vec![99]).push(2);
        assert_eq!(map.get(&"x"), Some(&vec![1, 2]));
    }

    #[test]
    fn test_map_equality_is_order_sensitive() {
        let ab: OrderedMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: OrderedMap<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(
            ab,
            [("a", 1), ("b", 2)].into_iter().collect::<OrderedMap<_, _>>()
        );
    }

    #[test]
    fn test_set_dedupes_keeping_first_position() {
        let set: OrderedSet<_> = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_set_insert_reports_novelty() {
        let mut set = OrderedSet::new();
        assert!(set.insert("x"));
        assert!(!set.insert("x"));
        assert!(set.contains(&"x"));
        assert_eq!(set.len(), 1);
    }
}
