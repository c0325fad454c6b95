//! Insertion-ordered map used for tools, paths and files, so menus and
//! defaults follow the order entries were declared in.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;


/// Failures of keyed or positional access into an [`OrderedMap`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderedMapError {
    /// The requested key was never inserted (or has been removed).
    #[error("key not found")]
    KeyNotFound,
    /// The requested position does not resolve into `0..len`.
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange {
        /// Position as requested, before negative indices are resolved.
        index: isize,
        /// Number of entries at the time of the lookup.
        len: usize,
    },
}

/// A map that remembers the order keys were first inserted in.
///
/// `order` gives position -> key, `entries` gives key -> value. Every
/// mutation keeps the two in lock-step, so the keys in `order` are always
/// exactly the keys of `entries`, without duplicates.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: HashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `true` when `key` has a value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> Result<&V, OrderedMapError> {
        self.entries.get(key).ok_or(OrderedMapError::KeyNotFound)
    }

    /// Insert or overwrite. A new key is appended to the ordering; an
    /// existing key keeps the position it was first seen at.
    pub fn set(&mut self, key: K, value: V) {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, value);
    }

    /// Remove `key` from both the mapping and the ordering.
    pub fn remove(&mut self, key: &K) -> Result<V, OrderedMapError> {
        let value = self
            .entries
            .remove(key)
            .ok_or(OrderedMapError::KeyNotFound)?;
        self.order.retain(|k| k != key);
        Ok(value)
    }

    /// Key at `index`. Negative indices count from the end, `-1` being the
    /// most recently inserted key.
    pub fn key_at(&self, index: isize) -> Result<&K, OrderedMapError> {
        let position = self.position(index)?;
        self.order
            .get(position)
            .ok_or(OrderedMapError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Overwrite the value of the key currently at `index`. Indexing follows
    /// [`key_at`](Self::key_at).
    pub fn set_at(&mut self, index: isize, value: V) -> Result<(), OrderedMapError> {
        let key = self.key_at(index)?.clone();
        self.entries.insert(key, value);
        Ok(())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.order.iter()
    }

    /// Keys in reverse insertion order.
    pub fn rev_keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter().rev()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            keys: self.order.iter(),
            entries: &self.entries,
        }
    }

    fn position(&self, index: isize) -> Result<usize, OrderedMapError> {
        let len = self.len();
        let out_of_range = OrderedMapError::IndexOutOfRange { index, len };
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok()
        };
        resolved.filter(|&p| p < len).ok_or(out_of_range)
    }
}

/// Iterator over the entries of an [`OrderedMap`] in insertion order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    keys: std::slice::Iter<'a, K>,
    entries: &'a HashMap<K, V>,
}

impl<'a, K: Eq + Hash, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.entries.get_key_value(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, K: Eq + Hash, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.entries.get_key_value(key)
    }
}

impl<'a, K: Eq + Hash + Clone, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Eq + Hash + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq + Hash + Clone + fmt::Display, V: fmt::Display> fmt::Display for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("]")
    }
}
