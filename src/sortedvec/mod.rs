use std::{cmp::Ordering, slice};

use log::{debug, trace};

use crate::map::{check_key, DictError, DictKey, SortedDictionary};

/// Sorted dictionary on a contiguous vector, searched by bisection.
///
/// Lookup is O(log n). Insertion finds its slot in O(log n) but shifts the
/// trailing entries, so it is O(n) in the worst case.
pub struct ArrayDictionary<K, V> {
    entries: Vec<(K, V)>, // strictly ascending by key
}

impl<K: DictKey, V> ArrayDictionary<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// bisect [start, end) for the key
    ///
    /// Returns the index of a key comparing equal, or the index where the key
    /// would be inserted to keep the order.
    fn find(&self, key: &K) -> usize {
        let mut start = 0;
        let mut end = self.entries.len();

        while start < end {
            let mid = start + (end - start) / 2;

            match key.cmp(&self.entries[mid].0) {
                Ordering::Equal => return mid,
                Ordering::Less => end = mid,
                Ordering::Greater => start = mid + 1,
            }
        }

        start
    }

    /// the index of the entry equal to the key, if any
    ///
    /// The comparator only picks the slot. Equality is confirmed with `==`.
    fn position(&self, key: &K) -> Result<usize, usize> {
        let index = self.find(key);

        match self.entries.get(index) {
            Some((k, _)) if k == key => Ok(index),
            _ => Err(index),
        }
    }

    /// check the invariant: keys are strictly ascending
    pub fn assert(&self) {
        for (index, pair) in self.entries.windows(2).enumerate() {
            assert_eq!(
                pair[0].0.cmp(&pair[1].0),
                Ordering::Less,
                "keys are not strictly ascending at index {}",
                index
            );
        }
    }
}

impl<K: DictKey, V> SortedDictionary<K, V> for ArrayDictionary<K, V> {
    type Iter<'a> = Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn try_get(&self, key: &K) -> Result<Option<&V>, DictError> {
        check_key(key)?;

        Ok(self
            .position(key)
            .ok()
            .map(|index| &self.entries[index].1))
    }

    fn add(&mut self, key: K, value: V) -> Result<(), DictError> {
        check_key(&key)?;

        match self.position(&key) {
            Ok(_) => {
                debug!("array: rejected duplicate key");
                Err(DictError::DuplicateKey)
            }
            Err(index) => {
                self.entries.insert(index, (key, value));
                trace!(
                    "array: inserted entry at {}, len = {}",
                    index,
                    self.entries.len()
                );
                Ok(())
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<K: DictKey, V> Default for ArrayDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
