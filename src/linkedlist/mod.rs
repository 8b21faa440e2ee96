use std::cmp::Ordering;

use log::{debug, trace};

use crate::map::{check_key, DictError, DictKey, SortedDictionary};

type Link<K, V> = Option<Box<Node<K, V>>>;

// sorted singly linked list
pub struct LinkedDictionary<K, V> {
    head: Link<K, V>, // sentinel: the link before the first node, never holds an entry
    len: usize,
}

struct Node<K, V> {
    key: K,
    value: V,
    next: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, next: Link<K, V>) -> Node<K, V> {
        Node { key, value, next }
    }
}

impl<K: DictKey, V> LinkedDictionary<K, V> {
    /// find the link after the last node whose key is less than the given key
    ///
    /// The returned link holds the first node whose key is not less than `key`, or
    /// nothing if every stored key is less. It is the sentinel if no key is less.
    fn find_last_less(&self, key: &K) -> &Link<K, V> {
        let mut current = &self.head;

        while let Some(node) = current {
            if node.key.cmp(key) != Ordering::Less {
                break;
            }

            current = &node.next;
        }

        current
    }

    fn find_last_less_mut(&mut self, key: &K) -> &mut Link<K, V> {
        let mut current = &mut self.head;

        while current
            .as_ref()
            .map_or(false, |node| node.key.cmp(key) == Ordering::Less)
        {
            // the loop condition just saw a node here; a single `while let` over
            // `current.as_mut()` cannot hand `current` back after the loop
            current = match current {
                Some(node) => &mut node.next,
                None => unreachable!(),
            };
        }

        current
    }

    /// check the invariant: keys are strictly ascending and `len` matches
    pub fn assert(&self) {
        let mut count = 0;
        let mut current = &self.head;

        while let Some(node) = current {
            count += 1;

            if let Some(next) = &node.next {
                assert_eq!(
                    node.key.cmp(&next.key),
                    Ordering::Less,
                    "keys are not strictly ascending at position {}",
                    count
                );
            }

            current = &node.next;
        }

        assert_eq!(count, self.len, "the length does not match the number of nodes");
    }
}

impl<K: DictKey, V> SortedDictionary<K, V> for LinkedDictionary<K, V> {
    type Iter<'a> = Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    fn new() -> Self {
        LinkedDictionary { head: None, len: 0 }
    }

    fn try_get(&self, key: &K) -> Result<Option<&V>, DictError> {
        check_key(key)?;

        match self.find_last_less(key) {
            Some(node) if node.key == *key => Ok(Some(&node.value)),
            _ => Ok(None),
        }
    }

    fn add(&mut self, key: K, value: V) -> Result<(), DictError> {
        check_key(&key)?;

        let link = self.find_last_less_mut(&key);

        if let Some(node) = link.as_ref() {
            if node.key == key {
                debug!("linked: rejected duplicate key");
                return Err(DictError::DuplicateKey);
            }
        }

        let next = link.take();
        *link = Some(Box::new(Node::new(key, value, next)));

        self.len += 1;
        trace!("linked: inserted entry, len = {}", self.len);
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            current: self.head.as_deref(),
            len: self.len,
        }
    }
}

impl<K: DictKey, V> Default for LinkedDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for LinkedDictionary<K, V> {
    fn drop(&mut self) {
        let mut node = self.head.take();

        while let Some(mut inside) = node {
            node = inside.next.take();
        }
    }
}

pub struct Iter<'a, K, V> {
    current: Option<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;

        self.current = node.next.as_deref();
        self.len -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}
