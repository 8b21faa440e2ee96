use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictError {
    /// The key is the absent sentinel, e.g. `None` for `Option<T>` keys
    #[error("invalid key: the absent key cannot be stored or looked up")]
    InvalidKey,

    /// An equal key is already stored, nothing was inserted
    #[error("duplicate key: an entry with an equal key already exists")]
    DuplicateKey,
}

/// Keys of a sorted dictionary.
///
/// Besides the total order, a key may report itself as the absent sentinel.
/// Absent keys are rejected by every operation with `DictError::InvalidKey`.
pub trait DictKey: Ord {
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! never_absent {
    ($($t:ty),* $(,)?) => {
        $(impl DictKey for $t {})*
    };
}

never_absent!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, str, String,
);

impl<T: DictKey + ?Sized> DictKey for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: DictKey + ?Sized> DictKey for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: DictKey> DictKey for Option<T> {
    fn is_absent(&self) -> bool {
        match self {
            Some(key) => key.is_absent(),
            None => true,
        }
    }
}

/// Reject the absent key before touching the structure.
pub(crate) fn check_key<K: DictKey + ?Sized>(key: &K) -> Result<(), DictError> {
    if key.is_absent() {
        return Err(DictError::InvalidKey);
    }

    Ok(())
}

pub trait SortedDictionary<K: DictKey, V> {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn new() -> Self;

    /// Lookup the value associated with the key.
    ///
    /// If found, return Ok(Some(value)).
    /// If the key is not stored, return Ok(None).
    /// If the key is absent, return Err(DictError::InvalidKey).
    fn try_get(&self, key: &K) -> Result<Option<&V>, DictError>;

    /// Insert (key, value) into the dictionary.
    ///
    /// If success, return Ok(()).
    /// If an equal key exists, return Err(DictError::DuplicateKey) and leave the
    /// dictionary untouched.
    fn add(&mut self, key: K, value: V) -> Result<(), DictError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate (key, value) in ascending key order.
    fn iter(&self) -> Self::Iter<'_>;
}
