use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use crate::set_key::{DuplicateItem, SetKey};
use crate::traits::SetLike;
use crate::util::fmt::set_literal;
use crate::util::log::trace;

/// A map of values addressed by unordered combinations of items, called paths.
///
/// A path can be any [`SetLike`] collection: an array, slice or [`Vec`] in any order, a
/// [`SetKey`], or one of the standard library's sets. Two paths address the same entry when they
/// have the same members, regardless of order, repeats or representation.
///
/// Paths are normalized into the key type `K` when a new entry is created. By default this is a
/// [`SetKey`], which only needs `T: Eq`. Any other `K: SetLike<T> + FromIterator<T>` can be used
/// instead, such as a [`HashSet`](std::collections::HashSet) when `T: Hash + Eq`.
///
/// Lookups scan every key and compare it to the path with [`SetLike::set_eq`]. At most one entry
/// exists for each combination of members; only [`set`](SetMap::set) adds entries and it always
/// checks for an existing one first.
///
/// There is intentionally no iteration over entries.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the SetMap.
/// - `e`: The cost of one equality check between a key and a path.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set` | `O(n * e)` |
/// | `get` | `O(n * e)` |
/// | `has` | `O(n * e)` |
/// | `delete` | `O(n * e)` |
/// | `delete_all` | `O(n * c)`* |
///
/// \* Where `c` is the cost of a single membership check in a key.
pub struct SetMap<T, V, K = SetKey<T>> {
    pub(crate) entries: Vec<(K, V)>,
    // We need the type parameter T for SetLike, despite not directly owning any T.
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T, V, K> SetMap<T, V, K> {
    /// Creates a new, empty SetMap.
    pub const fn new() -> SetMap<T, V, K> {
        SetMap {
            entries: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Creates a new SetMap with space for `cap` entries before reallocating.
    pub fn with_cap(cap: usize) -> SetMap<T, V, K> {
        SetMap {
            entries: Vec::with_capacity(cap),
            _phantom: PhantomData,
        }
    }

    /// Returns the number of entries in the SetMap.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the SetMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.len());
        self.entries.clear();
    }
}

impl<T, V, K: SetLike<T>> SetMap<T, V, K> {
    /// Associates `value` with `path`, returning the SetMap to allow chaining.
    ///
    /// If an entry with the same members already exists, its value is replaced and its key is
    /// kept. Otherwise `path` is normalized into a new key.
    pub fn set<P>(&mut self, path: P, value: V) -> &mut Self
    where
        P: SetLike<T> + IntoIterator<Item = T>,
        K: FromIterator<T>,
    {
        match self.find_index(&path) {
            Some(index) => {
                self.entries[index].1 = value;
            },
            None => {
                let key: K = path.into_iter().collect();
                self.entries.push((key, value));
                trace!("created entry, {} entries", self.len());
            },
        }
        self
    }

    /// Associates the default value of `V` with `path`, for when only the presence of a path
    /// matters.
    pub fn set_default<P>(&mut self, path: P) -> &mut Self
    where
        P: SetLike<T> + IntoIterator<Item = T>,
        K: FromIterator<T>,
        V: Default,
    {
        self.set(path, V::default())
    }

    /// Associates `value` with `path` like [`set`](SetMap::set), but fails instead of dropping
    /// repeated items from the path.
    pub fn try_set<I>(&mut self, path: I, value: V) -> Result<&mut Self, DuplicateItem>
    where
        I: IntoIterator<Item = T>,
        K: FromIterator<T>,
        T: Eq,
    {
        let key = SetKey::try_from_unique(path)?;
        Ok(self.set(key, value))
    }

    /// Returns the entry for `path` as a key-value pair, or None if there is no entry.
    pub fn get_entry<P: SetLike<T> + ?Sized>(&self, path: &P) -> Option<(&K, &V)> {
        self.entries.iter()
            .find(|(key, _)| key.set_eq(path))
            .map(|(key, value)| (key, value))
    }

    /// Returns a reference to the value associated with `path`, or None if there is no entry.
    pub fn get<P: SetLike<T> + ?Sized>(&self, path: &P) -> Option<&V> {
        self.get_entry(path).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value associated with `path`, or None if there is no
    /// entry.
    pub fn get_mut<P: SetLike<T> + ?Sized>(&mut self, path: &P) -> Option<&mut V> {
        let index = self.find_index(path)?;
        Some(&mut self.entries[index].1)
    }

    /// Returns true if there is a value associated with `path`.
    ///
    /// The empty path only matches an entry that was set with the empty path.
    pub fn has<P: SetLike<T> + ?Sized>(&self, path: &P) -> bool {
        self.find_index(path).is_some()
    }

    /// Removes the entry associated with `path`, returning true if there was one.
    pub fn delete<P: SetLike<T> + ?Sized>(&mut self, path: &P) -> bool {
        // Removes every match, even though there can only be one.
        let removed = self.remove_where(|key| key.set_eq(path));
        trace!("deleted {removed} entries by path");
        removed > 0
    }

    /// Removes the entry associated with `path`, returning its value if there was one.
    pub fn remove<P: SetLike<T> + ?Sized>(&mut self, path: &P) -> Option<V> {
        let index = self.find_index(path)?;
        trace!("removed entry at index {index}");
        // Order doesn't matter, so the last entry can fill the gap.
        Some(self.entries.swap_remove(index).1)
    }

    /// Removes every entry whose key contains `item`, returning true if anything was removed.
    pub fn delete_all(&mut self, item: &T) -> bool {
        let removed = self.remove_where(|key| key.contains(item));
        trace!("deleted {removed} entries by item");
        removed > 0
    }
}

impl<T, V, K: SetLike<T>> SetMap<T, V, K> {
    /// Finds the index of the first entry whose key is set-equal to `path`.
    pub(crate) fn find_index<P: SetLike<T> + ?Sized>(&self, path: &P) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key.set_eq(path))
    }

    /// Removes all entries with a key matching `predicate`, returning the number removed.
    pub(crate) fn remove_where<F: FnMut(&K) -> bool>(&mut self, mut predicate: F) -> usize {
        let before = self.len();
        self.entries.retain(|(key, _)| !predicate(key));
        before - self.len()
    }

    /// Returns true if no two keys are set-equal, which should hold after any sequence of public
    /// operations.
    #[cfg(test)]
    pub(crate) fn keys_are_distinct(&self) -> bool {
        self.entries.iter().enumerate().all(|(index, (key, _))| {
            self.entries[index + 1..].iter().all(|(other, _)| !key.set_eq(other))
        })
    }
}

impl<T, V, K> Default for SetMap<T, V, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V: Clone, K: Clone> Clone for SetMap<T, V, K> {
    fn clone(&self) -> Self {
        SetMap {
            entries: self.entries.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, V: Debug, K: Debug> Debug for SetMap<T, V, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetMap")
            .field("entries", &self.entries)
            .field("len", &self.len())
            .finish()
    }
}

impl<T, V: Display, K: Display> Display for SetMap<T, V, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "{}",
            set_literal(self.entries.iter().map(|(k, v)| format!("{k}: {v}")))
        )
    }
}
