use std::fmt::{self, Debug, Display, Formatter};

use super::{DuplicateItem, Iter};
use crate::traits::SetLike;
use crate::util::fmt::{DebugRaw, set_literal};

/// A canonical, unordered collection of unique items, used as the stored key of a
/// [`SetMap`](crate::SetMap).
///
/// SetKey only requires its items to implement [`Eq`], without needing [`Hash`](std::hash::Hash)
/// or [`Ord`]. The trade-off is that membership checks are linear.
///
/// Items must be equal to themselves, otherwise a key couldn't be found again with the path that
/// created it. Types that are only [`PartialEq`], like floats, are rejected:
/// ```compile_fail
/// use set_map::SetKey;
///
/// let key: SetKey<f64> = [f64::NAN].into_iter().collect();
/// ```
///
/// Collecting into a SetKey is the normalization step for paths: repeated items are dropped,
/// keeping the first occurrence. Equality between SetKeys ignores the order of their items.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SetKey.
/// - `m`: The number of items in the other operand.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `insert` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `from_iter` | `O(m^2)` |
/// | `eq` | `O(n * m)` |
pub struct SetKey<T> {
    pub(crate) items: Vec<T>,
}

impl<T> SetKey<T> {
    /// Creates a new, empty SetKey. This is the key of the empty path.
    pub const fn new() -> SetKey<T> {
        SetKey {
            items: Vec::new(),
        }
    }

    /// Creates an empty SetKey with space for `cap` items.
    pub fn with_cap(cap: usize) -> SetKey<T> {
        SetKey {
            items: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of items in the SetKey.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the SetKey contains no items.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all items in the SetKey, as references. The order is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Eq> SetKey<T> {
    /// Adds `item` to the SetKey, returning true if it wasn't already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the item equal to `item`, returning it if it was present.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.items.iter().position(|existing| existing == item)?;
        // Order doesn't matter, so there's no need to shift the remaining items.
        Some(self.items.swap_remove(index))
    }

    /// Returns true if the SetKey contains an item equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Creates a SetKey from `path`, failing if any item repeats an earlier one rather than
    /// silently dropping it.
    pub fn try_from_unique<I: IntoIterator<Item = T>>(path: I) -> Result<SetKey<T>, DuplicateItem> {
        let iter = path.into_iter();
        let mut key = SetKey::with_cap(iter.size_hint().0);

        for (index, item) in iter.enumerate() {
            if !key.insert(item) {
                return Err(DuplicateItem { index });
            }
        }

        Ok(key)
    }
}

impl<T: Eq> SetLike<T> for SetKey<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        SetKey::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        SetKey::iter(self)
    }

    fn unique_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Default for SetKey<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SetKey<T> {
    fn clone(&self) -> Self {
        SetKey {
            items: self.items.clone(),
        }
    }
}

impl<T: Eq> PartialEq for SetKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T: Eq> Eq for SetKey<T> {}

impl<T: Eq> FromIterator<T> for SetKey<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut key = SetKey::with_cap(iter.size_hint().0);

        for item in iter {
            key.insert(item);
        }

        key
    }
}

impl<T: Eq, const N: usize> From<[T; N]> for SetKey<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Eq> From<Vec<T>> for SetKey<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Eq> Extend<T> for SetKey<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Debug> Debug for SetKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetKey")
            .field("contents", &DebugRaw(set_literal(self.iter().map(|i| format!("{i:?}")))))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for SetKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", set_literal(self.iter().map(|i| format!("{i}"))))
    }
}
