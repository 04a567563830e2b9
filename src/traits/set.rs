use std::slice;

#[cfg(feature = "std-sets")]
use std::collections::{BTreeSet, HashSet, btree_set, hash_set};
#[cfg(feature = "std-sets")]
use std::hash::{BuildHasher, Hash};

/// A collection that can be treated as a set of `T`, regardless of the order or representation of
/// its items.
///
/// Sequences implement this trait as well as true sets. When a sequence repeats an item, the
/// repetition is ignored for the purposes of [`set_eq`](SetLike::set_eq) and friends.
pub trait SetLike<T> {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all items, as references. Sequences may yield an item more than
    /// once.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns the number of distinct items, if it is known without scanning the collection.
    fn unique_len(&self) -> Option<usize>;

    /// Returns true if `other` contains all items of `self`. (`self ⊆ other`)
    fn is_subset<S: SetLike<T> + ?Sized>(&self, other: &S) -> bool {
        for item in self.iter() {
            if !other.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `self` contains all items of `other`. (`self ⊇ other`)
    fn is_superset<S: SetLike<T> + ?Sized>(&self, other: &S) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have exactly the same members, ignoring order and
    /// repeated items.
    ///
    /// When both sides know their distinct length, differing lengths short-circuit and a single
    /// subset check is enough. Otherwise containment is checked in both directions.
    fn set_eq<S: SetLike<T> + ?Sized>(&self, other: &S) -> bool {
        match (self.unique_len(), other.unique_len()) {
            (Some(len), Some(other_len)) => len == other_len && self.is_subset(other),
            _ => self.is_subset(other) && other.is_subset(self),
        }
    }
}

/// Counts a sequence as unique only when it can't possibly repeat an item.
const fn trivially_unique_len(len: usize) -> Option<usize> {
    if len <= 1 { Some(len) } else { None }
}

impl<T: Eq> SetLike<T> for [T] {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        <[T]>::iter(self)
    }

    fn unique_len(&self) -> Option<usize> {
        trivially_unique_len(self.len())
    }
}

impl<T: Eq, const N: usize> SetLike<T> for [T; N] {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.as_slice().iter()
    }

    fn unique_len(&self) -> Option<usize> {
        trivially_unique_len(N)
    }
}

impl<T: Eq> SetLike<T> for Vec<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.as_slice().iter()
    }

    fn unique_len(&self) -> Option<usize> {
        trivially_unique_len(self.len())
    }
}

#[cfg(feature = "std-sets")]
impl<T: Hash + Eq, B: BuildHasher> SetLike<T> for HashSet<T, B> {
    type Iter<'a> = hash_set::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }

    fn unique_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

#[cfg(feature = "std-sets")]
impl<T: Ord> SetLike<T> for BTreeSet<T> {
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        BTreeSet::iter(self)
    }

    fn unique_len(&self) -> Option<usize> {
        Some(self.len())
    }
}
