//! A map keyed by unordered combinations of items rather than by single values or sequences.
//!
//! # Purpose
//! Sometimes a value belongs to a group of things rather than any one of them, and the order those
//! things are listed in is meaningless. [`SetMap`] stores values under such groups, called paths,
//! so that `[a, b, c]` and `[c, a, b]` address the same entry.
//!
//! ```
//! use set_map::SetMap;
//!
//! let mut map: SetMap<&str, u32> = SetMap::new();
//! map.set(["tea", "milk"], 2).set(["tea"], 1);
//!
//! assert_eq!(map.get(&["milk", "tea"]), Some(&2));
//! assert!(map.delete_all(&"milk"));
//! assert!(!map.has(&["tea", "milk"]));
//! assert_eq!(map.get(&["tea"]), Some(&1));
//! ```
//!
//! # Method
//! Entries are kept in a flat list and every operation scans it, comparing keys to the path with
//! [`SetLike::set_eq`]. This keeps the item bounds as loose as possible (only [`Eq`] for the
//! default [`SetKey`]), at the cost of linear lookups. The key type is a parameter of the map,
//! so hashed or ordered sets can be stored instead when the items allow it.
//!
//! # Error Handling
//! A missing entry isn't an error: lookups return [`None`] and deletions return `false`. The only
//! error in this crate is [`DuplicateItem`], returned by the strict constructors
//! ([`SetKey::try_from_unique`] and [`SetMap::try_set`]) when a path repeats an item.
//!
//! # Features
//! - `std-sets`: Implements [`SetLike`] for [`HashSet`](std::collections::HashSet) and
//!   [`BTreeSet`](std::collections::BTreeSet), so they can be used as paths and keys.
//! - `log`: Emits `trace` records through the [`log`](https://docs.rs/log) facade when entries are
//!   created or deleted.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod set_key;
pub mod set_map;
pub mod traits;

pub(crate) mod util;

#[doc(inline)]
pub use set_key::{DuplicateItem, SetKey};
#[doc(inline)]
pub use set_map::SetMap;
#[doc(inline)]
pub use traits::SetLike;
