//! A module containing [`SetMap`], a map keyed by unordered combinations of items.
//!
//! [`SetMap`] is also re-exported from the crate root.

mod set_map;

pub use set_map::*;
