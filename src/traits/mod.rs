//! Traits shared between the collections of this crate and the paths used to address them.
//!
//! [`SetLike`] is the equality seam of the crate: anything implementing it can be used as a path
//! into a [`SetMap`](crate::SetMap), and any key type implementing it (and [`FromIterator`]) can
//! be stored as one.

mod set;

pub use set::*;
