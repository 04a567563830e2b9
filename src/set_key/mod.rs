//! A module containing [`SetKey`] and associated types.
//!
//! SetKey is the default stored key of a [`SetMap`](crate::SetMap). There is no mutable iterator
//! over its items, because mutating them in place could make two items equal.
//!
//! [`SetKey`] is also re-exported from the crate root.

mod error;
mod iter;
mod set_key;

pub use error::*;
pub use iter::*;
pub use set_key::*;
