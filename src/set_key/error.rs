use derive_more::{Display, Error};

/// An item in a path was equal to one that came before it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Item at index {index} repeats an earlier item in the path!")]
pub struct DuplicateItem {
    pub index: usize,
}
