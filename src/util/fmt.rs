use std::fmt::{self, Debug, Formatter};

/// Writes the contained String as-is when debug formatted, without quotes or escapes.
pub(crate) struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Joins already formatted items into the `#{a, b}` notation used for sets throughout the crate.
pub(crate) fn set_literal<I: IntoIterator<Item = String>>(items: I) -> String {
    format!("#{{{}}}", items.into_iter().collect::<Vec<String>>().join(", "))
}
