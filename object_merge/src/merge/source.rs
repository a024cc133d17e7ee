//! Adapters describing how source values are read and stored.

use serde_json::{Value, map};

/// A value that can be folded into a merge target.
///
/// Borrowed sources (`&Value`) are left untouched: every value inserted into
/// the target is cloned from them. Owned sources (`Value`) are consumed and
/// their subtrees are moved into the target without copying, so nothing is
/// shared between the caller's inputs and the merged result in either case.
pub trait MergeSource: Sized {
    /// Key type yielded while walking a mapping.
    type Key: AsRef<str> + Into<String>;
    /// Iterator over the own entries of a mapping.
    type Entries: Iterator<Item = (Self::Key, Self)>;

    /// Borrow the underlying value.
    fn as_value(&self) -> &Value;

    /// Split a mapping into its entries.
    ///
    /// # Errors
    ///
    /// Hands `self` back unchanged when the value is not a mapping.
    fn into_entries(self) -> Result<Self::Entries, Self>;

    /// Produce the value stored in the target for this source.
    fn into_value(self) -> Value;
}

impl<'a> MergeSource for &'a Value {
    type Key = &'a String;
    type Entries = map::Iter<'a>;

    fn as_value(&self) -> &Value {
        self
    }

    fn into_entries(self) -> Result<Self::Entries, Self> {
        match self {
            Value::Object(entries) => Ok(entries.iter()),
            leaf => Err(leaf),
        }
    }

    fn into_value(self) -> Value {
        self.clone()
    }
}

impl MergeSource for Value {
    type Key = String;
    type Entries = map::IntoIter;

    fn as_value(&self) -> &Value {
        self
    }

    fn into_entries(self) -> Result<Self::Entries, Self> {
        match self {
            Self::Object(entries) => Ok(entries.into_iter()),
            leaf => Err(leaf),
        }
    }

    fn into_value(self) -> Value {
        self
    }
}
