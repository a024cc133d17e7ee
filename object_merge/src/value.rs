//! Shape classification for the JSON value model.

use std::fmt;

use serde_json::Value;

/// Coarse shape of a [`Value`], used when reporting malformed inputs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// Any JSON number.
    Number,
    /// A string.
    String,
    /// A sequence. Sequences are always merged as leaves.
    Array,
    /// A mapping.
    Object,
}

impl ValueKind {
    /// Classify `value`.
    ///
    /// ```rust
    /// use object_merge::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Array);
    /// assert!(ValueKind::of(&json!({})).is_mapping());
    /// ```
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns `true` for mappings, the only shape the merger descends into.
    #[must_use]
    pub const fn is_mapping(self) -> bool {
        matches!(self, Self::Object)
    }

    /// Lower-case name of the shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        Self::of(value)
    }
}
