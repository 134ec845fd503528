use serde::Serialize;

use crate::{input::IntoDocument, Node, Value};

/// Behaviour switches carried by every [`Value`] and inherited by values derived from it.
///
/// ```rust
/// let value = jsonaccess::options()
///     .empty_string_as_default(false)
///     .parse(r#"{"name": ""}"#);
/// assert_eq!(value.get(["name"]).as_string_or("fallback"), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    empty_string_as_default: bool,
    string_indices: bool,
}

impl Options {
    /// Create [`Options`] with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            empty_string_as_default: true,
            string_indices: true,
        }
    }

    /// Whether [`Value::as_string_or`] returns the default for an empty string.
    ///
    /// Enabled by default: a present but empty string is treated the same way as a missing
    /// or non-convertible value. Disable it to get the empty string back.
    #[must_use]
    pub const fn empty_string_as_default(mut self, yes: bool) -> Self {
        self.empty_string_as_default = yes;
        self
    }

    /// Whether string segments made of decimal digits (e.g. `"2"`) may index arrays.
    ///
    /// Enabled by default.
    #[must_use]
    pub const fn string_indices(mut self, yes: bool) -> Self {
        self.string_indices = yes;
        self
    }

    pub(crate) const fn uses_empty_string_as_default(self) -> bool {
        self.empty_string_as_default
    }

    pub(crate) const fn allows_string_indices(self) -> bool {
        self.string_indices
    }

    /// Parse the input into a [`Value`] that uses these options.
    #[must_use]
    pub fn parse(self, input: impl IntoDocument) -> Value {
        Value::from_result(input.into_document(), self)
    }

    /// Wrap an existing node into a [`Value`] that uses these options.
    #[must_use]
    pub fn wrap(self, node: Node) -> Value {
        Value::wrap(node).with_options(self)
    }

    /// Encode any serializable input and wrap the result into a [`Value`] that uses these
    /// options.
    #[must_use]
    pub fn from_serializable<T>(self, input: &T) -> Value
    where
        T: Serialize + ?Sized,
    {
        Value::from_serializable(input).with_options(self)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Options;
    use crate::Node;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(options.uses_empty_string_as_default());
        assert!(options.allows_string_indices());
        assert_eq!(options, crate::options());
    }

    #[test]
    fn options_are_inherited() {
        let options = Options::new().string_indices(false);
        let value = options.wrap(Node::array([Node::array([Node::Null])]));
        let child = value.get([0]);
        assert_eq!(child.options(), options);
        assert!(!child.has(["0"]));
        assert!(child.has([0]));
    }
}
