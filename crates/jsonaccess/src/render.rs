//! Rendering nodes and values as JSON text.
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{error::ErrorKind, Error, Value};

/// Default initial capacity of a [`RenderBuffer`] in bytes.
const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Render any serializable input as compact JSON text.
///
/// # Errors
///
/// Returns an error if the input can't be represented as JSON, e.g. a map with non-string keys.
pub fn stringify<T>(value: &T) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(|error| Error::serde(ErrorKind::Encode, "Stringify", error))
}

/// Render any serializable input as indented JSON text, using `indent` for every nesting level.
///
/// # Errors
///
/// Returns an error if the input can't be represented as JSON.
pub fn stringify_pretty<T>(value: &T, indent: &str) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let mut bytes = Vec::with_capacity(128);
    write_pretty(&mut bytes, value, indent)?;
    String::from_utf8(bytes).map_err(|error| {
        Error::with_source(
            ErrorKind::Encode,
            "StringifyPretty",
            "rendered text is not valid UTF-8",
            error,
        )
    })
}

fn write_pretty<T>(bytes: &mut Vec<u8>, value: &T, indent: &str) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let mut serializer = Serializer::with_formatter(bytes, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|error| Error::serde(ErrorKind::Encode, "StringifyPretty", error))
}

/// A reusable buffer for rendering JSON text.
///
/// The buffer is cleared before every render and the returned text borrows from it, so one
/// render can't be observed through another.
///
/// ```rust
/// let mut buffer = jsonaccess::RenderBuffer::new();
/// let value = jsonaccess::parse(r#"{"a": [1, 2]}"#);
///
/// assert_eq!(value.get(["a"]).stringify_into(&mut buffer).expect("Valid"), "[1,2]");
/// assert_eq!(value.stringify_into(&mut buffer).expect("Valid"), r#"{"a":[1,2]}"#);
/// ```
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    bytes: Vec<u8>,
}

impl RenderBuffer {
    /// Create an empty buffer with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a buffer with the given initial capacity in bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes the buffer can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Render the input as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the input can't be represented as JSON.
    pub fn render<T>(&mut self, value: &T) -> Result<&str, Error>
    where
        T: Serialize + ?Sized,
    {
        self.bytes.clear();
        serde_json::to_writer(&mut self.bytes, value)
            .map_err(|error| Error::serde(ErrorKind::Encode, "Stringify", error))?;
        self.as_str("Stringify")
    }

    /// Render the input as indented JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the input can't be represented as JSON.
    pub fn render_pretty<T>(&mut self, value: &T, indent: &str) -> Result<&str, Error>
    where
        T: Serialize + ?Sized,
    {
        self.bytes.clear();
        write_pretty(&mut self.bytes, value, indent)?;
        self.as_str("StringifyPretty")
    }

    fn as_str(&self, operation: &'static str) -> Result<&str, Error> {
        std::str::from_utf8(&self.bytes).map_err(|error| {
            Error::with_source(
                ErrorKind::Encode,
                operation,
                "rendered text is not valid UTF-8",
                error,
            )
        })
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Value {
    /// Render the wrapped node as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value.
    pub fn stringify(&self) -> Result<String, Error> {
        stringify(self.node().map_err(Clone::clone)?)
    }

    /// Render the wrapped node as indented JSON text.
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value.
    pub fn stringify_pretty(&self, indent: &str) -> Result<String, Error> {
        stringify_pretty(self.node().map_err(Clone::clone)?, indent)
    }

    /// Render the wrapped node as compact JSON text into a reusable buffer.
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value.
    pub fn stringify_into<'b>(&self, buffer: &'b mut RenderBuffer) -> Result<&'b str, Error> {
        buffer.render(self.node().map_err(Clone::clone)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;
    use test_case::test_case;

    use super::{stringify, stringify_pretty, RenderBuffer};
    use crate::{ErrorKind, Node, Value};

    #[test_case(json!(null), "null"; "null")]
    #[test_case(json!({"b": [true, 1.5], "a": "x"}), r#"{"a":"x","b":[true,1.5]}"#; "object")]
    #[test_case(json!("quote \" here"), r#""quote \" here""#; "escaped string")]
    fn compact(input: serde_json::Value, expected: &str) {
        let value = crate::parse(input);
        assert_eq!(value.stringify().expect("Should render"), expected);
    }

    #[test_case("1.0", "1"; "integral float")]
    #[test_case("1e2", "100"; "exponent")]
    #[test_case("-5.0", "-5"; "negative integral float")]
    #[test_case("[0.5, 2.0]", "[0.5,2]"; "mixed array")]
    fn integral_floats_render_as_integers(input: &str, expected: &str) {
        let value = crate::parse(input);
        assert_eq!(value.stringify().expect("Should render"), expected);
        let mut buffer = RenderBuffer::new();
        assert_eq!(value.stringify_into(&mut buffer).expect("Should render"), expected);
    }

    #[test]
    fn null_node_renders_as_null() {
        assert_eq!(stringify(&Node::Null).expect("Should render"), "null");
        assert_eq!(Value::wrap(Node::Null).stringify().expect("Should render"), "null");
    }

    #[test]
    fn pretty() {
        let value = crate::parse(r#"{"a": [1, {"b": null}]}"#);
        assert_eq!(
            value.stringify_pretty("  ").expect("Should render"),
            "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ]\n}"
        );
        assert_eq!(
            value.get(["a"]).stringify_pretty("\t").expect("Should render"),
            "[\n\t1,\n\t{\n\t\t\"b\": null\n\t}\n]"
        );
    }

    #[test]
    fn arbitrary_serializable_input() {
        let mut data = BTreeMap::new();
        data.insert("name", json!("John"));
        data.insert("scores", json!([95, 87, 92]));
        assert_eq!(
            stringify(&data).expect("Should render"),
            r#"{"name":"John","scores":[95,87,92]}"#
        );
        assert_eq!(stringify_pretty(&[1, 2], "").expect("Should render"), "[\n1,\n2\n]");
    }

    #[test]
    fn non_string_keys_fail() {
        let mut data = BTreeMap::new();
        data.insert(vec![1u8], 1);
        let error = stringify(&data).expect_err("Should fail");
        assert_eq!(error.kind(), ErrorKind::Encode);
        assert_eq!(error.operation(), "Stringify");
        let error = stringify_pretty(&data, "  ").expect_err("Should fail");
        assert_eq!(error.operation(), "StringifyPretty");
    }

    #[test]
    fn failed_values_propagate_errors() {
        let value = Value::fail("Custom", "boom");
        let error = value.error().expect("Should fail");
        let mut buffer = RenderBuffer::new();
        assert!(value.stringify().expect_err("Should fail").same_as(error));
        assert!(value.stringify_pretty("  ").expect_err("Should fail").same_as(error));
        assert!(value.stringify_into(&mut buffer).expect_err("Should fail").same_as(error));
    }

    #[test]
    fn buffer_is_reset_between_renders() {
        let mut buffer = RenderBuffer::with_capacity(4);
        let long = crate::parse(r#"{"key": "a long enough value"}"#);
        let short = crate::parse("[1]");
        assert_eq!(
            long.stringify_into(&mut buffer).expect("Should render"),
            r#"{"key":"a long enough value"}"#
        );
        let capacity = buffer.capacity();
        assert_eq!(short.stringify_into(&mut buffer).expect("Should render"), "[1]");
        assert_eq!(buffer.capacity(), capacity);
        assert_eq!(buffer.render_pretty(&[true], " ").expect("Should render"), "[\n true\n]");
    }
}
