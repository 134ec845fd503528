//! # jsonaccess
//!
//! Chainable access to JSON documents with sticky errors.
//!
//! Every accessor returns a [`Value`]. A value either holds a node or the error that prevented
//! obtaining it, and once failed, everything derived from it carries that same error. Long
//! navigation chains therefore need a single check at the end, and the `*_or` accessors turn a
//! failure into a default.
//!
//! ```rust
//! use jsonaccess::path;
//!
//! let value = jsonaccess::parse(r#"{
//!     "name": "John Doe",
//!     "age": "30",
//!     "scores": [95, 87, 92],
//!     "address": {"city": "New York"}
//! }"#);
//!
//! assert_eq!(value.get(["name"]).as_string_or("Unknown"), "John Doe");
//! assert_eq!(value.get(["age"]).as_i64_or(0), 30);
//! assert_eq!(value.get(path!["scores", 1]).as_i64_or(0), 87);
//! assert_eq!(value.get(["address", "zip"]).as_string_or("N/A"), "N/A");
//! ```
mod binding;
mod coerce;
mod collections;
mod error;
mod impls;
mod input;
mod node;
mod options;
mod render;
mod segments;
mod value;

pub use binding::{must_parse_into, parse_into};
pub use coerce::parse_bool;
pub use error::{Error, ErrorKind};
pub use input::IntoDocument;
pub use node::{Node, Number};
pub use options::Options;
pub use render::{stringify, stringify_pretty, RenderBuffer};
pub use segments::Segment;
pub use value::Value;

/// Parse the input into a [`Value`] with default options.
///
/// Decoding failures don't surface here. They are carried by the returned value and show up
/// at the first accessor that needs a node.
#[must_use]
pub fn parse(input: impl IntoDocument) -> Value {
    Options::default().parse(input)
}

/// Like [`parse`], but panics if the input can't be decoded.
///
/// # Panics
///
/// Panics if the input is empty or not valid JSON.
#[must_use]
pub fn must_parse(input: impl IntoDocument) -> Value {
    let value = parse(input);
    if let Some(error) = value.error() {
        panic!("{error}");
    }
    value
}

/// Encode any serializable input and wrap the result into a [`Value`].
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// let mut settings = BTreeMap::new();
/// settings.insert("retries", 3);
///
/// let value = jsonaccess::from_serializable(&settings);
/// assert_eq!(value.get(["retries"]).as_i64_or(0), 3);
/// ```
#[must_use]
pub fn from_serializable<T>(input: &T) -> Value
where
    T: serde::Serialize + ?Sized,
{
    Value::from_serializable(input)
}

/// Default options, to be refined with the builder methods of [`Options`].
#[must_use]
pub fn options() -> Options {
    Options::default()
}
