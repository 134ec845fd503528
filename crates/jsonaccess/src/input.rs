//! Inputs that can be turned into a document.
use serde::Serialize;

use crate::{error::ErrorKind, impls::decode, Error, Node, Value};

/// Conversion of an input into a node tree.
///
/// Text and byte inputs are decoded as JSON, existing trees are taken as is and a [`Value`]
/// yields its node or its carried error. Anything else implementing `Serialize` can be wrapped
/// with [`from_serializable`](crate::from_serializable).
pub trait IntoDocument {
    /// Decode or take over the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or not valid JSON.
    fn into_document(self) -> Result<Node, Error>;
}

impl IntoDocument for &str {
    fn into_document(self) -> Result<Node, Error> {
        if self.is_empty() {
            return Err(Error::decode("Parse", "empty string"));
        }
        decode(self.as_bytes(), "Parse")
    }
}

impl IntoDocument for &String {
    fn into_document(self) -> Result<Node, Error> {
        self.as_str().into_document()
    }
}

impl IntoDocument for String {
    fn into_document(self) -> Result<Node, Error> {
        self.as_str().into_document()
    }
}

impl IntoDocument for &[u8] {
    fn into_document(self) -> Result<Node, Error> {
        if self.is_empty() {
            return Err(Error::decode("Parse", "empty byte slice"));
        }
        decode(self, "Parse")
    }
}

impl<const N: usize> IntoDocument for &[u8; N] {
    fn into_document(self) -> Result<Node, Error> {
        self.as_slice().into_document()
    }
}

impl IntoDocument for &Vec<u8> {
    fn into_document(self) -> Result<Node, Error> {
        self.as_slice().into_document()
    }
}

impl IntoDocument for Vec<u8> {
    fn into_document(self) -> Result<Node, Error> {
        self.as_slice().into_document()
    }
}

impl IntoDocument for serde_json::Value {
    fn into_document(self) -> Result<Node, Error> {
        Ok(Node::from(self))
    }
}

impl IntoDocument for &serde_json::Value {
    fn into_document(self) -> Result<Node, Error> {
        Ok(Node::from(self))
    }
}

impl IntoDocument for Node {
    fn into_document(self) -> Result<Node, Error> {
        Ok(self)
    }
}

impl IntoDocument for Value {
    fn into_document(self) -> Result<Node, Error> {
        self.into_result()
    }
}

impl Value {
    /// Encode any serializable input as JSON and wrap the decoded tree.
    #[must_use]
    pub fn from_serializable<T>(input: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        let result = serde_json::to_vec(input)
            .map_err(|error| Error::serde(ErrorKind::Decode, "Parse", error))
            .and_then(|bytes| decode(&bytes, "Parse"));
        Value::from_result(result, crate::Options::default())
    }
}
