use std::sync::Arc;

use ahash::AHashMap;

use crate::{Error, Node, Value};

impl Value {
    /// The array elements as values, in their original order.
    ///
    /// Elements share their nodes with this value, nothing is copied.
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value, or an error if the value is not an array.
    pub fn as_array(&self) -> Result<Vec<Value>, Error> {
        match self.node().map_err(Clone::clone)? {
            Node::Array(items) => Ok(items.iter().map(|item| self.derive(item)).collect()),
            node => Err(Error::projection(
                "Array",
                format!("value is not an array, got {}", node.type_name()),
            )),
        }
    }

    /// The object members as values, keyed by member name.
    ///
    /// Members share their keys and nodes with this value, nothing is copied.
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value, or an error if the value is not an object.
    pub fn as_object(&self) -> Result<AHashMap<Arc<str>, Value>, Error> {
        match self.node().map_err(Clone::clone)? {
            Node::Object(members) => Ok(members
                .iter()
                .map(|(key, value)| (Arc::clone(key), self.derive(value)))
                .collect()),
            node => Err(Error::projection(
                "Object",
                format!("value is not an object, got {}", node.type_name()),
            )),
        }
    }
}
