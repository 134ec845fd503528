mod number;

use std::{fmt, sync::Arc};

pub use number::Number;

/// An immutable JSON tree node.
///
/// Strings, arrays and objects live behind reference counts, so cloning a node never copies
/// its contents and a subtree can be handed out without borrowing its parent. Object members
/// are kept sorted by key, so lookups are binary searches and rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(Arc<str>),
    Array(Arc<[Node]>),
    Object(Arc<[(Arc<str>, Node)]>),
}

const _: () = const {
    assert!(std::mem::size_of::<Node>() <= 24);
};

impl Node {
    /// Build an object node. Later duplicates of a key replace earlier ones.
    pub fn object<K, I>(members: I) -> Node
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let mut entries: Vec<(Arc<str>, Node)> = members
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        // Stable sort keeps insertion order among equal keys, so the last one wins below
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        let mut deduplicated: Vec<(Arc<str>, Node)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match deduplicated.last_mut() {
                Some((last, slot)) if *last == key => *slot = value,
                _ => deduplicated.push((key, value)),
            }
        }
        Node::Object(deduplicated.into())
    }

    pub fn array<I>(items: I) -> Node
    where
        I: IntoIterator<Item = Node>,
    {
        Node::Array(items.into_iter().collect())
    }

    /// JSON type name of this node.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Look up an object member. Returns `None` for missing keys and for non-object nodes.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<&Node> {
        if let Node::Object(members) = self {
            members
                .binary_search_by(|(k, _)| k.as_ref().cmp(key))
                .ok()
                .map(|idx| &members[idx].1)
        } else {
            None
        }
    }

    /// Look up an array element. Returns `None` when out of bounds and for non-array nodes.
    #[must_use]
    pub fn element(&self, idx: usize) -> Option<&Node> {
        if let Node::Array(items) = self {
            items.get(idx)
        } else {
            None
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Node::Number(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value.into())
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::Number(value.into())
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value.into())
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.into())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value.into())
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(value.into())
    }
}

/// Compact JSON text.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
