use std::borrow::Cow;

use crate::{Error, Node, Options, Segment};

/// A JSON node or the error that prevented obtaining it.
///
/// Every accessor returns a new `Value` instead of failing immediately. Once a value is in the
/// failed state, everything derived from it carries the very same error, so a chain of
/// accessors needs a single check at the end. Derived values share the underlying tree with
/// the value they came from, and they don't borrow it, so a chain can be stored as is.
///
/// ```rust
/// let value = jsonaccess::parse(r#"{"address": {"city": "New York"}}"#);
///
/// assert_eq!(value.get(["address", "city"]).as_string_or("Unknown"), "New York");
/// assert_eq!(value.get(["address", "zip"]).as_string_or("Unknown"), "Unknown");
///
/// let city = value.get(["address"]).get(["city"]);
/// assert_eq!(city.as_string_or(""), "New York");
///
/// let error = value.get(["address", "zip", "code"]).error().cloned().expect("Missing key");
/// assert_eq!(error.to_string(), r#"Get: key "zip" not found at position 1"#);
/// ```
#[derive(Debug, Clone)]
pub struct Value {
    inner: Result<Node, Error>,
    options: Options,
}

impl Value {
    /// Wrap a node.
    #[must_use]
    pub fn wrap(node: Node) -> Self {
        Value {
            inner: Ok(node),
            options: Options::default(),
        }
    }

    /// Create a failed value with the given operation tag and message.
    #[must_use]
    pub fn fail(operation: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Value::from_error(Error::custom(operation, message))
    }

    /// Create a failed value out of an arbitrary error.
    #[must_use]
    pub fn invalid(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        let source = error.into();
        Value::from_error(Error::with_source(
            crate::ErrorKind::Custom,
            "Invalid",
            source.to_string(),
            source,
        ))
    }

    /// Create a failed value carrying `error`.
    #[must_use]
    pub fn from_error(error: Error) -> Self {
        Value {
            inner: Err(error),
            options: Options::default(),
        }
    }

    pub(crate) fn from_result(result: Result<Node, Error>, options: Options) -> Self {
        Value {
            inner: result,
            options,
        }
    }

    /// Replace the options of this value. Values derived from it inherit them.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Options this value and everything derived from it use.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// A value holding `node` that shares options with `self`.
    pub(crate) fn derive(&self, node: &Node) -> Value {
        Value {
            inner: Ok(node.clone()),
            options: self.options,
        }
    }

    /// A failed value that shares options with `self`.
    pub(crate) fn derive_error(&self, error: Error) -> Value {
        Value {
            inner: Err(error),
            options: self.options,
        }
    }

    pub(crate) fn node(&self) -> Result<&Node, &Error> {
        self.inner.as_ref()
    }

    /// Whether the value holds a node rather than an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.inner.is_ok()
    }

    /// The carried error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.inner.as_ref().err()
    }

    /// The wrapped node, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&Node> {
        self.node().ok()
    }

    /// Consume the value and return either the node or the error.
    ///
    /// # Errors
    ///
    /// Returns the carried error if the value is in the failed state.
    pub fn into_result(self) -> Result<Node, Error> {
        self.inner
    }

    /// JSON type name of the wrapped node, or `"error"` for a failed value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self.node() {
            Ok(node) => node.type_name(),
            Err(_) => "error",
        }
    }

    /// Whether the value holds JSON `null`. A failed value is never null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.node(), Ok(Node::Null))
    }

    /// Navigate through object keys and array indices.
    ///
    /// A failed value is returned as is, and an empty path returns the value itself. Otherwise
    /// the first segment that can't be followed determines the error.
    ///
    /// ```rust
    /// use jsonaccess::path;
    ///
    /// let value = jsonaccess::parse(r#"{"users": [{"name": "Alice"}]}"#);
    /// assert_eq!(value.get(path!["users", 0, "name"]).as_string_or(""), "Alice");
    /// assert!(!value.get(path!["users", 1, "name"]).is_valid());
    /// ```
    #[must_use]
    pub fn get<'k, P, S>(&self, path: P) -> Value
    where
        P: IntoIterator<Item = S>,
        S: Into<Segment<'k>>,
    {
        match self.lookup(path) {
            Ok(node) => self.derive(node),
            Err(error) => self.derive_error(error),
        }
    }

    /// The node at `path`, or `default` if it can't be reached.
    #[must_use]
    pub fn get_or<'k, P, S>(&self, default: Node, path: P) -> Node
    where
        P: IntoIterator<Item = S>,
        S: Into<Segment<'k>>,
    {
        self.lookup(path).map_or(default, Node::clone)
    }

    /// Whether `path` can be followed to the end.
    #[must_use]
    pub fn has<'k, P, S>(&self, path: P) -> bool
    where
        P: IntoIterator<Item = S>,
        S: Into<Segment<'k>>,
    {
        self.lookup(path).is_ok()
    }

    fn lookup<'k, P, S>(&self, path: P) -> Result<&Node, Error>
    where
        P: IntoIterator<Item = S>,
        S: Into<Segment<'k>>,
    {
        let mut current = self.node().map_err(Clone::clone)?;
        for (position, segment) in path.into_iter().enumerate() {
            let segment: Segment<'k> = segment.into();
            current = step(current, &segment, position, self.options)?;
        }
        Ok(current)
    }
}

fn step<'n>(
    current: &'n Node,
    segment: &Segment<'_>,
    position: usize,
    options: Options,
) -> Result<&'n Node, Error> {
    let fail = |message: String| Error::navigation(position, message);
    match current {
        Node::Null => Err(fail(format!(
            "cannot access key {segment} on null value at position {position}"
        ))),
        Node::Object(_) => {
            let Segment::Key(key) = segment else {
                return Err(fail(format!(
                    "key must be string for object access, got {} at position {position}",
                    segment.type_name()
                )));
            };
            current
                .member(key)
                .ok_or_else(|| fail(format!("key {key:?} not found at position {position}")))
        }
        Node::Array(items) => {
            let idx = segment
                .to_index(options.allows_string_indices())
                .map_err(|reason| {
                    fail(format!(
                        "invalid array index {segment} at position {position}: {reason}"
                    ))
                })?;
            items.get(idx).ok_or_else(|| {
                fail(format!(
                    "array index {idx} out of bounds (length: {}) at position {position}",
                    items.len()
                ))
            })
        }
        Node::Bool(_) | Node::Number(_) | Node::String(_) => Err(fail(format!(
            "cannot access key {segment} on {} value at position {position}",
            current.type_name()
        ))),
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::wrap(node)
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        Value::wrap(node.clone())
    }
}

impl From<Error> for Value {
    fn from(error: Error) -> Self {
        Value::from_error(error)
    }
}
