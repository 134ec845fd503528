//! Errors produced while decoding, navigating, coercing or rendering JSON.
use std::{borrow::Cow, error, fmt, sync::Arc};

/// A failure captured at its origin.
///
/// Cloning is cheap and keeps pointing at the same underlying error, which is how a failed
/// [`Value`](crate::Value) hands its error to every value derived from it.
#[derive(Clone)]
pub struct Error {
    repr: Arc<ErrorRepr>,
}

struct ErrorRepr {
    kind: ErrorKind,
    operation: Cow<'static, str>,
    message: String,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed or empty input, or an input that could not be turned into JSON.
    Decode,
    /// Missing key, bad or out-of-bounds index, or a step into a value that has no children.
    Navigation,
    /// The value cannot be converted to the requested scalar type.
    Coercion,
    /// The value is not an array or object where one is required.
    Projection,
    /// The value could not be rendered as JSON text.
    Encode,
    /// The value could not be bound to a typed destination.
    Binding,
    /// Created explicitly by the caller.
    Custom,
}

impl Error {
    pub(crate) fn new(
        kind: ErrorKind,
        operation: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Error {
        Error {
            repr: Arc::new(ErrorRepr {
                kind,
                operation: operation.into(),
                message: message.into(),
                source: None,
            }),
        }
    }

    pub(crate) fn with_source(
        kind: ErrorKind,
        operation: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        source: impl Into<Box<dyn error::Error + Send + Sync>>,
    ) -> Error {
        Error {
            repr: Arc::new(ErrorRepr {
                kind,
                operation: operation.into(),
                message: message.into(),
                source: Some(source.into()),
            }),
        }
    }

    pub(crate) fn decode(operation: &'static str, message: &'static str) -> Error {
        tracing::debug!(operation, reason = message, "Failed to decode input");
        Error::new(ErrorKind::Decode, operation, message)
    }

    pub(crate) fn navigation(position: usize, message: String) -> Error {
        tracing::trace!(operation = "Get", position, detail = %message, "Navigation failed");
        Error::new(ErrorKind::Navigation, "Get", message)
    }

    pub(crate) fn coercion(operation: &'static str, message: String) -> Error {
        tracing::trace!(operation, detail = %message, "Coercion failed");
        Error::new(ErrorKind::Coercion, operation, message)
    }

    pub(crate) fn projection(operation: &'static str, message: String) -> Error {
        tracing::trace!(operation, detail = %message, "Projection failed");
        Error::new(ErrorKind::Projection, operation, message)
    }

    pub(crate) fn serde(kind: ErrorKind, operation: &'static str, error: serde_json::Error) -> Error {
        tracing::debug!(operation, ?kind, %error, "serde_json failed");
        Error::with_source(kind, operation, error.to_string(), error)
    }

    /// Wrap an already captured error under a new operation.
    pub(crate) fn wrapped(kind: ErrorKind, operation: &'static str, inner: &Error) -> Error {
        tracing::debug!(operation, ?kind, error = %inner, "Wrapping a propagated error");
        Error::with_source(kind, operation, inner.to_string(), inner.clone())
    }

    /// Create an error with an arbitrary operation tag.
    #[must_use]
    pub fn custom(operation: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Error {
        Error::new(ErrorKind::Custom, operation, message)
    }

    /// Broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.repr.kind
    }

    /// Name of the operation that produced this error, e.g. `"Get"` or `"Int"`.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.repr.operation
    }

    /// Descriptive message without the operation tag.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.repr.message
    }

    /// Whether both handles point at the very same captured error.
    #[must_use]
    pub fn same_as(&self, other: &Error) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
            || (self.repr.kind == other.repr.kind
                && self.repr.operation == other.repr.operation
                && self.repr.message == other.repr.message)
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.repr.operation, self.repr.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.repr.kind)
            .field("operation", &self.repr.operation)
            .field("message", &self.repr.message)
            .finish_non_exhaustive()
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.repr
            .source
            .as_ref()
            .map(|source| &**source as &(dyn error::Error + 'static))
    }
}
