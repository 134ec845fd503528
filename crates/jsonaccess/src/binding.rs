//! Projection of values into typed destinations.
use std::any::{Any, TypeId};

use serde::de::DeserializeOwned;

use crate::{error::ErrorKind, impls::decode, input::IntoDocument, Error, Node, Value};

impl Value {
    /// Bind the wrapped node to a typed destination.
    ///
    /// Destinations that already match the node (`Node` itself, `String` for strings, `bool`
    /// for booleans) are filled directly. Anything else goes through JSON text, so any type
    /// implementing `Deserialize` works.
    ///
    /// ```rust
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Address {
    ///     city: String,
    /// }
    ///
    /// let value = jsonaccess::parse(r#"{"address": {"city": "Paris", "zip": "75001"}}"#);
    /// let address: Address = value.get(["address"]).to().expect("Valid address");
    /// assert_eq!(address.city, "Paris");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error wrapping the carried error of a failed value, or an error if the node
    /// doesn't fit the destination type.
    pub fn to<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned + 'static,
    {
        let node = self
            .node()
            .map_err(|error| Error::wrapped(ErrorKind::Binding, "To", error))?;
        bind(node, "To")
    }

    /// Like [`Value::to`], but panics on error.
    ///
    /// # Panics
    ///
    /// Panics if the value is failed or doesn't fit the destination type.
    #[must_use]
    pub fn must_to<T>(&self) -> T
    where
        T: DeserializeOwned + 'static,
    {
        match self.to() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// A copy of this value that shares no nodes with it.
    ///
    /// The copy is produced by rendering the node as JSON text and decoding that text again.
    /// A failed value is returned with the same error.
    #[must_use]
    pub fn deep_clone(&self) -> Value {
        let result = self.node().map_err(Clone::clone).and_then(|node| {
            let bytes = serde_json::to_vec(node)
                .map_err(|error| Error::serde(ErrorKind::Encode, "Clone", error))?;
            decode(&bytes, "Clone")
        });
        Value::from_result(result, self.options())
    }
}

/// Decode the input straight into a typed destination.
///
/// ```rust
/// let scores: Vec<u32> = jsonaccess::parse_into("[95, 87, 92]").expect("Valid scores");
/// assert_eq!(scores, [95, 87, 92]);
/// ```
///
/// # Errors
///
/// Returns an error if the input can't be decoded or doesn't fit the destination type.
pub fn parse_into<T>(input: impl IntoDocument) -> Result<T, Error>
where
    T: DeserializeOwned + 'static,
{
    let node = input
        .into_document()
        .map_err(|error| Error::wrapped(ErrorKind::Decode, "ParseInto", &error))?;
    bind(&node, "ParseInto")
}

/// Like [`parse_into`], but panics on error.
///
/// # Panics
///
/// Panics if the input can't be decoded or doesn't fit the destination type.
#[must_use]
pub fn must_parse_into<T>(input: impl IntoDocument) -> T
where
    T: DeserializeOwned + 'static,
{
    match parse_into(input) {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

fn bind<T>(node: &Node, operation: &'static str) -> Result<T, Error>
where
    T: DeserializeOwned + 'static,
{
    if let Some(value) = assign_directly(node) {
        return Ok(value);
    }
    let bytes = serde_json::to_vec(node).map_err(|error| {
        Error::with_source(
            ErrorKind::Binding,
            operation,
            format!("failed to encode data: {error}"),
            error,
        )
    })?;
    serde_json::from_slice(&bytes).map_err(|error| {
        tracing::debug!(operation, %error, "Failed to bind to destination");
        Error::with_source(
            ErrorKind::Binding,
            operation,
            format!("failed to decode into destination: {error}"),
            error,
        )
    })
}

fn assign_directly<T: 'static>(node: &Node) -> Option<T> {
    let target = TypeId::of::<T>();
    let boxed: Box<dyn Any> = match node {
        _ if target == TypeId::of::<Node>() => Box::new(node.clone()),
        Node::String(s) if target == TypeId::of::<String>() => Box::new(s.to_string()),
        Node::Bool(b) if target == TypeId::of::<bool>() => Box::new(*b),
        _ => return None,
    };
    boxed.downcast::<T>().ok().map(|value| *value)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use serde::Deserialize;
    use test_case::test_case;

    use super::{assign_directly, must_parse_into, parse_into};
    use crate::{ErrorKind, Node, Value};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Profile {
        email: String,
        #[serde(default)]
        location: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        name: String,
        age: u32,
        tags: Vec<String>,
        profile: Profile,
    }

    const USER: &str = r#"{
        "name": "John Doe",
        "age": 30,
        "tags": ["developer", "json"],
        "profile": {"email": "john@example.com"}
    }"#;

    #[test]
    fn struct_binding() {
        let user: User = crate::parse(USER).to().expect("Should bind");
        assert_eq!(
            user,
            User {
                name: "John Doe".to_string(),
                age: 30,
                tags: vec!["developer".to_string(), "json".to_string()],
                profile: Profile {
                    email: "john@example.com".to_string(),
                    location: None
                }
            }
        );
    }

    #[test]
    fn nested_binding() {
        let value = crate::parse(USER);
        let tags: Vec<String> = value.get(["tags"]).to().expect("Should bind");
        assert_eq!(tags, ["developer", "json"]);
        let profile: HashMap<String, String> = value.get(["profile"]).must_to();
        assert_eq!(profile["email"], "john@example.com");
    }

    #[test]
    fn direct_assignment() {
        let node = Node::from("x");
        assert_eq!(assign_directly::<String>(&node), Some("x".to_string()));
        assert_eq!(assign_directly::<Node>(&node), Some(node.clone()));
        assert_eq!(assign_directly::<bool>(&node), None);
        assert_eq!(assign_directly::<bool>(&Node::Bool(true)), Some(true));
        assert_eq!(assign_directly::<i64>(&Node::from(1i64)), None);
    }

    #[test_case(r#"{"name": 1}"#; "wrong field type")]
    #[test_case(r#"[1, 2]"#; "wrong shape")]
    fn binding_errors(input: &str) {
        let error = crate::parse(input).to::<User>().expect_err("Should fail");
        assert_eq!(error.kind(), ErrorKind::Binding);
        assert_eq!(error.operation(), "To");
        assert!(error.message().starts_with("failed to decode into destination: "));
    }

    #[test]
    fn binding_wraps_propagated_errors() {
        let value = crate::parse("{}").get(["missing"]).to::<String>().expect_err("Should fail");
        assert_eq!(value.operation(), "To");
        assert_eq!(value.to_string(), r#"To: Get: key "missing" not found at position 0"#);
    }

    #[test]
    fn parse_into_typed() {
        let user: User = parse_into(USER).expect("Should bind");
        assert_eq!(user.age, 30);
        let number: f64 = must_parse_into("2.5");
        assert!((number - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_into_errors() {
        let error = parse_into::<User>("").expect_err("Should fail");
        assert_eq!(error.to_string(), "ParseInto: Parse: empty string");
        let error = parse_into::<User>(r#"{"name": "x"}"#).expect_err("Should fail");
        assert_eq!(error.operation(), "ParseInto");
        let failed = Value::fail("Custom", "boom");
        let error = parse_into::<User>(failed).expect_err("Should fail");
        assert_eq!(error.to_string(), "ParseInto: Custom: boom");
    }

    #[test]
    fn deep_clone_shares_nothing() {
        let value = crate::parse(r#"{"a": [1, {"b": "c"}]}"#);
        let inner = value.get(["a"]);
        let copy = inner.deep_clone();
        assert_eq!(copy.raw(), inner.raw());
        let (Some(Node::Array(original)), Some(Node::Array(cloned))) = (inner.raw(), copy.raw())
        else {
            panic!("Should be arrays")
        };
        assert!(!Arc::ptr_eq(original, cloned));
    }

    #[test_case("1e2", 100; "exponent")]
    #[test_case("1.0", 1; "integral float")]
    #[test_case("100", 100; "integer")]
    fn integral_floats_bind_to_integers(input: &str, expected: u32) {
        assert_eq!(crate::parse(input).to::<u32>(), Ok(expected));
        assert_eq!(parse_into::<u32>(input), Ok(expected));
    }

    #[test]
    fn deep_clone_keeps_errors_and_options() {
        let failed = Value::fail("Custom", "boom");
        let copy = failed.deep_clone();
        assert!(copy.error().expect("Should fail").same_as(failed.error().expect("Should fail")));
        let options = crate::options().empty_string_as_default(false);
        assert_eq!(options.parse("[]").deep_clone().options(), options);
    }
}
