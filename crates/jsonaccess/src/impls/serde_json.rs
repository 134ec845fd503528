use serde_json::Value;

use crate::{error::ErrorKind, Error, Node, Number};

/// Decode JSON text into a node tree.
///
/// Trailing characters after the top-level value are rejected.
pub(crate) fn decode(bytes: &[u8], operation: &'static str) -> Result<Node, Error> {
    serde_json::from_slice(bytes).map_err(|error| Error::serde(ErrorKind::Decode, operation, error))
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(num) => Node::Number(Number::from(&num)),
            Value::String(s) => Node::String(s.into()),
            Value::Array(old) => Node::array(old.into_iter().map(Node::from)),
            Value::Object(old) => Node::object(old.into_iter().map(|(k, v)| (k, Node::from(v)))),
        }
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(num) => Node::Number(Number::from(num)),
            Value::String(s) => Node::String(s.as_str().into()),
            Value::Array(old) => Node::array(old.iter().map(Node::from)),
            Value::Object(old) => {
                Node::object(old.iter().map(|(k, v)| (k.as_str(), Node::from(v))))
            }
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(number) => match number.canonical() {
                Number::PositiveInteger(u) => Value::from(u),
                Number::NegativeInteger(i) => Value::from(i),
                // Non-finite floats have no JSON representation and become `null`
                Number::Float(f) => Value::from(f),
            },
            Node::String(s) => Value::String(s.to_string()),
            Node::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Node::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.to_string(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<Value> for Node {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<Node> for Value {
    fn eq(&self, other: &Node) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &Node) -> bool {
    match (lhs, rhs) {
        (Value::Null, Node::Null) => true,
        (Value::Bool(l), Node::Bool(r)) => l == r,
        (Value::Number(l), Node::Number(r)) => Number::from(l) == *r,
        (Value::String(l), Node::String(r)) => l.as_bytes() == r.as_bytes(),
        (Value::Array(l), Node::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), Node::Object(r)) => {
            // `r` has unique keys, so equal lengths plus a match for every `l` entry is enough
            l.len() == r.len()
                && l.iter()
                    .all(|(key, lv)| rhs.member(key).is_some_and(|rv| eq(lv, rv)))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::decode;
    use crate::{Node, Number};

    #[test_case(json!(null), Node::Null; "null")]
    #[test_case(json!(true), Node::Bool(true); "bool")]
    #[test_case(json!(42u64), Node::Number(Number::PositiveInteger(42)); "positive number")]
    #[test_case(json!(-42), Node::Number(Number::NegativeInteger(-42)); "negative number")]
    #[test_case(json!(2.5), Node::Number(Number::Float(2.5)); "float number")]
    #[test_case(json!("hello"), Node::from("hello"); "string")]
    #[test_case(
        json!([1, 2, 3]),
        Node::array([Node::from(1u64), Node::from(2u64), Node::from(3u64)]);
        "array"
    )]
    #[test_case(
        json!({"b": "test", "a": 1, "c": true}),
        Node::object([
            ("a", Node::from(1u64)),
            ("b", Node::from("test")),
            ("c", Node::Bool(true)),
        ]);
        "object"
    )]
    fn conversion(value: Value, expected: Node) {
        assert_eq!(Node::from(&value), expected);
        assert_eq!(Value::from(&expected), value);
        assert_eq!(Node::from(value), expected);
    }

    #[test_case(json!(null), Node::Bool(true); "null != bool")]
    #[test_case(json!(true), Node::Bool(false); "bool not equal")]
    #[test_case(json!(42), Node::Number(Number::NegativeInteger(-42)); "positive vs negative")]
    #[test_case(json!(2.5), Node::Number(Number::Float(2.75)); "different floats")]
    #[test_case(json!("hello"), Node::from("world"); "different strings")]
    #[test_case(json!([1, 2]), Node::array([Node::from(1u64)]); "different lengths")]
    #[test_case(json!({"a": 1}), Node::object([("b", Node::from(1u64))]); "different keys")]
    fn comparison_neq(value: Value, node: Node) {
        assert_ne!(value, node);
        assert_ne!(node, value);
    }

    #[test]
    fn comparison_eq_ignores_member_order() {
        let value = json!({"b": [1, {"c": null}], "a": 1.0});
        let node = Node::object([
            ("a", Node::from(1u64)),
            ("b", Node::array([Node::from(1u64), Node::object([("c", Node::Null)])])),
        ]);
        assert_eq!(value, node);
        assert_eq!(node, value);
    }

    #[test_case(b"" ; "empty")]
    #[test_case(b"{invalid}" ; "invalid")]
    #[test_case(b"[1, 2" ; "truncated")]
    #[test_case(b"{} []" ; "trailing")]
    fn decode_errors(input: &[u8]) {
        let error = decode(input, "Parse").expect_err("Should fail");
        assert_eq!(error.operation(), "Parse");
    }
}
