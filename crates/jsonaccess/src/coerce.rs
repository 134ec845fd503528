//! Conversions of a terminal node into scalar types.
//!
//! Every conversion treats `null` as the zero value of the target type and accepts strings
//! holding a literal of that type. Failed values propagate their error unchanged.
use crate::{Error, Node, Value};

impl Value {
    /// The value as a string.
    ///
    /// Strings are returned as is, `null` becomes `""` and other values are rendered as text.
    ///
    /// # Errors
    ///
    /// Only returns the carried error of a failed value.
    pub fn as_string(&self) -> Result<String, Error> {
        match self.node().map_err(Clone::clone)? {
            Node::String(s) => Ok(s.to_string()),
            Node::Null => Ok(String::new()),
            Node::Bool(b) => Ok(b.to_string()),
            Node::Number(n) => Ok(n.to_string()),
            node @ (Node::Array(_) | Node::Object(_)) => Ok(node.to_string()),
        }
    }

    /// The value as a string, or `default` if it can't be obtained.
    ///
    /// With default [`Options`](crate::Options) an empty string also yields `default`, so a
    /// present but empty string can't be told apart from a missing one here. Use
    /// [`Options::empty_string_as_default`](crate::Options::empty_string_as_default) to turn
    /// this off.
    #[must_use]
    pub fn as_string_or(&self, default: &str) -> String {
        match self.as_string() {
            Ok(s) if s.is_empty() && self.options().uses_empty_string_as_default() => {
                default.to_string()
            }
            Ok(s) => s,
            Err(_) => default.to_string(),
        }
    }

    /// The value as an integer.
    ///
    /// Numbers are truncated toward zero, `null` becomes `0` and strings are parsed as
    /// base-10 integer literals.
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value, or an error if the value has another type,
    /// the string is not an integer literal, or the number does not fit into `i64`.
    pub fn as_i64(&self) -> Result<i64, Error> {
        match self.node().map_err(Clone::clone)? {
            Node::Number(n) => n.truncate().ok_or_else(|| {
                Error::coercion("Int", format!("number {n} does not fit into int"))
            }),
            Node::String(s) => s.parse().map_err(|_| {
                Error::coercion("Int", format!("cannot convert string {s:?} to int"))
            }),
            Node::Null => Ok(0),
            node => Err(Error::coercion(
                "Int",
                format!("cannot convert {} to int", node.type_name()),
            )),
        }
    }

    /// The value as an integer, or `default` if it can't be obtained.
    #[must_use]
    pub fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    /// The value as a floating-point number.
    ///
    /// Numbers are returned as is, `null` becomes `0.0` and strings are parsed as decimal
    /// literals.
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value, or an error if the value has another type
    /// or the string is not a decimal literal.
    pub fn as_f64(&self) -> Result<f64, Error> {
        match self.node().map_err(Clone::clone)? {
            Node::Number(n) => Ok(n.as_f64()),
            Node::String(s) => s.parse().map_err(|_| {
                Error::coercion("Float64", format!("cannot convert string {s:?} to float64"))
            }),
            Node::Null => Ok(0.0),
            node => Err(Error::coercion(
                "Float64",
                format!("cannot convert {} to float64", node.type_name()),
            )),
        }
    }

    /// The value as a floating-point number, or `default` if it can't be obtained.
    #[must_use]
    pub fn as_f64_or(&self, default: f64) -> f64 {
        self.as_f64().unwrap_or(default)
    }

    /// The value as a boolean.
    ///
    /// Booleans are returned as is, numbers are `true` when non-zero, `null` becomes `false`
    /// and strings are parsed with [`parse_bool`].
    ///
    /// # Errors
    ///
    /// Returns the carried error of a failed value, or an error if the value is an array, an
    /// object, or a string that is not a boolean literal.
    pub fn as_bool(&self) -> Result<bool, Error> {
        match self.node().map_err(Clone::clone)? {
            Node::Bool(b) => Ok(*b),
            Node::String(s) => parse_bool(s).ok_or_else(|| {
                Error::coercion("Bool", format!("cannot convert string {s:?} to bool"))
            }),
            Node::Number(n) => Ok(!n.is_zero()),
            Node::Null => Ok(false),
            node => Err(Error::coercion(
                "Bool",
                format!("cannot convert {} to bool", node.type_name()),
            )),
        }
    }

    /// The value as a boolean, or `default` if it can't be obtained.
    #[must_use]
    pub fn as_bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`, `false`, `False`.
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
