use std::{borrow::Cow, fmt};

/// A single step of a navigation path.
///
/// Strings select object members, everything else selects array elements. A string made of
/// decimal digits may also index an array.
#[derive(Debug, PartialEq, Clone)]
pub enum Segment<'a> {
    /// A string key, e.g. `"address"`.
    Key(Cow<'a, str>),
    /// A native integer index. Negative values are never valid indices.
    Index(i64),
    /// A floating-point index, truncated toward zero before use.
    Number(f64),
}

impl Segment<'_> {
    /// Name of the segment's type as it appears in error messages.
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Segment::Key(_) => "string",
            Segment::Index(_) => "integer",
            Segment::Number(_) => "number",
        }
    }

    /// Convert the segment into an array index.
    pub(crate) fn to_index(&self, string_indices: bool) -> Result<usize, &'static str> {
        match self {
            Segment::Key(key) => {
                if !string_indices {
                    return Err("string keys are not accepted as array indices");
                }
                if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
                    return Err("string must contain only decimal digits");
                }
                key.parse().map_err(|_| "index does not fit into usize")
            }
            Segment::Index(idx) => usize::try_from(*idx).map_err(|_| "index must not be negative"),
            Segment::Number(num) => {
                if !num.is_finite() {
                    return Err("index must be finite");
                }
                let truncated = num.trunc();
                if truncated < 0.0 {
                    return Err("index must not be negative");
                }
                // NOTE: Saturates for values beyond `usize::MAX`, which are out of bounds anyway
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let index = truncated as usize;
                Ok(index)
            }
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key:?}"),
            Segment::Index(idx) => write!(f, "{idx}"),
            Segment::Number(num) => write!(f, "{num}"),
        }
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(value: &'a str) -> Self {
        Segment::Key(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Segment<'a> {
    fn from(value: &'a String) -> Self {
        Segment::Key(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Segment<'_> {
    fn from(value: String) -> Self {
        Segment::Key(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Segment<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Segment::Key(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Segment<'_> {
                fn from(value: $ty) -> Self {
                    Segment::Index(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Segment<'_> {
    fn from(value: usize) -> Self {
        // Larger values can't address any real array; keep them out of bounds
        Segment::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u64> for Segment<'_> {
    fn from(value: u64) -> Self {
        Segment::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Segment<'_> {
    fn from(value: f64) -> Self {
        Segment::Number(value)
    }
}

impl<'a, 'b> From<&'b Segment<'a>> for Segment<'a> {
    fn from(value: &'b Segment<'a>) -> Self {
        value.clone()
    }
}

/// Build a list of path segments out of values of different types.
///
/// ```rust
/// use jsonaccess::path;
///
/// let value = jsonaccess::parse(r#"{"scores": [95, 87, 92]}"#);
/// assert_eq!(value.get(path!["scores", 1]).as_i64(), Ok(87));
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        [$($crate::Segment::from($segment)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::Segment;
    use test_case::test_case;

    #[test_case(Segment::from("0"), Ok(0); "zero string")]
    #[test_case(Segment::from("12"), Ok(12); "digits")]
    #[test_case(Segment::from("007"), Ok(7); "leading zeros")]
    #[test_case(Segment::from(""), Err("string must contain only decimal digits"); "empty string")]
    #[test_case(Segment::from("-1"), Err("string must contain only decimal digits"); "negative string")]
    #[test_case(Segment::from("+1"), Err("string must contain only decimal digits"); "plus sign")]
    #[test_case(Segment::from("1.5"), Err("string must contain only decimal digits"); "fractional string")]
    #[test_case(Segment::from(3), Ok(3); "integer")]
    #[test_case(Segment::from(-1), Err("index must not be negative"); "negative integer")]
    #[test_case(Segment::from(2.9), Ok(2); "float truncates")]
    #[test_case(Segment::from(-0.5), Ok(0); "small negative float truncates to zero")]
    #[test_case(Segment::from(-1.5), Err("index must not be negative"); "negative float")]
    #[test_case(Segment::from(f64::NAN), Err("index must be finite"); "nan")]
    fn to_index(segment: Segment<'_>, expected: Result<usize, &'static str>) {
        assert_eq!(segment.to_index(true), expected);
    }

    #[test]
    fn string_indices_can_be_disabled() {
        assert_eq!(
            Segment::from("1").to_index(false),
            Err("string keys are not accepted as array indices")
        );
        assert_eq!(Segment::from(1).to_index(false), Ok(1));
    }

    #[test]
    fn display() {
        assert_eq!(Segment::from("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Segment::from(-4).to_string(), "-4");
        assert_eq!(Segment::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn macro_mixes_types() {
        let path = path!["a", 1, 2.0, String::from("b")];
        assert_eq!(path.len(), 4);
        assert_eq!(path[1], Segment::Index(1));
        assert_eq!(path[3], Segment::from("b"));
    }
}
