use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// 2^64, the smallest float that no longer fits into `u64`.
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;
/// -2^63, the smallest float that fits into `i64`.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;

/// A JSON number.
///
/// Integers that fit into 64 bits are kept exactly, everything else is stored as `f64`.
/// Integral floats are stored as integers, so `1` and `1.0` decode to the same number and
/// callers never need to care which literal the input used.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    PositiveInteger(u64),
    NegativeInteger(i64),
    Float(f64),
}

impl Number {
    /// The value as a single floating-point number. Large integers may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::PositiveInteger(u) => u as f64,
            Number::NegativeInteger(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// The value truncated toward zero, if it fits into `i64`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn truncate(self) -> Option<i64> {
        match self {
            Number::PositiveInteger(u) => i64::try_from(u).ok(),
            Number::NegativeInteger(i) => Some(i),
            Number::Float(f) => {
                let truncated = f.trunc();
                // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Some(truncated as i64)
                } else {
                    None
                }
            }
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Number::PositiveInteger(u) => u == 0,
            Number::NegativeInteger(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// The same number in its preferred representation.
    ///
    /// Non-negative integers are `PositiveInteger`, integral floats within 64-bit range are
    /// integers and only the remaining values are `Float`.
    pub(crate) fn canonical(self) -> Number {
        match self {
            Number::PositiveInteger(_) => self,
            Number::NegativeInteger(i) => Number::from(i),
            Number::Float(f) => Number::from(f),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(num: &serde_json::Number) -> Self {
        if let Some(u) = num.as_u64() {
            Number::PositiveInteger(u)
        } else if let Some(i) = num.as_i64() {
            Number::NegativeInteger(i)
        } else {
            // Without `arbitrary_precision` every number is representable as `f64`
            Number::from(num.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PositiveInteger(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(u) => Number::PositiveInteger(u),
            Err(_) => Number::NegativeInteger(value),
        }
    }
}

/// Integral values within 64-bit range become integers, `-0.0` included.
impl From<f64> for Number {
    #[allow(clippy::float_cmp)]
    fn from(value: f64) -> Self {
        if value.fract() != 0.0 {
            // Also covers NaN and infinities
            return Number::Float(value);
        }
        if (0.0..U64_UPPER).contains(&value) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let integer = value as u64;
            Number::PositiveInteger(integer)
        } else if (I64_LOWER..0.0).contains(&value) {
            #[allow(clippy::cast_possible_truncation)]
            let integer = value as i64;
            Number::NegativeInteger(integer)
        } else {
            Number::Float(value)
        }
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self.canonical(), other.canonical()) {
            (Number::PositiveInteger(a), Number::PositiveInteger(b)) => a == b,
            (Number::NegativeInteger(a), Number::NegativeInteger(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        match self.canonical() {
            Number::PositiveInteger(u) => {
                0u8.hash(h);
                u.hash(h);
            }
            Number::NegativeInteger(i) => {
                1u8.hash(h);
                i.hash(h);
            }
            Number::Float(f) => {
                2u8.hash(h);
                let bits = if f.is_nan() { f64::NAN.to_bits() } else { f.to_bits() };
                bits.hash(h);
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            Number::PositiveInteger(u) => write!(f, "{u}"),
            Number::NegativeInteger(i) => write!(f, "{i}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}
