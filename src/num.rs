//! Numeric bound, addition, and the int/float union
//!
//! Everything in this crate is generic over [`Numeric`], implemented for
//! the primitive integer and float types. Callers whose sequences mix
//! integers and floats at runtime use [`Number`], which promotes mixed
//! operands to float.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Common bound for values the crate's operations accept.
///
/// Covers the arithmetic the operations need (`+`, `-`, `*`) plus ordering
/// for the pipeline's threshold test. [`TWO`](Self::TWO) is the doubling
/// factor applied by the pipeline transform.
pub trait Numeric:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The value `2` in this type.
    const TWO: Self;
}

impl Numeric for i32 {
    const TWO: Self = 2;
}

impl Numeric for i64 {
    const TWO: Self = 2;
}

impl Numeric for f32 {
    const TWO: Self = 2.0;
}

impl Numeric for f64 {
    const TWO: Self = 2.0;
}

impl Numeric for Number {
    const TWO: Self = Number::Int(2);
}

/// Add two values.
///
/// Plain `a + b` with the type's own addition semantics: exact for
/// integers, IEEE 754 rounding for floats, promotion for mixed [`Number`]
/// operands. No side effects.
pub fn sum<T: Numeric>(a: T, b: T) -> T {
    a + b
}

/// A numeric value that is either an integer or a float.
///
/// Arithmetic between two `Int`s stays integral; any operation touching a
/// `Float` yields a `Float`. An `Int` operation that overflows `i64` also
/// falls back to `Float`. Comparison and equality work across variants by
/// numeric value, so `Int(2) == Float(2.0)`.
///
/// Mixed comparisons and promoted arithmetic go through `f64`, which loses
/// integer precision above 2^53.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
}

impl Number {
    /// Whether this is the integer variant
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Whether this is the float variant
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Widen to `f64`
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(v) => Number::Int(v),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_sub(b) {
                Some(v) => Number::Int(v),
                None => Number::Float(a as f64 - b as f64),
            },
            (a, b) => Number::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_mul(b) {
                Some(v) => Number::Int(v),
                None => Number::Float(a as f64 * b as f64),
            },
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// The input could not be read as a numeric value.
///
/// This is the crate's only runtime type error: generic call sites reject
/// unsupported operands at compile time, so the one place a non-numeric
/// value can still appear is parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a numeric value: `{input}`")]
pub struct ParseNumberError {
    /// The rejected input, verbatim
    pub input: String,
}

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Parse an integer literal first so that `"2"` stays `Int(2)`;
    /// anything `i64` rejects is retried as a float.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Number::Int(v));
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Ok(Number::Float(v));
        }
        Err(ParseNumberError {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_ints() {
        assert_eq!(sum(2, 3), 5);
        assert_eq!(sum(-4i64, 4), 0);
    }

    #[test]
    fn test_sum_floats() {
        assert_eq!(sum(0.1f64, 0.2), 0.1 + 0.2);
    }

    #[test]
    fn test_sum_mixed_via_number() {
        assert_eq!(
            sum(Number::Int(2), Number::Float(0.5)),
            Number::Float(2.5)
        );
    }

    #[test]
    fn test_int_arithmetic_stays_int() {
        let result = Number::Int(3) * Number::Int(4);
        assert!(result.is_int());
        assert_eq!(result, Number::Int(12));
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        assert_eq!(Number::Int(1) + Number::Float(2.5), Number::Float(3.5));
        assert_eq!(Number::Float(5.0) - Number::Int(2), Number::Float(3.0));
        assert!((Number::Int(3) * Number::Float(0.5)).is_float());
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        let result = Number::Int(i64::MAX) + Number::Int(1);
        assert!(result.is_float());
        assert_eq!(result.as_f64(), i64::MAX as f64 + 1.0);
    }

    #[test]
    fn test_equality_across_variants() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Int(2), Number::Float(2.5));
    }

    #[test]
    fn test_ordering_across_variants() {
        assert!(Number::Int(2) < Number::Float(2.5));
        assert!(Number::Float(3.5) > Number::Int(3));
        assert!(Number::Float(f64::NAN)
            .partial_cmp(&Number::Int(0))
            .is_none());
    }

    #[test]
    fn test_parse_int_literal() {
        let n: Number = "42".parse().expect("should parse");
        assert_eq!(n, Number::Int(42));
        assert!(n.is_int());
    }

    #[test]
    fn test_parse_float_literal() {
        let n: Number = " -2.5 ".parse().expect("should parse");
        assert_eq!(n, Number::Float(-2.5));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = "seven".parse::<Number>().unwrap_err();
        assert_eq!(err.input, "seven");
        assert!(err.to_string().contains("seven"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(-7).to_string(), "-7");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_default_is_int_zero() {
        assert_eq!(Number::default(), Number::Int(0));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// sum(a, b) == sum(b, a) for integers
            #[test]
            fn prop_sum_commutative_int(a in any::<i64>(), b in any::<i64>()) {
                let (a, b) = (Number::Int(a), Number::Int(b));
                prop_assert_eq!(sum(a, b), sum(b, a));
            }

            /// sum(a, b) == sum(b, a) for finite floats
            #[test]
            fn prop_sum_commutative_float(a in -1e12f64..1e12, b in -1e12f64..1e12) {
                prop_assert_eq!(sum(a, b), sum(b, a));
            }

            /// sum(a, 0) == a
            #[test]
            fn prop_sum_identity(a in any::<i64>()) {
                prop_assert_eq!(sum(Number::Int(a), Number::Int(0)), Number::Int(a));
            }

            /// Parsing a displayed value round-trips
            #[test]
            fn prop_parse_display_roundtrip(v in any::<i64>()) {
                let n = Number::Int(v);
                let parsed: Number = n.to_string().parse().expect("display output should parse");
                prop_assert_eq!(parsed, n);
            }
        }
    }
}
