//! Scalar column values and the equality policy used for in-memory matching.

mod conversions;
mod drivers;

use std::hash::{Hash, Hasher};

/// A single column value as read from, or bound into, the row store.
///
/// Equality is typed: values of the same kind compare by content, an
/// `Integer` and a `Real` compare numerically, and `Null` equals `Null`.
/// Text never matches a number, so `"7"` and `7` are different values.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value
    Text(String),
    /// Blob value
    Blob(Vec<u8>),
    /// NULL value
    #[default]
    Null,
}

impl Value {
    /// Returns true if this value is NULL.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the integer value if this is an INTEGER, or a REAL without a fraction.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            Value::Real(value) => integral(*value),
            _ => None,
        }
    }

    /// Returns the numeric value if this is an INTEGER or a REAL.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(value) => Some(*value as f64),
            Value::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value if this is TEXT.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the blob value if this is BLOB.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(value) => Some(value.as_slice()),
            _ => None,
        }
    }

    /// Storage class name, as SQLite reports it from `typeof()`.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
            Value::Null => "null",
        }
    }
}

/// `Some(i)` when `r` is exactly representable as the integer `i`.
fn integral(r: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    if r.fract() == 0.0 && r >= i64::MIN as f64 && r < i64::MAX as f64 {
        Some(r as i64)
    } else {
        None
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Integer(i), Value::Real(r)) | (Value::Real(r), Value::Integer(i)) => {
                integral(*r) == Some(*i)
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Blob(a), Value::Blob(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Integer(i) => {
                state.write_u8(0);
                i.hash(state);
            }
            Value::Real(r) => match integral(*r) {
                // Keeps `Real(3.0)` and `Integer(3)` in the same bucket.
                Some(i) => {
                    state.write_u8(0);
                    i.hash(state);
                }
                None if r.is_nan() => state.write_u8(1),
                None => {
                    state.write_u8(1);
                    r.to_bits().hash(state);
                }
            },
            Value::Text(s) => {
                state.write_u8(2);
                s.hash(state);
            }
            Value::Blob(b) => {
                state.write_u8(3);
                b.hash(state);
            }
            Value::Null => state.write_u8(4),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => f.write_str(s),
            Value::Blob(b) => f.write_str(&String::from_utf8_lossy(b)),
            Value::Null => Ok(()),
        }
    }
}
