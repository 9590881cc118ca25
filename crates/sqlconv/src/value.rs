//! Scalar values and their textual and integer conversions.
//!
//! [`Value`] is an owned scalar covering the primitive kinds a driver row
//! can hand back: booleans, signed and unsigned integers of every width,
//! floats, text, and byte blobs. [`Value::to_str`] renders any of them as
//! text; [`Value::to_int64`] coerces the integer kinds to `i64`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Digits used for non-decimal integer rendering, lowercase per convention.
const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Formatting parameters for [`Value::to_str_with`].
///
/// The float bit width travels with the [`Value`] variant, so only the
/// decimal precision and the integer radix are configurable here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatSpec {
    /// Decimal places for floats; shortest round-trip rendering when `None`.
    pub precision: Option<usize>,
    /// Radix for integers, 2..=36; decimal when `None`.
    pub base: Option<u32>,
}

impl FormatSpec {
    /// Create a spec with all defaults (shortest floats, decimal integers).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            precision: None,
            base: None,
        }
    }

    /// Set the number of decimal places used for floats.
    #[must_use]
    pub const fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Set the radix used for integers (2..=36).
    #[must_use]
    pub const fn base(mut self, radix: u32) -> Self {
        self.base = Some(radix);
        self
    }
}

/// An owned scalar value, one variant per supported primitive kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// Boolean.
    Bool(bool),
    /// 8-bit signed integer.
    TinyInt(i8),
    /// 16-bit signed integer.
    SmallInt(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    BigInt(i64),
    /// 8-bit unsigned integer.
    UTinyInt(u8),
    /// 16-bit unsigned integer.
    USmallInt(u16),
    /// 32-bit unsigned integer.
    UInt(u32),
    /// 64-bit unsigned integer.
    UBigInt(u64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Owned text.
    Text(String),
    /// Raw byte blob.
    Bytes(Vec<u8>),
}

impl Value {
    /// SQL-style name of this value's kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::TinyInt(_) => "TINYINT",
            Value::SmallInt(_) => "SMALLINT",
            Value::Int(_) => "INT",
            Value::BigInt(_) => "BIGINT",
            Value::UTinyInt(_) => "TINYINT UNSIGNED",
            Value::USmallInt(_) => "SMALLINT UNSIGNED",
            Value::UInt(_) => "INT UNSIGNED",
            Value::UBigInt(_) => "BIGINT UNSIGNED",
            Value::Float(_) => "FLOAT",
            Value::Double(_) => "DOUBLE",
            Value::Text(_) => "TEXT",
            Value::Bytes(_) => "BLOB",
        }
    }

    /// True for `Value::Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for any integer kind, signed or unsigned.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::TinyInt(_)
                | Value::SmallInt(_)
                | Value::Int(_)
                | Value::BigInt(_)
                | Value::UTinyInt(_)
                | Value::USmallInt(_)
                | Value::UInt(_)
                | Value::UBigInt(_)
        )
    }

    /// Borrow the text content, if this is a `Text` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render this value as text with default formatting.
    ///
    /// Booleans become `true`/`false`, integers render in decimal, floats
    /// use the shortest representation that round-trips at the variant's
    /// bit width, text passes through, and byte blobs are read as UTF-8
    /// (lossy on invalid sequences). `Null` has no natural textual form and
    /// falls back to `"NULL"` rather than failing.
    #[must_use]
    pub fn to_str(&self) -> String {
        self.to_str_with(&FormatSpec::new())
    }

    /// Render this value as text with explicit formatting parameters.
    ///
    /// `spec.precision` applies to the float kinds, `spec.base` to the
    /// integer kinds; both are ignored for every other kind.
    #[must_use]
    pub fn to_str_with(&self, spec: &FormatSpec) -> String {
        let base = spec.base.unwrap_or(10);
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(v) => v.to_string(),
            Value::TinyInt(v) => format_signed(i64::from(*v), base),
            Value::SmallInt(v) => format_signed(i64::from(*v), base),
            Value::Int(v) => format_signed(i64::from(*v), base),
            Value::BigInt(v) => format_signed(*v, base),
            Value::UTinyInt(v) => format_unsigned(u64::from(*v), base),
            Value::USmallInt(v) => format_unsigned(u64::from(*v), base),
            Value::UInt(v) => format_unsigned(u64::from(*v), base),
            Value::UBigInt(v) => format_unsigned(*v, base),
            Value::Float(v) => match spec.precision {
                Some(p) => format!("{v:.p$}"),
                None => v.to_string(),
            },
            Value::Double(v) => match spec.precision {
                Some(p) => format!("{v:.p$}"),
                None => v.to_string(),
            },
            Value::Text(v) => v.clone(),
            Value::Bytes(v) => String::from_utf8_lossy(v).into_owned(),
        }
    }

    /// Coerce this value to a 64-bit signed integer.
    ///
    /// Signed kinds widen; unsigned kinds widen to `u64` and reinterpret as
    /// `i64` (two's complement, so a `UBigInt` above `i64::MAX` wraps
    /// negative). Every other kind is an [`Error::UnsupportedKind`].
    pub fn to_int64(&self) -> Result<i64> {
        match self {
            Value::TinyInt(v) => Ok(i64::from(*v)),
            Value::SmallInt(v) => Ok(i64::from(*v)),
            Value::Int(v) => Ok(i64::from(*v)),
            Value::BigInt(v) => Ok(*v),
            Value::UTinyInt(v) => Ok(i64::from(*v)),
            Value::USmallInt(v) => Ok(i64::from(*v)),
            Value::UInt(v) => Ok(i64::from(*v)),
            Value::UBigInt(v) => Ok(*v as i64),
            other => Err(Error::UnsupportedKind {
                op: "to_int64",
                kind: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

/// Render a signed integer in the given radix, lowercase digits.
fn format_signed(v: i64, base: u32) -> String {
    if v < 0 {
        format!("-{}", format_unsigned(v.unsigned_abs(), base))
    } else {
        format_unsigned(v as u64, base)
    }
}

/// Render an unsigned integer in the given radix, lowercase digits.
///
/// A radix outside 2..=36 falls back to decimal with a logged warning
/// rather than failing the conversion.
fn format_unsigned(v: u64, base: u32) -> String {
    let base = if (2..=36).contains(&base) {
        base
    } else {
        tracing::warn!(base, "Integer radix out of range, rendering decimal");
        10
    };
    if base == 10 {
        return v.to_string();
    }
    if v == 0 {
        return "0".to_string();
    }
    let base = u64::from(base);
    let mut digits = [0u8; 64];
    let mut len = 0;
    let mut rest = v;
    while rest > 0 {
        digits[len] = RADIX_DIGITS[(rest % base) as usize];
        len += 1;
        rest /= base;
    }
    digits[..len].iter().rev().map(|&b| b as char).collect()
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    u8 => UTinyInt,
    u16 => USmallInt,
    u32 => UInt,
    u64 => UBigInt,
    f32 => Float,
    f64 => Double,
    String => Text,
    Vec<u8> => Bytes,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(v),
            Value::TinyInt(v) => serde_json::Value::from(v),
            Value::SmallInt(v) => serde_json::Value::from(v),
            Value::Int(v) => serde_json::Value::from(v),
            Value::BigInt(v) => serde_json::Value::from(v),
            Value::UTinyInt(v) => serde_json::Value::from(v),
            Value::USmallInt(v) => serde_json::Value::from(v),
            Value::UInt(v) => serde_json::Value::from(v),
            Value::UBigInt(v) => serde_json::Value::from(v),
            Value::Float(v) => serde_json::Value::from(v),
            Value::Double(v) => serde_json::Value::from(v),
            Value::Text(v) => serde_json::Value::String(v),
            Value::Bytes(v) => serde_json::Value::String(String::from_utf8_lossy(&v).into_owned()),
        }
    }
}
