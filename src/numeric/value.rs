// ============================================================================
// Value
// Tagged scalar for arguments whose types are only known at runtime
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::FixedDecimal;
use super::kind::NumericKind;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A runtime-typed scalar.
///
/// Numeric variants map one-to-one onto [`NumericKind`]. `Bool` and `Char`
/// are carried so that callers can hand over whatever they parsed; no
/// numeric conversion exists for them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    Fixed { raw: i64, decimals: u8 },
    Bool(bool),
    Char(char),
}

impl Value {
    /// Numeric kind of this value, `None` for non-arithmetic values.
    pub const fn kind(&self) -> Option<NumericKind> {
        let kind = match self {
            Value::I8(_) => NumericKind::I8,
            Value::I16(_) => NumericKind::I16,
            Value::I32(_) => NumericKind::I32,
            Value::I64(_) => NumericKind::I64,
            Value::I128(_) => NumericKind::I128,
            Value::U8(_) => NumericKind::U8,
            Value::U16(_) => NumericKind::U16,
            Value::U32(_) => NumericKind::U32,
            Value::U64(_) => NumericKind::U64,
            Value::U128(_) => NumericKind::U128,
            Value::F32(_) => NumericKind::F32,
            Value::F64(_) => NumericKind::F64,
            Value::Fixed { decimals, .. } => NumericKind::Fixed(*decimals),
            Value::Bool(_) | Value::Char(_) => return None,
        };
        Some(kind)
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            other => match other.kind() {
                Some(kind) => kind.name(),
                None => "unknown",
            },
        }
    }

    /// Convert to `target` if and only if the conversion is lossless.
    ///
    /// # Errors
    /// - `TypeMismatch` for non-arithmetic values
    /// - `NarrowingConversion` when some value of this kind would not
    ///   survive the conversion, even if this particular one would
    pub fn widen_to(self, target: NumericKind) -> NumericResult<Value> {
        let from = self.kind().ok_or(NumericError::TypeMismatch {
            expected: target,
            found: self.type_name(),
        })?;

        if from == target {
            return Ok(self);
        }

        let narrowing = NumericError::NarrowingConversion { from, to: target };
        if !from.widens_to(target) {
            return Err(narrowing);
        }

        match self {
            Value::F32(v) => Ok(Value::F64(f64::from(v))),
            other => other
                .as_i128()
                .and_then(|wide| Self::from_i128(wide, target))
                .ok_or(narrowing),
        }
    }

    fn as_i128(self) -> Option<i128> {
        match self {
            Value::I8(v) => Some(i128::from(v)),
            Value::I16(v) => Some(i128::from(v)),
            Value::I32(v) => Some(i128::from(v)),
            Value::I64(v) => Some(i128::from(v)),
            Value::I128(v) => Some(v),
            Value::U8(v) => Some(i128::from(v)),
            Value::U16(v) => Some(i128::from(v)),
            Value::U32(v) => Some(i128::from(v)),
            Value::U64(v) => Some(i128::from(v)),
            Value::U128(v) => i128::try_from(v).ok(),
            _ => None,
        }
    }

    fn from_i128(wide: i128, target: NumericKind) -> Option<Value> {
        match target {
            NumericKind::I8 => i8::try_from(wide).ok().map(Value::I8),
            NumericKind::I16 => i16::try_from(wide).ok().map(Value::I16),
            NumericKind::I32 => i32::try_from(wide).ok().map(Value::I32),
            NumericKind::I64 => i64::try_from(wide).ok().map(Value::I64),
            NumericKind::I128 => Some(Value::I128(wide)),
            NumericKind::U8 => u8::try_from(wide).ok().map(Value::U8),
            NumericKind::U16 => u16::try_from(wide).ok().map(Value::U16),
            NumericKind::U32 => u32::try_from(wide).ok().map(Value::U32),
            NumericKind::U64 => u64::try_from(wide).ok().map(Value::U64),
            NumericKind::U128 => u128::try_from(wide).ok().map(Value::U128),
            // Exact: widens_to admits only integers within the significand
            NumericKind::F32 => Some(Value::F32(wide as f32)),
            NumericKind::F64 => Some(Value::F64(wide as f64)),
            NumericKind::Fixed(decimals) => wide
                .checked_mul(10i128.pow(u32::from(decimals)))
                .and_then(|raw| i64::try_from(raw).ok())
                .map(|raw| Value::Fixed { raw, decimals }),
        }
    }

    /// Fixed-point values as `rust_decimal::Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match *self {
            Value::Fixed { raw, decimals } => {
                let mut d = Decimal::from(raw);
                d.set_scale(u32::from(decimals)).ok()?;
                Some(d)
            },
            _ => None,
        }
    }
}

macro_rules! impl_value_from {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Value {
            #[inline]
            fn from(v: $t) -> Self {
                Value::$variant(v)
            }
        }
    };
}

impl_value_from!(i8, I8);
impl_value_from!(i16, I16);
impl_value_from!(i32, I32);
impl_value_from!(i64, I64);
impl_value_from!(i128, I128);
impl_value_from!(u8, U8);
impl_value_from!(u16, U16);
impl_value_from!(u32, U32);
impl_value_from!(u64, U64);
impl_value_from!(u128, U128);
impl_value_from!(f32, F32);
impl_value_from!(f64, F64);
impl_value_from!(bool, Bool);
impl_value_from!(char, Char);

impl<const D: u8> From<FixedDecimal<D>> for Value {
    #[inline]
    fn from(v: FixedDecimal<D>) -> Self {
        Value::Fixed {
            raw: v.raw_value(),
            decimals: D,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::I128(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::U128(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Fixed { raw, decimals } => match self.to_decimal() {
                Some(d) => write!(f, "{}", d),
                None => write!(f, "{}e-{}", raw, decimals),
            },
            Value::Bool(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
        }
    }
}
