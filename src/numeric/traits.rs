// ============================================================================
// Numeric Trait
// Additive identity and native addition for every aggregatable type
// ============================================================================

use super::fixed_decimal::FixedDecimal;
use super::kind::NumericKind;
use super::value::Value;
use std::fmt;

/// A numeric type that can be folded by the aggregators.
///
/// `ZERO` seeds every fold, so a single-argument sum returns the argument
/// unchanged. The three accumulation flavours differ only for integer and
/// fixed-point types; floating types always use IEEE addition.
pub trait Numeric: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Runtime identity of the type
    const KIND: NumericKind;

    /// The additive identity
    const ZERO: Self;

    /// Native addition. Integers wrap in two's complement.
    fn wrapping_accumulate(self, rhs: Self) -> Self;

    /// Addition returning `None` when the result is out of range.
    fn checked_accumulate(self, rhs: Self) -> Option<Self>;

    /// Addition clamped to the representable range.
    fn saturating_accumulate(self, rhs: Self) -> Self;

    fn into_value(self) -> Value;

    /// Extract a value of exactly this kind; no conversion is attempted.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_integer_numeric {
    ($t:ty, $variant:ident) => {
        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$variant;
            const ZERO: Self = 0;

            #[inline]
            fn wrapping_accumulate(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            #[inline]
            fn saturating_accumulate(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            #[inline]
            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! impl_float_numeric {
    ($t:ty, $variant:ident) => {
        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$variant;
            const ZERO: Self = 0.0;

            #[inline]
            fn wrapping_accumulate(self, rhs: Self) -> Self {
                self + rhs
            }

            // Infinity is a representable IEEE result, not an overflow
            #[inline]
            fn checked_accumulate(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            #[inline]
            fn saturating_accumulate(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            #[inline]
            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_integer_numeric!(i8, I8);
impl_integer_numeric!(i16, I16);
impl_integer_numeric!(i32, I32);
impl_integer_numeric!(i64, I64);
impl_integer_numeric!(i128, I128);
impl_integer_numeric!(u8, U8);
impl_integer_numeric!(u16, U16);
impl_integer_numeric!(u32, U32);
impl_integer_numeric!(u64, U64);
impl_integer_numeric!(u128, U128);

impl_float_numeric!(f32, F32);
impl_float_numeric!(f64, F64);

impl<const D: u8> Numeric for FixedDecimal<D> {
    const KIND: NumericKind = NumericKind::Fixed(D);
    const ZERO: Self = FixedDecimal::<D>::ZERO;

    #[inline]
    fn wrapping_accumulate(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline]
    fn checked_accumulate(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs).ok()
    }

    #[inline]
    fn saturating_accumulate(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Fixed {
            raw: self.raw_value(),
            decimals: D,
        }
    }

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Fixed { raw, decimals } if decimals == D => Some(Self::from_raw(raw)),
            _ => None,
        }
    }
}
