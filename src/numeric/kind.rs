// ============================================================================
// Numeric Kind
// Runtime identity of every numeric type the crate can aggregate or bind
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of decimal places a fixed-point value may carry.
///
/// `10^18` is the largest power of ten that fits in an `i64`.
pub const MAX_DECIMALS: u8 = 18;

/// Identity of a numeric type, usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    /// IEEE-754 binary32
    F32,
    /// IEEE-754 binary64
    F64,
    /// Fixed-point decimal with the given number of decimal places
    Fixed(u8),
}

impl NumericKind {
    /// Short lowercase name (`"i32"`, `"f64"`, `"fixed"`).
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::I128 => "i128",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::U128 => "u128",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
            NumericKind::Fixed(_) => "fixed",
        }
    }

    /// Storage width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            NumericKind::I8 | NumericKind::U8 => 8,
            NumericKind::I16 | NumericKind::U16 => 16,
            NumericKind::I32 | NumericKind::U32 | NumericKind::F32 => 32,
            NumericKind::I64 | NumericKind::U64 | NumericKind::F64 | NumericKind::Fixed(_) => 64,
            NumericKind::I128 | NumericKind::U128 => 128,
        }
    }

    pub const fn is_integer(self) -> bool {
        !matches!(
            self,
            NumericKind::F32 | NumericKind::F64 | NumericKind::Fixed(_)
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }

    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericKind::U8
                | NumericKind::U16
                | NumericKind::U32
                | NumericKind::U64
                | NumericKind::U128
        )
    }

    /// Whether canonical constants can be bound for this kind.
    ///
    /// Integers are excluded: binding an irrational constant to one would
    /// be a narrowing conversion. So are fixed precisions beyond
    /// [`MAX_DECIMALS`], which an i64 cannot scale.
    pub const fn supports_constants(self) -> bool {
        match self {
            NumericKind::Fixed(decimals) => decimals <= MAX_DECIMALS,
            other => !other.is_integer(),
        }
    }

    /// Significand precision in bits (including the implicit bit) for
    /// floating kinds.
    const fn mantissa_bits(self) -> Option<u32> {
        match self {
            NumericKind::F32 => Some(f32::MANTISSA_DIGITS),
            NumericKind::F64 => Some(f64::MANTISSA_DIGITS),
            _ => None,
        }
    }

    /// Largest magnitude an integer kind can hold, as `u128`.
    ///
    /// For signed kinds this is `|MIN|`, which exceeds `MAX` by one.
    fn max_magnitude(self) -> u128 {
        let bits = self.bits();
        if self.is_signed() {
            1u128 << (bits - 1)
        } else if bits == 128 {
            u128::MAX
        } else {
            (1u128 << bits) - 1
        }
    }

    /// Whether every value of `self` converts to `target` without losing
    /// information.
    ///
    /// Mirrors the lossless `From` impls between primitive numeric types,
    /// extended to fixed-point decimals.
    pub fn widens_to(self, target: NumericKind) -> bool {
        if self == target {
            return true;
        }

        match (self, target) {
            (NumericKind::F32, NumericKind::F64) => true,
            (from, NumericKind::Fixed(decimals)) if from.is_integer() => {
                if decimals > MAX_DECIMALS {
                    return false;
                }
                let scale = 10u128.pow(u32::from(decimals));
                match self.max_magnitude().checked_mul(scale) {
                    // i64::MIN has magnitude i64::MAX + 1
                    Some(limit) if from.is_signed() => limit <= i64::MAX as u128 + 1,
                    Some(limit) => limit <= i64::MAX as u128,
                    None => false,
                }
            },
            (from, to) if from.is_integer() && to.is_integer() => {
                match (from.is_signed(), to.is_signed()) {
                    (false, false) | (true, true) => to.bits() >= from.bits(),
                    (false, true) => to.bits() > from.bits(),
                    (true, false) => false,
                }
            },
            (from, to) if from.is_integer() => match to.mantissa_bits() {
                Some(mantissa) => from.bits() <= mantissa,
                None => false,
            },
            _ => false,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Fixed(decimals) => write!(f, "fixed<{}>", decimals),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widening_same_signedness() {
        assert!(NumericKind::I8.widens_to(NumericKind::I64));
        assert!(NumericKind::U16.widens_to(NumericKind::U128));
        assert!(!NumericKind::I64.widens_to(NumericKind::I32));
        assert!(!NumericKind::U32.widens_to(NumericKind::U8));
    }

    #[test]
    fn test_integer_widening_across_signedness() {
        assert!(NumericKind::U8.widens_to(NumericKind::I16));
        assert!(!NumericKind::U32.widens_to(NumericKind::I32));
        assert!(!NumericKind::I8.widens_to(NumericKind::U64));
    }

    #[test]
    fn test_integer_to_float_matches_std_from() {
        assert!(NumericKind::I16.widens_to(NumericKind::F32));
        assert!(!NumericKind::I32.widens_to(NumericKind::F32));
        assert!(NumericKind::U32.widens_to(NumericKind::F64));
        assert!(!NumericKind::I64.widens_to(NumericKind::F64));
    }

    #[test]
    fn test_float_widening() {
        assert!(NumericKind::F32.widens_to(NumericKind::F64));
        assert!(!NumericKind::F64.widens_to(NumericKind::F32));
        assert!(!NumericKind::F64.widens_to(NumericKind::I64));
        assert!(!NumericKind::F32.widens_to(NumericKind::I128));
    }

    #[test]
    fn test_fixed_widening() {
        // 2^31 * 10^9 fits in i64
        assert!(NumericKind::I32.widens_to(NumericKind::Fixed(9)));
        assert!(NumericKind::U32.widens_to(NumericKind::Fixed(9)));
        assert!(!NumericKind::I32.widens_to(NumericKind::Fixed(10)));
        assert!(NumericKind::I64.widens_to(NumericKind::Fixed(0)));
        assert!(!NumericKind::U64.widens_to(NumericKind::Fixed(0)));
        assert!(!NumericKind::Fixed(2).widens_to(NumericKind::Fixed(4)));
        assert!(!NumericKind::Fixed(9).widens_to(NumericKind::F64));
        assert!(!NumericKind::F64.widens_to(NumericKind::Fixed(9)));
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericKind::I32.to_string(), "i32");
        assert_eq!(NumericKind::Fixed(9).to_string(), "fixed<9>");
    }

    #[test]
    fn test_constant_support() {
        assert!(NumericKind::F32.supports_constants());
        assert!(NumericKind::Fixed(4).supports_constants());
        assert!(!NumericKind::I64.supports_constants());
        assert!(NumericKind::Fixed(MAX_DECIMALS).supports_constants());
        assert!(!NumericKind::Fixed(MAX_DECIMALS + 1).supports_constants());
    }
}
