// ============================================================================
// Constant Definitions
// Canonical high-precision literals and the types they can be bound to
// ============================================================================

use crate::numeric::{FixedDecimal, Numeric, NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a registered mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstantId {
    /// Ratio of a circle's circumference to its diameter
    Pi,
    /// Base of the natural logarithm
    Euler,
    /// Square root of two
    Sqrt2,
    /// Natural logarithm of two
    Ln2,
}

impl ConstantId {
    pub const ALL: [ConstantId; 4] = [
        ConstantId::Pi,
        ConstantId::Euler,
        ConstantId::Sqrt2,
        ConstantId::Ln2,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ConstantId::Pi => "pi",
            ConstantId::Euler => "e",
            ConstantId::Sqrt2 => "sqrt2",
            ConstantId::Ln2 => "ln2",
        }
    }

    /// Canonical decimal expansion, longer than any supported precision.
    pub const fn literal(self) -> &'static str {
        match self {
            ConstantId::Pi => "3.14159265358979323846264338327950288419716939937510",
            ConstantId::Euler => "2.71828182845904523536028747135266249775724709369995",
            ConstantId::Sqrt2 => "1.41421356237309504880168872420969807856967187537694",
            ConstantId::Ln2 => "0.69314718055994530941723212145817656807550013436025",
        }
    }
}

/// Type-level handle for a constant, used as `ConstantTable::get::<Pi, f64>()`.
pub trait MathConstant {
    const ID: ConstantId;
}

pub struct Pi;
pub struct Euler;
pub struct Sqrt2;
pub struct Ln2;

impl MathConstant for Pi {
    const ID: ConstantId = ConstantId::Pi;
}

impl MathConstant for Euler {
    const ID: ConstantId = ConstantId::Euler;
}

impl MathConstant for Sqrt2 {
    const ID: ConstantId = ConstantId::Sqrt2;
}

impl MathConstant for Ln2 {
    const ID: ConstantId = ConstantId::Ln2;
}

/// Numeric types a canonical literal can be bound to.
///
/// Bindings are cached as raw bit patterns, so `from_bits(to_bits(x))`
/// must reproduce `x` exactly. Integers deliberately have no impl:
/// requesting `get_constant::<i32>()` is rejected by the compiler.
pub trait ConstantValue: Numeric {
    /// Round the literal to this type's precision.
    fn from_literal(literal: &str) -> NumericResult<Self>;

    fn to_bits(self) -> u64;

    fn from_bits(bits: u64) -> Self;
}

impl ConstantValue for f32 {
    // Parsing the full literal rounds once, straight to binary32
    fn from_literal(literal: &str) -> NumericResult<Self> {
        literal.trim().parse().map_err(|_| NumericError::InvalidInput)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(f32::to_bits(self))
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl ConstantValue for f64 {
    fn from_literal(literal: &str) -> NumericResult<Self> {
        literal.trim().parse().map_err(|_| NumericError::InvalidInput)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

// Both directions force the precision check, so an unrepresentable
// precision never reaches the table at runtime.
impl<const D: u8> ConstantValue for FixedDecimal<D> {
    fn from_literal(literal: &str) -> NumericResult<Self> {
        let () = Self::VALID_PRECISION;
        FixedDecimal::from_str_rounded(literal)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        self.raw_value() as u64
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        let () = Self::VALID_PRECISION;
        FixedDecimal::from_raw(bits as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_literals_match_std_consts() {
        assert_eq!(f64::from_literal(ConstantId::Pi.literal()), Ok(std::f64::consts::PI));
        assert_eq!(f64::from_literal(ConstantId::Euler.literal()), Ok(std::f64::consts::E));
        assert_eq!(f64::from_literal(ConstantId::Sqrt2.literal()), Ok(std::f64::consts::SQRT_2));
        assert_eq!(f64::from_literal(ConstantId::Ln2.literal()), Ok(std::f64::consts::LN_2));
        assert_eq!(f32::from_literal(ConstantId::Pi.literal()), Ok(std::f32::consts::PI));
        assert_eq!(f32::from_literal(ConstantId::Euler.literal()), Ok(std::f32::consts::E));
    }

    #[test]
    fn test_fixed_literals_round_half_up() {
        let pi9 = FixedDecimal::<9>::from_literal(ConstantId::Pi.literal()).unwrap();
        assert_eq!(pi9.raw_value(), 3_141_592_654);

        let e2 = FixedDecimal::<2>::from_literal(ConstantId::Euler.literal()).unwrap();
        assert_eq!(e2.to_string(), "2.72");

        let pi18 = FixedDecimal::<18>::from_literal(ConstantId::Pi.literal()).unwrap();
        assert_eq!(pi18.raw_value(), 3_141_592_653_589_793_238);
    }

    #[test]
    fn test_bits_round_trip_exactly() {
        let x = -0.0f64;
        assert_eq!(f64::from_bits(ConstantValue::to_bits(x)).to_bits(), x.to_bits());

        let y = FixedDecimal::<4>::from_raw(-31_416);
        assert_eq!(<FixedDecimal<4> as ConstantValue>::from_bits(y.to_bits()), y);
    }

    #[test]
    fn test_every_literal_binds_to_every_float() {
        for id in ConstantId::ALL {
            assert!(f32::from_literal(id.literal()).is_ok(), "{}", id.name());
            assert!(f64::from_literal(id.literal()).is_ok(), "{}", id.name());
            assert!(FixedDecimal::<18>::from_literal(id.literal()).is_ok(), "{}", id.name());
        }
    }
}
