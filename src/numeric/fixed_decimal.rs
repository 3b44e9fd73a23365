// ============================================================================
// Fixed-Point Decimal
// Decimal numbers with compile-time precision, stored as scaled i64
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::kind::{NumericKind, MAX_DECIMALS};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-18). Default is 9.
///
/// # Example
/// ```
/// use typed_numerics::numeric::FixedDecimal;
///
/// let a: FixedDecimal<4> = "1.25".parse().unwrap();      // 1.2500
/// let b: FixedDecimal<4> = "0.75".parse().unwrap();      // 0.7500
/// assert_eq!(a.checked_add(b).unwrap().to_string(), "2.0000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 9>(i64);

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Runtime identity of this precision
    pub const KIND: NumericKind = NumericKind::Fixed(D);

    /// Evaluating this constant fails compilation for `D > MAX_DECIMALS`.
    pub(crate) const VALID_PRECISION: () = assert!(
        D <= MAX_DECIMALS,
        "FixedDecimal supports at most MAX_DECIMALS (18) decimal places"
    );

    pub const ZERO: Self = Self(0);

    pub const ONE: Self = Self(pow10(D));

    pub const MAX: Self = Self(i64::MAX);

    pub const MIN: Self = Self(i64::MIN);

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow { kind: Self::KIND })
    }

    /// Parse a decimal literal of any length, rounding half away from zero
    /// at `DECIMALS` places.
    ///
    /// This is how canonical constants are bound to a fixed precision:
    /// `"3.14159265358979"` becomes `3.1416` at four decimals.
    pub fn from_str_rounded(text: &str) -> NumericResult<Self> {
        parse_scaled(text, D, Rounding::HalfUp).map(Self)
    }

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Addition
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow { kind: Self::KIND })
    }

    /// Two's-complement wrapping addition on the scaled representation.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    // ========================================================================
    // rust_decimal boundary
    // ========================================================================

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if `d` carries digits beyond `DECIMALS`
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let overflow = NumericError::Overflow { kind: Self::KIND };
        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(overflow)?;

        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        scaled.to_i64().map(Self).ok_or(overflow)
    }

    /// Convert to `rust_decimal::Decimal` with scale `DECIMALS`.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let mut d = Decimal::from(self.0);
        d.set_scale(u32::from(D))
            .map_err(|_| NumericError::InvalidInput)?;
        Ok(d)
    }
}

// ============================================================================
// Decimal text parsing
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rounding {
    /// Extra fractional digits are an error
    Exact,
    /// Extra fractional digits round half away from zero
    HalfUp,
}

/// Parse decimal text into an integer scaled by `10^decimals`.
pub(crate) fn parse_scaled(text: &str, decimals: u8, rounding: Rounding) -> NumericResult<i64> {
    if decimals > MAX_DECIMALS {
        return Err(NumericError::InvalidInput);
    }

    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (int_str, frac_str) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_str.is_empty() && frac_str.is_empty()) || !is_digits(int_str) || !is_digits(frac_str)
    {
        return Err(NumericError::InvalidInput);
    }

    let places = usize::from(decimals);
    if frac_str.len() > places && rounding == Rounding::Exact {
        return Err(NumericError::PrecisionLoss);
    }

    let overflow = NumericError::Overflow {
        kind: NumericKind::Fixed(decimals),
    };

    let int_val: i128 = if int_str.is_empty() {
        0
    } else {
        int_str.parse().map_err(|_| overflow)?
    };

    let kept = &frac_str[..frac_str.len().min(places)];
    let mut frac_val: i128 = if kept.is_empty() { 0 } else { kept.parse().map_err(|_| overflow)? };
    frac_val *= 10i128.pow((places - kept.len()) as u32);

    let round_up = frac_str
        .as_bytes()
        .get(places)
        .is_some_and(|digit| *digit >= b'5');

    let magnitude = int_val
        .checked_mul(10i128.pow(u32::from(decimals)))
        .and_then(|scaled| scaled.checked_add(frac_val))
        .and_then(|scaled| scaled.checked_add(i128::from(round_up)))
        .ok_or(overflow)?;

    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).map_err(|_| overflow)
}

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse from a decimal string, rejecting digits beyond `DECIMALS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, D, Rounding::Exact).map(Self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedDecimal<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type FD9 = FixedDecimal<9>;
    type FD4 = FixedDecimal<4>;

    #[test]
    fn test_constants() {
        assert_eq!(FD9::SCALE, 1_000_000_000);
        assert_eq!(FD4::ONE.raw_value(), 10_000);
        assert_eq!(FD4::KIND, NumericKind::Fixed(4));
    }

    #[test]
    fn test_from_str_exact() {
        let x: FD4 = "12.5".parse().unwrap();
        assert_eq!(x.raw_value(), 125_000);

        let y: FD4 = "-0.0001".parse().unwrap();
        assert_eq!(y.to_string(), "-0.0001");

        let z: Result<FD4, _> = "1.23456".parse();
        assert_eq!(z, Err(NumericError::PrecisionLoss));

        let bad: Result<FD4, _> = "1.2.3".parse();
        assert_eq!(bad, Err(NumericError::InvalidInput));

        let empty: Result<FD4, _> = "-".parse();
        assert_eq!(empty, Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_str_rounded() {
        let pi = FD4::from_str_rounded("3.14159265358979").unwrap();
        assert_eq!(pi.raw_value(), 31_416);

        // Truncation below half
        let x = FD4::from_str_rounded("2.71824999").unwrap();
        assert_eq!(x.raw_value(), 27_182);

        // Rounds away from zero for negatives
        let y = FD4::from_str_rounded("-1.00005").unwrap();
        assert_eq!(y.raw_value(), -10_001);

        // Carry into the integer part
        let z = FD4::from_str_rounded("0.99999").unwrap();
        assert_eq!(z, FD4::ONE);
    }

    #[test]
    fn test_parse_scaled_rejects_excess_decimals() {
        assert_eq!(
            parse_scaled("1.0", 19, Rounding::HalfUp),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_scaled_overflow() {
        assert_eq!(
            parse_scaled("10", 18, Rounding::HalfUp),
            Err(NumericError::Overflow {
                kind: NumericKind::Fixed(18)
            })
        );
    }

    #[test]
    fn test_addition_modes() {
        let a = FD4::from_integer(2).unwrap();
        let b = FD4::from_raw(5_000);
        assert_eq!(a.checked_add(b).unwrap().to_string(), "2.5000");
        assert_eq!(a.wrapping_add(b).raw_value(), 25_000);

        assert_eq!(
            FD4::MAX.checked_add(FD4::ONE),
            Err(NumericError::Overflow {
                kind: NumericKind::Fixed(4)
            })
        );
        assert_eq!(FD4::MAX.wrapping_add(FD4::from_raw(1)), FD4::MIN);
        assert_eq!(FD4::MAX.saturating_add(FD4::ONE), FD4::MAX);
    }

    #[test]
    fn test_decimal_boundary() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = FD9::from_decimal(d).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 450_000_000);
        assert_eq!(x.to_decimal().unwrap().to_string(), "123.450000000");

        let fine = Decimal::new(123_456, 5); // 1.23456
        assert_eq!(FD4::from_decimal(fine), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_display() {
        assert_eq!(FD9::ZERO.to_string(), "0.000000000");
        assert_eq!(FixedDecimal::<0>::from_integer(7).unwrap().to_string(), "7");
        assert_eq!(FD4::from_raw(-1_000).to_string(), "-0.1000");
        assert!(FD4::from_raw(-1_000).is_negative());
    }
}
