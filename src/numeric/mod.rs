// ============================================================================
// Numeric Module
// Type identities and arithmetic shared by the constant table and aggregators
// ============================================================================
//
// This module provides:
// - NumericKind: runtime identity of a numeric type, plus the lossless
//   widening table
// - Numeric: additive identity and native addition per type
// - Value: tagged scalar for runtime-typed arguments
// - FixedDecimal<D>: fixed-point decimal with compile-time precision
// - NumericError: structural error types
//
// Design principles:
// - Lossy conversions are never applied implicitly
// - Fallible operations return Result
// - Compile-time configurable precision via const generics

mod errors;
mod fixed_decimal;
mod kind;
mod traits;
mod value;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::FixedDecimal;
pub use kind::{NumericKind, MAX_DECIMALS};
pub use traits::Numeric;
pub use value::Value;

pub(crate) use fixed_decimal::{parse_scaled, Rounding};
