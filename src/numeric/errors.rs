// ============================================================================
// Numeric Errors
// Structural failures of constant binding and argument aggregation
// ============================================================================

use super::kind::NumericKind;
use std::fmt;

/// Errors raised by the constant table and the aggregators.
///
/// All of them describe a usage defect (wrong type, wrong arity) rather
/// than a transient condition, so none are worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// No canonical definition exists for the requested type
    UnsupportedType { type_name: &'static str },
    /// Argument type differs from the aggregation type and has no
    /// acceptable conversion to it
    TypeMismatch {
        expected: NumericKind,
        found: &'static str,
    },
    /// Argument converts to the aggregation type only with possible loss
    NarrowingConversion { from: NumericKind, to: NumericKind },
    /// Aggregation called without any argument
    ArityError,
    /// Result left the representable range under a checked policy
    Overflow { kind: NumericKind },
    /// Input string or value is invalid
    InvalidInput,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::UnsupportedType { type_name } => {
                write!(f, "unsupported type: no canonical definition for {}", type_name)
            },
            NumericError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            },
            NumericError::NarrowingConversion { from, to } => write!(
                f,
                "narrowing conversion: {} cannot be converted to {} without loss",
                from, to
            ),
            NumericError::ArityError => {
                write!(f, "arity error: at least one argument is required")
            },
            NumericError::Overflow { kind } => {
                write!(f, "arithmetic overflow: result exceeded the range of {}", kind)
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::ArityError.to_string(),
            "arity error: at least one argument is required"
        );
        assert_eq!(
            NumericError::NarrowingConversion {
                from: NumericKind::F64,
                to: NumericKind::I32,
            }
            .to_string(),
            "narrowing conversion: f64 cannot be converted to i32 without loss"
        );
        assert_eq!(
            NumericError::TypeMismatch {
                expected: NumericKind::Fixed(9),
                found: "bool",
            }
            .to_string(),
            "type mismatch: expected fixed<9>, found bool"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::ArityError, NumericError::ArityError);
        assert_ne!(
            NumericError::Overflow {
                kind: NumericKind::I8
            },
            NumericError::Overflow {
                kind: NumericKind::I16
            }
        );
    }
}
