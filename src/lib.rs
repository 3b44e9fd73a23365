// ============================================================================
// Typed Numerics Library
// Type-checked variadic aggregation and per-type memoized constants
// ============================================================================

//! # Typed Numerics
//!
//! Two independent building blocks for generic numeric code.
//!
//! ## Features
//!
//! - **Variadic aggregation**: `sum!(a, b, c)` folds one or more values of a
//!   single type left to right, seeded with the type's additive identity.
//!   Mixed or lossy argument types and empty calls are compile errors.
//! - **Runtime aggregation**: [`aggregate::Aggregator`] applies the same
//!   rules to runtime-typed [`numeric::Value`]s, validating every argument
//!   before folding.
//! - **Constant table**: `get_constant::<T>()` binds pi to the precision of
//!   `T` once per type and returns the identical bits on every later call,
//!   from any thread.
//! - **Fixed-point decimals**: [`numeric::FixedDecimal`] participates in both.
//!
//! ## Example
//!
//! ```rust
//! use typed_numerics::prelude::*;
//!
//! assert_eq!(sum!(1, 2, 3, 4, 5), 15);
//! assert!((sum!(1.5f64, 2.0, 3.7) - 7.2).abs() < 1e-9);
//!
//! let pi32: f32 = get_constant();
//! let pi64: f64 = get_constant();
//! assert!((f64::from(pi32) - pi64).abs() < 1e-6);
//!
//! let pi4: FixedDecimal<4> = get_constant();
//! assert_eq!(pi4.to_string(), "3.1416");
//!
//! let total = try_sum!(10i64, 5u8);
//! assert_eq!(total, Ok(Value::I64(15)));
//! ```

pub mod aggregate;
pub mod constants;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::aggregate::{
        checked_sum, sum_widening, try_sum, Aggregator, AggregatorConfig, ArgumentList,
        ConversionPolicy, OverflowPolicy,
    };
    pub use crate::constants::{
        circular_area, constant, get_constant, global_table, ConstantId, ConstantTable,
        ConstantValue, Euler, Ln2, MathConstant, Pi, Sqrt2,
    };
    pub use crate::numeric::{
        FixedDecimal, Numeric, NumericError, NumericKind, NumericResult, Value,
    };
    pub use crate::{sum, try_sum};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use quickcheck::{quickcheck, TestResult};
    use std::thread;

    #[test]
    fn test_end_to_end() {
        let radius = sum!(0.5f64, 0.5);
        let area = circular_area(radius);
        assert_eq!(area, get_constant::<f64>());

        let parts = [get_constant::<f64>(), constant::<Euler, f64>()];
        let total = crate::aggregate::sum(parts[0], [parts[1]]);
        assert!((total - (std::f64::consts::PI + std::f64::consts::E)).abs() < 1e-12);
    }

    #[test]
    fn test_constant_in_runtime_aggregation() {
        let pi = global_table()
            .get_value(ConstantId::Pi, NumericKind::Fixed(2))
            .unwrap();
        let total = Aggregator::default()
            .sum_values(&[pi, Value::U8(1)])
            .unwrap();
        assert_eq!(total.to_string(), "4.14");
    }

    #[test]
    fn test_parallel_sums_are_independent() {
        let results: Vec<i64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8i64)
                .map(|i| scope.spawn(move || sum!(i, i, i)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, (0..8i64).map(|i| 3 * i).collect::<Vec<_>>());
    }

    quickcheck! {
        fn prop_single_i64_is_identity(x: i64) -> bool {
            sum!(x) == x
        }

        fn prop_single_u128_is_identity(x: u128) -> bool {
            sum!(x) == x
        }

        fn prop_single_f64_is_identity(x: f64) -> TestResult {
            if x.is_nan() {
                return TestResult::discard();
            }
            TestResult::from_bool(sum!(x) == x)
        }

        fn prop_single_value_is_identity(x: i32) -> bool {
            try_sum!(x) == Ok(Value::I32(x))
        }
    }
}
