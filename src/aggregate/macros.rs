// ============================================================================
// Aggregation Macros
// Call-site variadic syntax for the typed and runtime aggregators
// ============================================================================

/// Sum one or more numeric arguments into the type of the first.
///
/// The first argument fixes T. Untyped literals in the rest adopt T, and
/// named values widen into T through `From`, so only lossless conversions
/// compile. Anything lossy, non-numeric, or an empty call is a compile
/// error. Integers wrap on overflow.
///
/// ```
/// use typed_numerics::sum;
///
/// assert_eq!(sum!(1, 2, 3, 4, 5), 15);
/// assert_eq!(sum!(1, 2, 3), 6);
/// assert!((sum!(1.5f64, 2.0, 3.7) - 7.2).abs() < 1e-9);
/// assert_eq!(sum!(250u8, 10), 4);
///
/// let small: i32 = -7;
/// let byte: u8 = 200;
/// assert_eq!(sum!(1_000i64, small, byte, 7), 1_200);
/// ```
///
/// A suffixed literal is not widened; bind it to a name or use
/// [`sum_widening`](crate::aggregate::sum_widening).
///
/// A call without arguments is rejected at compile time:
///
/// ```compile_fail
/// let _: i32 = typed_numerics::sum!();
/// ```
///
/// and so is a floating value in an integer sum:
///
/// ```compile_fail
/// let _ = typed_numerics::sum!(1i32, 2.5);
/// ```
///
/// or a wider integer in a narrower sum:
///
/// ```compile_fail
/// let wide = 1i64;
/// let _ = typed_numerics::sum!(1i32, wide);
/// ```
#[macro_export]
macro_rules! sum {
    () => {
        compile_error!("sum! requires at least one argument")
    };
    ($first:expr $(,)?) => {
        $crate::aggregate::sum($first, [])
    };
    ($first:expr, $($rest:tt)+) => {{
        let first = $first;
        let rest = $crate::__sum_rest!(first; []; $($rest)+);
        $crate::aggregate::sum(first, rest)
    }};
}

/// Builds the rest array for `sum!`, one argument at a time.
#[doc(hidden)]
#[macro_export]
macro_rules! __sum_rest {
    ($anchor:ident; [$($done:expr),*];) => {
        [$($done),*]
    };
    ($anchor:ident; [$($done:expr),*]; $value:ident $(, $($tail:tt)*)?) => {
        $crate::__sum_rest!(
            $anchor;
            [$($done,)* $crate::aggregate::widen(&$anchor, $value)];
            $($($tail)*)?
        )
    };
    ($anchor:ident; [$($done:expr),*]; - $value:ident $(, $($tail:tt)*)?) => {
        $crate::__sum_rest!(
            $anchor;
            [$($done,)* $crate::aggregate::widen(&$anchor, -$value)];
            $($($tail)*)?
        )
    };
    ($anchor:ident; [$($done:expr),*]; $literal:tt $(, $($tail:tt)*)?) => {
        $crate::__sum_rest!(
            $anchor;
            [$($done,)* $crate::aggregate::adopt(&$anchor, $literal)];
            $($($tail)*)?
        )
    };
    ($anchor:ident; [$($done:expr),*]; - $literal:tt $(, $($tail:tt)*)?) => {
        $crate::__sum_rest!(
            $anchor;
            [$($done,)* $crate::aggregate::adopt(&$anchor, -$literal)];
            $($($tail)*)?
        )
    };
    ($anchor:ident; [$($done:expr),*]; $value:expr $(, $($tail:tt)*)?) => {
        $crate::__sum_rest!(
            $anchor;
            [$($done,)* $crate::aggregate::widen(&$anchor, $value)];
            $($($tail)*)?
        )
    };
}

/// Sum runtime-typed arguments with the default [`Aggregator`] configuration.
///
/// Each argument goes through `Value::from`, so anything with a `Value`
/// conversion is accepted; type and arity problems come back as
/// `NumericError`.
///
/// [`Aggregator`]: crate::aggregate::Aggregator
///
/// ```
/// use typed_numerics::numeric::{NumericError, NumericKind, Value};
/// use typed_numerics::try_sum;
///
/// assert_eq!(try_sum!(10i64, 5u8, -3i32), Ok(Value::I64(12)));
/// assert_eq!(
///     try_sum!(1i32, 2.5f64),
///     Err(NumericError::NarrowingConversion {
///         from: NumericKind::F64,
///         to: NumericKind::I32,
///     })
/// );
/// assert_eq!(try_sum!(), Err(NumericError::ArityError));
/// ```
#[macro_export]
macro_rules! try_sum {
    ($($arg:expr),* $(,)?) => {
        $crate::aggregate::Aggregator::default()
            .sum_values(&[$($crate::numeric::Value::from($arg)),*])
    };
}
