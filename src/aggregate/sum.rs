// ============================================================================
// Typed Aggregation
// Statically checked variadic sums: T is fixed by the first argument
// ============================================================================

use super::args::ArgumentList;
use super::config::OverflowPolicy;
use crate::numeric::{Numeric, NumericResult};

/// Sum `first` and every element of `rest`, left to right.
///
/// `first` fixes T; `rest` must already be T, so mismatched or lossy
/// arguments are compile errors. Integers wrap on overflow. Floating
/// results are folded strictly in call order, never reassociated.
///
/// ```
/// use typed_numerics::aggregate::sum;
///
/// assert_eq!(sum(1, [2, 3, 4, 5]), 15);
/// assert_eq!(sum(2.5f32, []), 2.5);
/// ```
///
/// ```compile_fail
/// // f64 argument in an i32 sum
/// let _ = typed_numerics::aggregate::sum(1i32, [2.0f64]);
/// ```
#[inline]
pub fn sum<T, I>(first: T, rest: I) -> T
where
    T: Numeric,
    I: IntoIterator<Item = T>,
{
    ArgumentList::with_rest(first, rest).sum()
}

/// Like [`sum`], with `rest` of a type that converts losslessly into T.
///
/// The bound is `T: From<U>`; the standard library implements `From`
/// between numeric primitives only where no information can be lost, so
/// narrowing arguments fail to compile. `U` must itself be numeric, which
/// keeps `bool` and `char` out even though integers convert from them.
///
/// ```
/// use typed_numerics::aggregate::sum_widening;
///
/// let small: [u8; 3] = [200, 200, 200];
/// assert_eq!(sum_widening(1_000u32, small), 1_600);
/// ```
///
/// ```compile_fail
/// // i64 -> i32 can lose information
/// let _ = typed_numerics::aggregate::sum_widening(0i32, [1i64]);
/// ```
///
/// ```compile_fail
/// let _ = typed_numerics::aggregate::sum_widening(0u8, [true]);
/// ```
pub fn sum_widening<T, U, I>(first: T, rest: I) -> T
where
    T: Numeric + From<U>,
    U: Numeric,
    I: IntoIterator<Item = U>,
{
    ArgumentList::with_rest(first, rest.into_iter().map(T::from)).sum()
}

/// Like [`sum`], failing instead of wrapping.
///
/// # Errors
/// Returns `Overflow` if any intermediate sum leaves T's range.
pub fn checked_sum<T, I>(first: T, rest: I) -> NumericResult<T>
where
    T: Numeric,
    I: IntoIterator<Item = T>,
{
    ArgumentList::with_rest(first, rest).fold(OverflowPolicy::Checked)
}

// Argument adapters for `sum!`. `anchor` is the first argument; it only
// pins T so each rest argument is checked against it.

#[doc(hidden)]
#[inline]
pub fn adopt<T: Numeric>(_anchor: &T, value: T) -> T {
    value
}

#[doc(hidden)]
#[inline]
pub fn widen<T, U>(_anchor: &T, value: U) -> T
where
    T: Numeric + From<U>,
    U: Numeric,
{
    T::from(value)
}

/// Sum a slice whose length is only known at runtime.
///
/// # Errors
/// Returns `ArityError` for an empty slice.
pub fn try_sum<T: Numeric>(values: &[T]) -> NumericResult<T> {
    ArgumentList::try_from_slice(values).map(|list| list.sum())
}
