// ============================================================================
// Global Registry
// Process-wide constant table and the free functions backed by it
// ============================================================================

use super::definitions::{ConstantValue, MathConstant, Pi};
use super::table::ConstantTable;
use std::ops::Mul;
use std::sync::LazyLock;

static GLOBAL_TABLE: LazyLock<ConstantTable> = LazyLock::new(ConstantTable::new);

/// The table backing [`get_constant`] and [`constant`].
pub fn global_table() -> &'static ConstantTable {
    &GLOBAL_TABLE
}

/// Pi at the precision of `T`, bound once per type for the process.
///
/// Only types with a canonical binding are accepted; asking for an integer
/// is a compile error:
///
/// ```compile_fail
/// let _ = typed_numerics::constants::get_constant::<i32>();
/// ```
///
/// and so is a fixed precision an i64 cannot scale:
///
/// ```compile_fail
/// use typed_numerics::numeric::FixedDecimal;
///
/// let _ = typed_numerics::constants::get_constant::<FixedDecimal<19>>();
/// ```
///
/// ```
/// use typed_numerics::constants::get_constant;
///
/// assert_eq!(get_constant::<f64>(), std::f64::consts::PI);
/// ```
pub fn get_constant<T: ConstantValue>() -> T {
    GLOBAL_TABLE.get::<Pi, T>()
}

/// Any registered constant at the precision of `T`.
pub fn constant<C: MathConstant, T: ConstantValue>() -> T {
    GLOBAL_TABLE.get::<C, T>()
}

/// Area of a circle with the given radius, using pi bound at `T`.
pub fn circular_area<T>(radius: T) -> T
where
    T: ConstantValue + Mul<Output = T>,
{
    get_constant::<T>() * radius * radius
}
