// ============================================================================
// Constants Module
// Canonical mathematical constants bound once per numeric type
// ============================================================================
//
// This module provides:
// - ConstantId / MathConstant: registered constants (pi, e, sqrt 2, ln 2)
// - ConstantValue: types a constant can be bound to (f32, f64, FixedDecimal)
// - ConstantTable: thread-safe compute-once registry
// - get_constant / constant / circular_area: free functions over the
//   process-wide table

mod definitions;
mod registry;
mod table;

pub use definitions::{ConstantId, ConstantValue, Euler, Ln2, MathConstant, Pi, Sqrt2};
pub use registry::{circular_area, constant, get_constant, global_table};
pub use table::ConstantTable;
