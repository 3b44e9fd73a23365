// ============================================================================
// Aggregate Module
// Variadic numeric sums with structural type and arity checks
// ============================================================================
//
// Two entry points share ArgumentList and its left-to-right fold:
// - Typed: sum / sum_widening / checked_sum / try_sum and the sum! macro.
//   Type mismatches, narrowing, and empty calls are compile errors.
// - Runtime: Aggregator over Value and the try_sum! macro. The same
//   conditions are reported as NumericError before any addition happens.

mod args;
mod config;
mod dynamic;
mod macros;
mod sum;

pub use args::ArgumentList;
pub use config::{AggregatorConfig, ConversionPolicy, OverflowPolicy};
pub use dynamic::Aggregator;
pub use sum::{checked_sum, sum, sum_widening, try_sum};

#[doc(hidden)]
pub use sum::{adopt, widen};
