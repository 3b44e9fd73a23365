// ============================================================================
// Runtime Aggregator
// Variadic sums over runtime-typed values with explicit pre-fold validation
// ============================================================================

use super::args::ArgumentList;
use super::config::{AggregatorConfig, ConversionPolicy, OverflowPolicy};
use crate::numeric::{Numeric, NumericError, NumericKind, NumericResult, Value};
use smallvec::SmallVec;

/// Aggregates [`Value`] arguments whose types are only known at runtime.
///
/// The first argument fixes the aggregation kind. Every argument is then
/// checked and widened before any addition happens, so a call either
/// returns one summed value or fails without a partial result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Sum `values` as the kind of `values[0]`.
    ///
    /// # Errors
    /// - `ArityError` if `values` is empty
    /// - `UnsupportedType` if the first value is not numeric
    /// - `TypeMismatch` for a later non-numeric value, or any other kind
    ///   under `ConversionPolicy::Exact`
    /// - `NarrowingConversion` for a value that cannot be widened losslessly
    /// - `Overflow` under `OverflowPolicy::Checked`
    pub fn sum_values(&self, values: &[Value]) -> NumericResult<Value> {
        let result = self.validate(values).and_then(|(target, widened)| {
            fold_as_kind(target, &widened, self.config.overflow)
        });

        match &result {
            Ok(total) => tracing::trace!(arity = values.len(), %total, "aggregated values"),
            Err(err) => tracing::debug!(arity = values.len(), error = %err, "rejected aggregation"),
        }

        result
    }

    /// Determine the target kind and widen every argument to it.
    fn validate(&self, values: &[Value]) -> NumericResult<(NumericKind, SmallVec<[Value; 8]>)> {
        let first = values.first().ok_or(NumericError::ArityError)?;
        let target = first.kind().ok_or(NumericError::UnsupportedType {
            type_name: first.type_name(),
        })?;

        let widened = values
            .iter()
            .map(|value| self.convert(*value, target))
            .collect::<NumericResult<SmallVec<[Value; 8]>>>()?;

        Ok((target, widened))
    }

    fn convert(&self, value: Value, target: NumericKind) -> NumericResult<Value> {
        match (self.config.conversion, value.kind()) {
            (ConversionPolicy::Exact, Some(kind)) if kind != target => {
                if kind.widens_to(target) {
                    Err(NumericError::TypeMismatch {
                        expected: target,
                        found: value.type_name(),
                    })
                } else {
                    Err(NumericError::NarrowingConversion {
                        from: kind,
                        to: target,
                    })
                }
            },
            _ => value.widen_to(target),
        }
    }
}

/// Fold already-widened values as `T`.
fn fold_typed<T: Numeric>(values: &[Value], policy: OverflowPolicy) -> NumericResult<Value> {
    let mut typed = values.iter().map(|value| {
        T::from_value(*value).ok_or(NumericError::TypeMismatch {
            expected: T::KIND,
            found: value.type_name(),
        })
    });

    let first = typed.next().ok_or(NumericError::ArityError)??;
    let mut list = ArgumentList::new(first);
    for value in typed {
        list.push(value?);
    }

    list.fold(policy).map(T::into_value)
}

/// Fixed-point values of a runtime precision fold on their raw scaled
/// integers, which is exactly `FixedDecimal<D>` addition.
fn fold_fixed(values: &[Value], decimals: u8, policy: OverflowPolicy) -> NumericResult<Value> {
    let raws = values
        .iter()
        .map(|value| match *value {
            Value::Fixed { raw, decimals: d } if d == decimals => Ok(raw),
            other => Err(NumericError::TypeMismatch {
                expected: NumericKind::Fixed(decimals),
                found: other.type_name(),
            }),
        })
        .collect::<NumericResult<SmallVec<[i64; 8]>>>()?;

    let raw = ArgumentList::try_from_slice(&raws)?
        .fold(policy)
        .map_err(|_| NumericError::Overflow {
            kind: NumericKind::Fixed(decimals),
        })?;

    Ok(Value::Fixed { raw, decimals })
}

fn fold_as_kind(target: NumericKind, values: &[Value], policy: OverflowPolicy) -> NumericResult<Value> {
    match target {
        NumericKind::I8 => fold_typed::<i8>(values, policy),
        NumericKind::I16 => fold_typed::<i16>(values, policy),
        NumericKind::I32 => fold_typed::<i32>(values, policy),
        NumericKind::I64 => fold_typed::<i64>(values, policy),
        NumericKind::I128 => fold_typed::<i128>(values, policy),
        NumericKind::U8 => fold_typed::<u8>(values, policy),
        NumericKind::U16 => fold_typed::<u16>(values, policy),
        NumericKind::U32 => fold_typed::<u32>(values, policy),
        NumericKind::U64 => fold_typed::<u64>(values, policy),
        NumericKind::U128 => fold_typed::<u128>(values, policy),
        NumericKind::F32 => fold_typed::<f32>(values, policy),
        NumericKind::F64 => fold_typed::<f64>(values, policy),
        NumericKind::Fixed(decimals) => fold_fixed(values, decimals, policy),
    }
}
