// ============================================================================
// Constant Table
// Per-type memoized bindings of canonical constants
// ============================================================================

use super::definitions::{ConstantId, ConstantValue, MathConstant};
use crate::numeric::{parse_scaled, NumericError, NumericKind, NumericResult, Rounding, Value};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BindingKey {
    constant: ConstantId,
    kind: NumericKind,
}

/// Write-once slot holding the bit pattern of one binding
type Binding = Arc<OnceLock<NumericResult<u64>>>;

/// Thread-safe registry binding each (constant, numeric type) pair once.
///
/// The map lock only guards slot creation. Computation runs inside the
/// slot's `OnceLock`, so concurrent first requests for the same key compute
/// once and every caller reads the same bits, while requests for other keys
/// proceed independently.
#[derive(Debug, Default)]
pub struct ConstantTable {
    bindings: RwLock<HashMap<BindingKey, Binding>>,

    /// Number of times a binding was computed (instrumentation)
    computations: AtomicUsize,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound value of constant `C` at type `T`.
    ///
    /// # Panics
    /// Only if a registered canonical literal fails to parse, which the
    /// crate's own tests rule out for every supported type.
    pub fn get<C: MathConstant, T: ConstantValue>(&self) -> T {
        match self.try_get::<C, T>() {
            Ok(value) => value,
            Err(err) => panic!(
                "canonical literal for {} could not be bound as {}: {}",
                C::ID.name(),
                T::KIND,
                err
            ),
        }
    }

    /// Bound value of constant `C` at type `T`, surfacing binding errors.
    pub fn try_get<C: MathConstant, T: ConstantValue>(&self) -> NumericResult<T> {
        self.bind(C::ID, T::KIND).map(T::from_bits)
    }

    /// Runtime-keyed lookup.
    ///
    /// # Errors
    /// Returns `UnsupportedType` for integer kinds and for fixed precisions
    /// beyond `MAX_DECIMALS`; no binding is created.
    pub fn get_value(&self, constant: ConstantId, kind: NumericKind) -> NumericResult<Value> {
        let bits = self.bind(constant, kind)?;
        match kind {
            NumericKind::F32 => Ok(Value::F32(f32::from_bits(bits as u32))),
            NumericKind::F64 => Ok(Value::F64(f64::from_bits(bits))),
            NumericKind::Fixed(decimals) => Ok(Value::Fixed {
                raw: bits as i64,
                decimals,
            }),
            other => Err(NumericError::UnsupportedType {
                type_name: other.name(),
            }),
        }
    }

    /// Whether the pair has been computed.
    pub fn is_bound(&self, constant: ConstantId, kind: NumericKind) -> bool {
        self.bindings
            .read()
            .get(&BindingKey { constant, kind })
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of computed bindings.
    pub fn len(&self) -> usize {
        self.bindings
            .read()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total computations performed; equals `len()` when every key was
    /// computed exactly once.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Acquire)
    }

    fn bind(&self, constant: ConstantId, kind: NumericKind) -> NumericResult<u64> {
        if !kind.supports_constants() {
            return Err(NumericError::UnsupportedType {
                type_name: kind.name(),
            });
        }

        let key = BindingKey { constant, kind };
        let slot = self.slot(key);

        if let Some(bits) = slot.get() {
            tracing::trace!(constant = constant.name(), %kind, "constant cache hit");
            return *bits;
        }

        *slot.get_or_init(|| self.compute(key))
    }

    fn slot(&self, key: BindingKey) -> Binding {
        if let Some(slot) = self.bindings.read().get(&key) {
            return Arc::clone(slot);
        }

        // Another thread may have inserted between the two locks;
        // entry() keeps the first slot.
        let mut bindings = self.bindings.write();
        Arc::clone(bindings.entry(key).or_default())
    }

    fn compute(&self, key: BindingKey) -> NumericResult<u64> {
        self.computations.fetch_add(1, Ordering::AcqRel);

        let literal = key.constant.literal();
        let bits = match key.kind {
            NumericKind::F32 => f32::from_literal(literal).map(ConstantValue::to_bits),
            NumericKind::F64 => f64::from_literal(literal).map(ConstantValue::to_bits),
            NumericKind::Fixed(decimals) => {
                parse_scaled(literal, decimals, Rounding::HalfUp).map(|raw| raw as u64)
            },
            other => Err(NumericError::UnsupportedType {
                type_name: other.name(),
            }),
        };

        match &bits {
            Ok(_) => tracing::debug!(
                constant = key.constant.name(),
                kind = %key.kind,
                "bound canonical constant"
            ),
            Err(err) => tracing::debug!(
                constant = key.constant.name(),
                kind = %key.kind,
                error = %err,
                "failed to bind canonical constant"
            ),
        }

        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::definitions::{Euler, Pi};
    use crate::numeric::FixedDecimal;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_first_request_computes_once() {
        let table = ConstantTable::new();
        assert!(table.is_empty());

        let first: f64 = table.get::<Pi, f64>();
        let second: f64 = table.get::<Pi, f64>();

        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(first, std::f64::consts::PI);
        assert_eq!(table.computations(), 1);
        assert!(table.is_bound(ConstantId::Pi, NumericKind::F64));
        assert!(!table.is_bound(ConstantId::Pi, NumericKind::F32));
    }

    #[test]
    fn test_types_bind_independently() {
        let table = ConstantTable::new();

        let narrow: f32 = table.get::<Pi, f32>();
        let wide: f64 = table.get::<Pi, f64>();
        let fixed: FixedDecimal<4> = table.get::<Pi, FixedDecimal<4>>();

        assert_eq!(narrow, std::f32::consts::PI);
        assert!((f64::from(narrow) - wide).abs() < 1e-6);
        assert_eq!(fixed.raw_value(), 31_416);
        assert_eq!(table.len(), 3);
        assert_eq!(table.computations(), 3);
    }

    #[test]
    fn test_constants_bind_independently() {
        let table = ConstantTable::new();
        let pi: f64 = table.get::<Pi, f64>();
        let e: f64 = table.get::<Euler, f64>();
        assert_ne!(pi, e);
        assert_eq!(e, std::f64::consts::E);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_value_shares_typed_binding() {
        let table = ConstantTable::new();
        let typed: FixedDecimal<9> = table.get::<Pi, FixedDecimal<9>>();
        let dynamic = table.get_value(ConstantId::Pi, NumericKind::Fixed(9)).unwrap();

        assert_eq!(
            dynamic,
            Value::Fixed {
                raw: typed.raw_value(),
                decimals: 9
            }
        );
        assert_eq!(table.computations(), 1);
    }

    #[test]
    fn test_integer_kinds_unsupported() {
        let table = ConstantTable::new();
        assert_eq!(
            table.get_value(ConstantId::Pi, NumericKind::I32),
            Err(NumericError::UnsupportedType { type_name: "i32" })
        );
        assert!(table.is_empty());
        assert_eq!(table.computations(), 0);
    }

    #[test]
    fn test_out_of_range_fixed_precision_unsupported() {
        let table = ConstantTable::new();
        assert_eq!(
            table.get_value(ConstantId::Pi, NumericKind::Fixed(19)),
            Err(NumericError::UnsupportedType { type_name: "fixed" })
        );
        assert!(table.is_empty());
        assert_eq!(table.computations(), 0);

        let widest = table.get_value(ConstantId::Pi, NumericKind::Fixed(18)).unwrap();
        assert_eq!(
            widest,
            Value::Fixed {
                raw: 3_141_592_653_589_793_238,
                decimals: 18
            }
        );
    }

    #[test]
    fn test_concurrent_first_requests_compute_once() {
        const THREADS: usize = 16;

        let table = ConstantTable::new();
        let barrier = Barrier::new(THREADS);

        let results: Vec<u64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        table.get::<Pi, f64>().to_bits()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(table.computations(), 1);
        assert_eq!(table.len(), 1);
        assert!(results.iter().all(|bits| *bits == std::f64::consts::PI.to_bits()));
    }

    #[test]
    fn test_concurrent_mixed_keys() {
        let table = ConstantTable::new();
        let barrier = Barrier::new(8);

        thread::scope(|scope| {
            for i in 0..8 {
                let table = &table;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    if i % 2 == 0 {
                        let _: f32 = table.get::<Pi, f32>();
                    } else {
                        let _: FixedDecimal<6> = table.get::<Pi, FixedDecimal<6>>();
                    }
                });
            }
        });

        assert_eq!(table.computations(), 2);
        assert_eq!(table.len(), 2);
    }
}
