// ============================================================================
// Argument List
// Ordered, nonempty, single-typed sequence built from call-site arguments
// ============================================================================

use super::config::OverflowPolicy;
use crate::numeric::{Numeric, NumericError, NumericResult};
use smallvec::SmallVec;

/// Arguments stored inline before spilling to the heap
const INLINE_ARGS: usize = 8;

/// Call-site arguments of one numeric type, in call order.
///
/// Always holds at least one value: the only constructors take a mandatory
/// first argument or reject an empty slice.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentList<T: Numeric> {
    values: SmallVec<[T; INLINE_ARGS]>,
}

impl<T: Numeric> ArgumentList<T> {
    pub fn new(first: T) -> Self {
        let mut values = SmallVec::new();
        values.push(first);
        Self { values }
    }

    /// `[first] ++ rest`, preserving order.
    pub fn with_rest<I>(first: T, rest: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new(first);
        list.values.extend(rest);
        list
    }

    /// # Errors
    /// Returns `ArityError` for an empty slice.
    pub fn try_from_slice(values: &[T]) -> NumericResult<Self> {
        match values.split_first() {
            Some((first, rest)) => Ok(Self::with_rest(*first, rest.iter().copied())),
            None => Err(NumericError::ArityError),
        }
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn first(&self) -> T {
        self.values[0]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Left-to-right fold seeded with `T::ZERO`, using T's native addition.
    pub fn sum(&self) -> T {
        self.values
            .iter()
            .fold(T::ZERO, |acc, value| acc.wrapping_accumulate(*value))
    }

    /// Left-to-right fold under the given overflow policy.
    ///
    /// # Errors
    /// Returns `Overflow` under `OverflowPolicy::Checked` when an
    /// intermediate sum leaves T's range.
    pub fn fold(&self, policy: OverflowPolicy) -> NumericResult<T> {
        match policy {
            OverflowPolicy::Wrapping => Ok(self.sum()),
            OverflowPolicy::Saturating => Ok(self
                .values
                .iter()
                .fold(T::ZERO, |acc, value| acc.saturating_accumulate(*value))),
            OverflowPolicy::Checked => self.values.iter().try_fold(T::ZERO, |acc, value| {
                acc.checked_accumulate(*value)
                    .ok_or(NumericError::Overflow { kind: T::KIND })
            }),
        }
    }
}

impl<T: Numeric> Extend<T> for ArgumentList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
