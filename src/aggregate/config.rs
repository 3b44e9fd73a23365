// ============================================================================
// Aggregator Configuration
// Overflow and conversion behavior of runtime-typed aggregation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What an integer or fixed-point fold does when it leaves the range of T.
///
/// Floating kinds ignore the policy and follow IEEE addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, T's native behavior
    #[default]
    Wrapping,
    /// Fail with `NumericError::Overflow`
    Checked,
    /// Clamp to T's minimum or maximum
    Saturating,
}

/// Which argument types are accepted besides T itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionPolicy {
    /// Lossless conversions to T are applied
    #[default]
    Widening,
    /// Only T itself; every other type is a mismatch, and lossy ones are
    /// still reported as narrowing
    Exact,
}

/// Configuration of a runtime [`Aggregator`](super::Aggregator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregatorConfig {
    pub overflow: OverflowPolicy,
    pub conversion: ConversionPolicy,
}

impl AggregatorConfig {
    /// Checked overflow, exact argument types
    pub fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Checked,
            conversion: ConversionPolicy::Exact,
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_conversion(mut self, conversion: ConversionPolicy) -> Self {
        self.conversion = conversion;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AggregatorConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);
        assert_eq!(config.conversion, ConversionPolicy::Widening);
    }

    #[test]
    fn test_strict_preset() {
        let config = AggregatorConfig::strict();
        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.conversion, ConversionPolicy::Exact);
    }

    #[test]
    fn test_builder_methods() {
        let config = AggregatorConfig::strict().with_overflow(OverflowPolicy::Saturating);
        assert_eq!(config.overflow, OverflowPolicy::Saturating);
        assert_eq!(config.conversion, ConversionPolicy::Exact);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let config = AggregatorConfig::strict();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"overflow":"Checked","conversion":"Exact"}"#);

        let parsed: AggregatorConfig =
            serde_json::from_str(r#"{"overflow":"Saturating","conversion":"Widening"}"#).unwrap();
        assert_eq!(parsed.overflow, OverflowPolicy::Saturating);
    }
}
