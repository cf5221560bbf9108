// ============================================================================
// Constant Pair
// Fixed-point multiplier/shift representation of a per-period growth rate
// ============================================================================

use super::errors::{DeriveError, DeriveResult};
use std::fmt;

/// A fixed-point multiplier/shift pair.
///
/// Represents a fractional scaling factor `multiplier / 2^shift` such that
/// for an input value `V`:
///
/// ```text
/// (V * multiplier) >> shift  ≈  V * factor
/// ```
///
/// with no floating-point arithmetic at the point of use. The deriver
/// produces the largest `multiplier` that keeps `value * multiplier` inside
/// 128 bits for any 64-bit `value`, maximizing the precision retained after
/// the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstantPair {
    /// Fixed-point multiplier, strictly below 2^64 / base_scale
    pub multiplier: u64,
    /// Right-shift paired with the multiplier
    pub shift: u32,
}

impl ConstantPair {
    /// The degenerate pair produced for a non-positive growth rate.
    pub const ZERO: Self = Self {
        multiplier: 0,
        shift: 0,
    };

    /// Create a pair from its parts.
    #[inline]
    pub const fn new(multiplier: u64, shift: u32) -> Self {
        Self { multiplier, shift }
    }

    /// Check whether this is the degenerate zero pair.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.multiplier == 0
    }

    /// Apply the pair to a value using integer-only arithmetic.
    ///
    /// Computes `(value * multiplier) >> shift` through a u128 intermediate,
    /// exactly the way consuming code is expected to evaluate the generated
    /// constants.
    ///
    /// # Errors
    /// Returns `MultiplierOverflow` if the shifted product does not fit in
    /// 64 bits (possible when the represented factor exceeds 1).
    #[inline]
    pub fn checked_apply(self, value: u64) -> DeriveResult<u64> {
        // a shift of 128 or more clears any 128-bit product
        if self.shift >= 128 {
            return Ok(0);
        }

        let product = (value as u128) * (self.multiplier as u128);
        let shifted = product >> self.shift;

        if shifted > u64::MAX as u128 {
            Err(DeriveError::MultiplierOverflow)
        } else {
            Ok(shifted as u64)
        }
    }
}

impl fmt::Display for ConstantPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(0x{:x} >> {})", self.multiplier, self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pair() {
        assert!(ConstantPair::ZERO.is_zero());
        assert_eq!(ConstantPair::ZERO.checked_apply(u64::MAX), Ok(0));
    }

    #[test]
    fn test_apply_halving() {
        // multiplier/2^shift == 1/2
        let half = ConstantPair::new(1 << 32, 33);
        assert_eq!(half.checked_apply(10).unwrap(), 5);
        assert_eq!(half.checked_apply(u64::MAX).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn test_apply_overflow() {
        // factor of 2^32 overflows u64 for large inputs
        let doubling = ConstantPair::new(u64::MAX, 31);
        assert_eq!(
            doubling.checked_apply(u64::MAX),
            Err(DeriveError::MultiplierOverflow)
        );
        // but small inputs are fine
        assert!(doubling.checked_apply(1).is_ok());
    }

    #[test]
    fn test_apply_oversized_shift() {
        // shifts at or past the width of the intermediate must not panic
        assert_eq!(ConstantPair::new(1, 128).checked_apply(42), Ok(0));
        assert_eq!(
            ConstantPair::new(u64::MAX, u32::MAX).checked_apply(u64::MAX),
            Ok(0)
        );
        // one below the cutoff still shifts the full product
        assert_eq!(ConstantPair::new(u64::MAX, 127).checked_apply(u64::MAX), Ok(1));
    }

    #[test]
    fn test_display() {
        let pair = ConstantPair::new(0x369c2966a19c8, 76);
        assert_eq!(pair.to_string(), "(0x369c2966a19c8 >> 76)");
    }
}
