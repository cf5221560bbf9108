// ============================================================================
// Derivation Errors
// Error types for constant derivation and fixed-point application
// ============================================================================

use std::fmt;

/// Errors that can occur while deriving or applying a constant pair.
///
/// All of these are fatal: the generator either produces a complete set of
/// constants or terminates with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeriveError {
    /// Annual rate is non-finite or at/below -100%, outside the log1p domain
    InvalidRate,
    /// Base scale is zero
    InvalidScale,
    /// Period count is zero
    InvalidPeriods,
    /// Rounded multiplier does not fit in 64 bits
    MultiplierOverflow,
    /// Period label is empty
    EmptyLabel,
    /// Period label appears more than once in a schedule
    DuplicateLabel,
}

impl fmt::Display for DeriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeriveError::InvalidRate => {
                write!(f, "invalid rate: annual rate must be finite and above -100%")
            },
            DeriveError::InvalidScale => write!(f, "invalid scale: base scale must be positive"),
            DeriveError::InvalidPeriods => {
                write!(f, "invalid periods: period count must be positive")
            },
            DeriveError::MultiplierOverflow => {
                write!(f, "multiplier overflow: rounded multiplier exceeds 64 bits")
            },
            DeriveError::EmptyLabel => write!(f, "empty label: period labels must be non-empty"),
            DeriveError::DuplicateLabel => {
                write!(f, "duplicate label: period labels must be unique within a schedule")
            },
        }
    }
}

impl std::error::Error for DeriveError {}

/// Result type alias for derivation operations
pub type DeriveResult<T> = Result<T, DeriveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DeriveError::InvalidRate.to_string(),
            "invalid rate: annual rate must be finite and above -100%"
        );
        assert_eq!(
            DeriveError::MultiplierOverflow.to_string(),
            "multiplier overflow: rounded multiplier exceeds 64 bits"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DeriveError::InvalidRate, DeriveError::InvalidRate);
        assert_ne!(DeriveError::InvalidRate, DeriveError::InvalidPeriods);
    }
}
