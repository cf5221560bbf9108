// ============================================================================
// Numeric Module
// Fixed-point multiplier/shift pairs for integer-only inflation arithmetic
// ============================================================================
//
// This module provides:
// - ConstantPair: a (multiplier, shift) fixed-point factor representation
// - DeriveError: error types for derivation and application
//
// Design principles:
// - No floating-point operations at the point of use
// - All fallible arithmetic returns Result (no panics)
// - 128-bit intermediates for overflow-free products of 64-bit operands

mod constant_pair;
mod errors;

pub use constant_pair::ConstantPair;
pub use errors::{DeriveError, DeriveResult};
