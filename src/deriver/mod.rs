// ============================================================================
// Deriver Module
// Derivation of per-period fixed-point constants from an annual rate
// ============================================================================

mod constant_deriver;

pub use constant_deriver::ConstantDeriver;
