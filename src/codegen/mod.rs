// ============================================================================
// Codegen Module
// Preprocessor-style rendering of derived constants
// ============================================================================

mod emitter;

pub use emitter::{EmitError, HeaderEmitter};
