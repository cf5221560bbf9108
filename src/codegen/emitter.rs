// ============================================================================
// Header Emitter
// Renders derived constant pairs as C preprocessor definitions
// ============================================================================

use crate::deriver::ConstantDeriver;
use crate::domain::PeriodSchedule;
use crate::numeric::{ConstantPair, DeriveError};
use std::fmt;
use std::io::{self, Write};

// ============================================================================
// Emit Error
// ============================================================================

/// Errors that can occur while emitting the generated header lines.
#[derive(Debug)]
pub enum EmitError {
    /// A constant pair could not be derived
    Derive(DeriveError),
    /// The output sink failed
    Io(io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::Derive(e) => write!(f, "derivation failed: {}", e),
            EmitError::Io(e) => write!(f, "output failed: {}", e),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Derive(e) => Some(e),
            EmitError::Io(e) => Some(e),
        }
    }
}

impl From<DeriveError> for EmitError {
    fn from(e: DeriveError) -> Self {
        EmitError::Derive(e)
    }
}

impl From<io::Error> for EmitError {
    fn from(e: io::Error) -> Self {
        EmitError::Io(e)
    }
}

// ============================================================================
// Header Emitter
// ============================================================================

/// Writes `#define` lines for every period in a schedule.
///
/// For each period label two lines are emitted, in schedule order:
///
/// ```text
/// #define MUSE_APR_PERCENT_MULTIPLY_PER_DAY (0x369c2966a19c8ULL)
/// #define MUSE_APR_PERCENT_SHIFT_PER_DAY 76
/// ```
///
/// All pairs are derived before the first byte is written, so a failing
/// period never leaves partial output behind.
#[derive(Debug, Clone)]
pub struct HeaderEmitter {
    prefix: String,
    provenance: bool,
}

impl HeaderEmitter {
    /// Default macro name prefix.
    pub const DEFAULT_PREFIX: &'static str = "MUSE_APR_PERCENT";

    /// Create an emitter with the default prefix and no provenance comment.
    pub fn new() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
            provenance: false,
        }
    }

    /// Builder method: override the macro name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder method: prepend a comment recording the rate and scale the
    /// constants were derived from.
    pub fn with_provenance_comment(mut self) -> Self {
        self.provenance = true;
        self
    }

    /// Render one derived pair as its two `#define` lines.
    pub fn emit_pair<W: Write>(
        &self,
        writer: &mut W,
        label: &str,
        pair: ConstantPair,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "#define {}_MULTIPLY_PER_{} (0x{:x}ULL)",
            self.prefix, label, pair.multiplier
        )?;
        writeln!(
            writer,
            "#define {}_SHIFT_PER_{} {}",
            self.prefix, label, pair.shift
        )
    }

    /// Derive and emit the whole schedule.
    ///
    /// # Errors
    /// - `Derive` if validation or any derivation fails; nothing is written
    /// - `Io` if the sink fails mid-write
    pub fn emit_schedule<W: Write>(
        &self,
        writer: &mut W,
        deriver: &ConstantDeriver,
        schedule: &PeriodSchedule,
    ) -> Result<(), EmitError> {
        let pairs = deriver.derive_schedule(schedule)?;

        if self.provenance {
            writeln!(writer, "// generated for {}", deriver.config())?;
        }
        for (label, pair) in &pairs {
            self.emit_pair(writer, label, *pair)?;
        }

        Ok(())
    }
}

impl Default for HeaderEmitter {
    fn default() -> Self {
        Self::new()
    }
}
