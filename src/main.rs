// ============================================================================
// calc_inflation_constants
// One-shot generator for the chain's APR percent constant header lines
// ============================================================================

use apr_constgen::prelude::*;
use std::io::{self, Write};

fn run() -> Result<(), EmitError> {
    let deriver = ConstantDeriver::new(RateConfig::muse_mainnet());
    let schedule = PeriodSchedule::muse_default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    HeaderEmitter::new().emit_schedule(&mut out, &deriver, &schedule)?;
    out.flush()?;

    Ok(())
}

fn main() {
    // diagnostics go to stderr; stdout carries only the generated lines
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    if let Err(e) = run() {
        tracing::error!("constant generation failed: {}", e);
        std::process::exit(1);
    }
}
