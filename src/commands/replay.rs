//! `landing replay` command.

use std::path::Path;

use crate::trace::DecisionTrace;

/// Execute the `replay` command.
///
/// Loads a recorded decision trace, re-runs the resolver on its inputs,
/// and reports whether the recorded destination reproduces. A mismatch is
/// an error so CI can use the exit code.
///
/// # Errors
///
/// Returns an error string if the trace cannot be loaded or the recorded
/// destination no longer reproduces.
pub fn run(file: &Path) -> Result<(), String> {
    let trace = DecisionTrace::load(file)?;
    let outcome = trace.replay();
    if outcome.reproduced() {
        println!("Trace {}: {} reproduced", trace.id, outcome.recorded.path());
        Ok(())
    } else {
        Err(format!(
            "Trace {}: recorded {} but current rules resolve {}",
            trace.id,
            outcome.recorded.path(),
            outcome.resolved.path()
        ))
    }
}
