//! `landing navigate` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::navigator::Navigator;

/// Execute the `navigate` command.
///
/// Resolves the destination and performs the transition through the
/// context's navigation sink.
///
/// # Errors
///
/// Returns an error string if a snapshot lookup or the navigation fails.
pub fn run(org: Option<&Path>, config: Option<&Path>) -> Result<(), String> {
    let ctx = ServiceContext::from_files(org, config);
    let runtime = super::runtime()?;
    let outcome = runtime.block_on(Navigator::new(&ctx).go())?;
    println!("Arrived at {} (transition {})", outcome.path, outcome.transition_id);
    Ok(())
}
