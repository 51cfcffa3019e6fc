//! `landing resolve` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::routing::resolve_route;
use crate::trace::DecisionTrace;

/// Execute the `resolve` command.
///
/// Reads both snapshots once, resolves the destination, and prints its
/// path. With `--record`, also writes the decision as a trace file. No
/// navigation happens here.
///
/// # Errors
///
/// Returns an error string if a snapshot file cannot be loaded or the
/// trace cannot be written.
pub fn run(
    org: Option<&Path>,
    config: Option<&Path>,
    record: Option<&Path>,
) -> Result<(), String> {
    let ctx = ServiceContext::from_files(org, config);
    run_with_context(&ctx, record)
}

/// Execute the `resolve` command with the given service context.
///
/// # Errors
///
/// Returns an error string if a snapshot lookup fails or the trace cannot
/// be written.
pub fn run_with_context(ctx: &ServiceContext, record: Option<&Path>) -> Result<(), String> {
    let runtime = super::runtime()?;
    let (organization, server_config) = runtime.block_on(async {
        let organization = ctx
            .organization
            .current()
            .await
            .map_err(|e| format!("Failed to load organization snapshot: {e}"))?;
        let server_config = ctx
            .server_config
            .current()
            .await
            .map_err(|e| format!("Failed to load server-config snapshot: {e}"))?;
        Ok::<_, String>((organization, server_config))
    })?;

    let destination = resolve_route(organization.as_ref(), server_config.as_ref());
    println!("{}", destination.path());

    if let Some(path) = record {
        let trace = DecisionTrace::capture(ctx, organization, server_config, destination);
        trace.save(path)?;
        eprintln!("Trace saved to {}", path.display());
    }
    Ok(())
}
