//! `landing plan` command.

use std::path::Path;

use crate::plan::PlanDescriptor;

/// Execute the `plan` command.
///
/// Loads a plan descriptor file and prints whether the plan currently
/// entitles the organization to use the product.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or parsed.
pub fn run(file: &Path) -> Result<(), String> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read plan descriptor {}: {e}", file.display()))?;
    let descriptor: PlanDescriptor = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse plan descriptor {}: {e}", file.display()))?;

    if descriptor.is_active_for_use() {
        println!("active");
    } else {
        println!("inactive");
    }
    Ok(())
}
