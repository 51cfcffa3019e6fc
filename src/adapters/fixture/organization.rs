//! Fixture adapters for the `OrganizationSource` port.

use std::path::{Path, PathBuf};

use crate::org::OrganizationState;
use crate::ports::organization::{OrganizationFuture, OrganizationSource};
use crate::ports::PortError;

/// Organization source that parses a YAML snapshot file on every lookup.
///
/// Used by the CLI when `--org FILE` is given. A missing or malformed file
/// is an error, not an absent snapshot; absence is expressed by omitting
/// the flag (which wires a [`StaticOrganizationSource`] holding `None`).
pub struct FileOrganizationSource {
    path: PathBuf,
}

impl FileOrganizationSource {
    /// Creates a source reading from the given YAML file.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl OrganizationSource for FileOrganizationSource {
    fn current(&self) -> OrganizationFuture<'_> {
        Box::pin(async move {
            let contents = std::fs::read_to_string(&self.path).map_err(|e| -> PortError {
                format!("Failed to read organization snapshot {}: {e}", self.path.display())
                    .into()
            })?;
            let state: OrganizationState =
                serde_yaml::from_str(&contents).map_err(|e| -> PortError {
                    format!(
                        "Failed to parse organization snapshot {}: {e}",
                        self.path.display()
                    )
                    .into()
                })?;
            Ok(Some(state))
        })
    }
}

/// Organization source that serves a fixed in-memory snapshot.
pub struct StaticOrganizationSource {
    state: Option<OrganizationState>,
}

impl StaticOrganizationSource {
    /// Creates a source serving the given snapshot (or absence).
    #[must_use]
    pub fn new(state: Option<OrganizationState>) -> Self {
        Self { state }
    }
}

impl OrganizationSource for StaticOrganizationSource {
    fn current(&self) -> OrganizationFuture<'_> {
        let state = self.state.clone();
        Box::pin(async move { Ok(state) })
    }
}
