//! Fixture adapters for the `ServerConfigSource` port.

use std::path::{Path, PathBuf};

use crate::org::ServerConfigState;
use crate::ports::server_config::{ServerConfigFuture, ServerConfigSource};
use crate::ports::PortError;

/// Server-config source that parses a YAML snapshot file on every lookup.
pub struct FileServerConfigSource {
    path: PathBuf,
}

impl FileServerConfigSource {
    /// Creates a source reading from the given YAML file.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl ServerConfigSource for FileServerConfigSource {
    fn current(&self) -> ServerConfigFuture<'_> {
        Box::pin(async move {
            let contents = std::fs::read_to_string(&self.path).map_err(|e| -> PortError {
                format!("Failed to read server-config snapshot {}: {e}", self.path.display())
                    .into()
            })?;
            let state: ServerConfigState =
                serde_yaml::from_str(&contents).map_err(|e| -> PortError {
                    format!(
                        "Failed to parse server-config snapshot {}: {e}",
                        self.path.display()
                    )
                    .into()
                })?;
            Ok(Some(state))
        })
    }
}

/// Server-config source that serves a fixed in-memory snapshot.
pub struct StaticServerConfigSource {
    state: Option<ServerConfigState>,
}

impl StaticServerConfigSource {
    /// Creates a source serving the given snapshot (or absence).
    #[must_use]
    pub fn new(state: Option<ServerConfigState>) -> Self {
        Self { state }
    }
}

impl ServerConfigSource for StaticServerConfigSource {
    fn current(&self) -> ServerConfigFuture<'_> {
        let state = self.state;
        Box::pin(async move { Ok(state) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_source_parses_billing_flag() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        std::fs::write(file.path(), "billing_enabled: true\n").expect("write fixture");

        let source = FileServerConfigSource::new(file.path());
        let snapshot = source.current().await.expect("lookup succeeds").expect("present");
        assert!(snapshot.billing_enabled);
    }

    #[tokio::test]
    async fn static_source_serves_absence() {
        let source = StaticServerConfigSource::new(None);
        assert!(source.current().await.expect("lookup succeeds").is_none());
    }
}
