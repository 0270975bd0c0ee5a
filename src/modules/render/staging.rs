use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use super::error::RenderError;
use crate::config::settings::RenderSettings;

const FILE_PREFIX: &str = "scene";

/// Files belonging to one render request, namespaced by a fresh UUID.
#[derive(Debug, Clone)]
pub struct ScenePaths {
    pub id: Uuid,
    pub source: PathBuf,
    pub output: PathBuf,
}

impl ScenePaths {
    pub fn new(settings: &RenderSettings, id: Uuid) -> Self {
        let stem = format!("{FILE_PREFIX}_{id}");
        Self {
            id,
            source: settings
                .staging_dir
                .join(format!("{stem}.{}", settings.script_extension)),
            output: settings.staging_dir.join(format!("{stem}.{}", settings.format)),
        }
    }

    /// Name suggested to the client for the artifact.
    pub fn artifact_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{FILE_PREFIX}_{}", self.id))
    }
}

/// Owns the staged source file and removes it when dropped.
///
/// Dropping happens on every exit from a render: success, error, timeout,
/// and cancellation of the request future.
#[derive(Debug)]
pub struct StagedScene {
    paths: ScenePaths,
}

impl StagedScene {
    pub async fn write(paths: ScenePaths, code: &str) -> Result<Self, RenderError> {
        // Guard exists before the write so a partial file is still removed.
        let staged = Self { paths };
        tokio::fs::write(&staged.paths.source, code)
            .await
            .map_err(RenderError::Stage)?;
        debug!(path = %staged.paths.source.display(), bytes = code.len(), "Staged scene source");
        Ok(staged)
    }

    pub fn paths(&self) -> &ScenePaths {
        &self.paths
    }

    pub fn source(&self) -> &Path {
        &self.paths.source
    }
}

impl Drop for StagedScene {
    fn drop(&mut self) {
        // Blocking unlink on purpose: Drop cannot await, and it is one small file.
        match std::fs::remove_file(&self.paths.source) {
            Ok(()) => debug!(path = %self.paths.source.display(), "Removed staged scene source"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.paths.source.display(),
                error = %e,
                "Failed to remove staged scene source"
            ),
        }
    }
}
