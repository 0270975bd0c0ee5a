use std::io::ErrorKind;
use std::process::{Output, Stdio};
use std::sync::Arc;
use std::time::Instant;

use tokio::fs::File;
use tokio::process::Command;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::error::RenderError;
use super::staging::{ScenePaths, StagedScene};
use crate::config::settings::RenderSettings;

/// An artifact ready to be streamed back to the client.
#[derive(Debug)]
pub struct RenderedVideo {
    pub file_name: String,
    pub content_type: String,
    pub len: u64,
    pub file: File,
}

/// Runs one scene through the external rendering engine per call.
#[derive(Clone, Debug)]
pub struct RenderService {
    settings: Arc<RenderSettings>,
}

impl RenderService {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Creates the staging directory if it is missing.
    pub async fn prepare(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.settings.staging_dir).await?;
        info!(dir = %self.settings.staging_dir.display(), "Staging directory ready");
        Ok(())
    }

    pub async fn render(&self, code: &str) -> Result<RenderedVideo, RenderError> {
        let started_at = Instant::now();
        let paths = ScenePaths::new(&self.settings, Uuid::new_v4());
        info!(render_id = %paths.id, source_bytes = code.len(), "🎬 Received scene source");
        debug!(render_id = %paths.id, code = %code, "Scene source");

        // Staged source lives until this function returns, on every path.
        let staged = StagedScene::write(paths, code).await?;
        let output = self.run_engine(&staged).await?;
        let paths = staged.paths();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                render_id = %paths.id,
                exit_code = output.status.code().unwrap_or(-1),
                elapsed_ms = started_at.elapsed().as_millis() as u64,
                stderr = %stderr,
                "Renderer rejected scene"
            );
            return Err(RenderError::Rejected { stderr });
        }

        let video = self.open_artifact(paths).await?;
        info!(
            render_id = %paths.id,
            artifact = %paths.output.display(),
            bytes = video.len,
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            "✅ Scene rendered"
        );
        Ok(video)
    }

    async fn run_engine(&self, staged: &StagedScene) -> Result<Output, RenderError> {
        let settings = &self.settings;
        let paths = staged.paths();

        let mut command = Command::new(&settings.program);
        command
            .arg(staged.source())
            .arg(&settings.quality_flag)
            .arg(format!("--format={}", settings.format))
            .arg("-o")
            .arg(&paths.output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Timeout and client disconnect both drop the child.
            .kill_on_drop(true);

        info!(render_id = %paths.id, program = %settings.program, "Launching renderer");
        let child = command.spawn().map_err(|source| {
            warn!(render_id = %paths.id, program = %settings.program, error = %source, "Failed to spawn renderer");
            RenderError::Spawn {
                program: settings.program.clone(),
                source,
            }
        })?;

        match tokio::time::timeout(settings.timeout, child.wait_with_output()).await {
            Ok(result) => {
                let output = result.map_err(RenderError::Supervise)?;
                debug!(
                    render_id = %paths.id,
                    stdout = %String::from_utf8_lossy(&output.stdout),
                    stderr = %String::from_utf8_lossy(&output.stderr),
                    "Renderer finished"
                );
                Ok(output)
            }
            Err(_) => {
                warn!(render_id = %paths.id, limit = ?settings.timeout, "⏱️ Renderer timed out, killed");
                Err(RenderError::TimedOut {
                    limit: settings.timeout,
                })
            }
        }
    }

    /// Zero exit status is not trusted on its own; the artifact must exist.
    async fn open_artifact(&self, paths: &ScenePaths) -> Result<RenderedVideo, RenderError> {
        let file = match File::open(&paths.output).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(render_id = %paths.id, artifact = %paths.output.display(), "Renderer exited cleanly without an artifact");
                return Err(RenderError::MissingArtifact);
            }
            Err(e) => return Err(RenderError::Artifact(e)),
        };
        let len = file.metadata().await.map_err(RenderError::Artifact)?.len();

        if !self.settings.keep_artifacts {
            // The open handle keeps the contents readable after unlinking.
            if let Err(e) = tokio::fs::remove_file(&paths.output).await {
                warn!(render_id = %paths.id, error = %e, "Failed to discard served artifact");
            }
        }

        Ok(RenderedVideo {
            file_name: paths.artifact_name(),
            content_type: self.settings.content_type(),
            len,
            file,
        })
    }
}
