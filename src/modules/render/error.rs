use crate::common::response::ApiError;
use axum::http::StatusCode;
use std::io;
use std::time::Duration;
use thiserror::Error;

pub const MISSING_ARTIFACT_MESSAGE: &str = "Video file not found after rendering.";

#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine exited non-zero; the message is its stderr, untouched.
    #[error("{stderr}")]
    Rejected { stderr: String },
    #[error("Rendering exceeded the {limit:?} time limit and was stopped.")]
    TimedOut { limit: Duration },
    #[error("{}", MISSING_ARTIFACT_MESSAGE)]
    MissingArtifact,
    #[error("failed to stage scene source: {0}")]
    Stage(#[source] io::Error),
    #[error("failed to launch renderer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed while waiting for renderer: {0}")]
    Supervise(#[source] io::Error),
    #[error("failed to open rendered artifact: {0}")]
    Artifact(#[source] io::Error),
}

impl RenderError {
    pub fn status(&self) -> StatusCode {
        match self {
            RenderError::Rejected { .. } | RenderError::TimedOut { .. } => StatusCode::BAD_REQUEST,
            RenderError::MissingArtifact => StatusCode::NOT_FOUND,
            RenderError::Stage(_)
            | RenderError::Spawn { .. }
            | RenderError::Supervise(_)
            | RenderError::Artifact(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        let status = err.status();
        ApiError(err.to_string(), status)
    }
}
