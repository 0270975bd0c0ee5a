use crate::config::env::{self, EnvKey};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origin: String,
    pub render: RenderSettings,
}

/// How the external rendering engine is invoked and where its files live.
///
/// The engine is called as
/// `<program> <source> <quality_flag> --format=<format> -o <output>`.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub staging_dir: PathBuf,
    pub program: String,
    pub quality_flag: String,
    pub format: String,
    pub script_extension: String,
    pub timeout: Duration,
    pub keep_artifacts: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from("renders"),
            program: "manim".to_string(),
            quality_flag: "-qm".to_string(),
            format: "mp4".to_string(),
            script_extension: "py".to_string(),
            timeout: Duration::from_secs(60),
            keep_artifacts: true,
        }
    }
}

impl RenderSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            staging_dir: PathBuf::from(env::get_or(EnvKey::StagingDir, "renders")),
            program: env::get_or(EnvKey::RenderProgram, &defaults.program),
            quality_flag: env::get_or(EnvKey::RenderQualityFlag, &defaults.quality_flag),
            format: env::get_or(EnvKey::RenderFormat, &defaults.format),
            script_extension: env::get_or(EnvKey::ScriptExtension, &defaults.script_extension),
            timeout: Duration::from_secs(env::get_parsed(EnvKey::RenderTimeoutSecs, 60)),
            keep_artifacts: env::get_parsed(EnvKey::KeepArtifacts, defaults.keep_artifacts),
        }
    }

    /// Content type announced for artifacts of the configured container.
    pub fn content_type(&self) -> String {
        mime_guess::from_ext(&self.format)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 8000),
            cors_allowed_origin: env::get_or(EnvKey::CorsAllowedOrigin, "http://localhost:3000"),
            render: RenderSettings::from_env(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
