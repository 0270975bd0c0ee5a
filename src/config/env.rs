use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerHost,
    ServerPort,
    CorsAllowedOrigin,
    StagingDir,
    RenderProgram,
    RenderQualityFlag,
    RenderFormat,
    ScriptExtension,
    RenderTimeoutSecs,
    KeepArtifacts,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerHost => "APP_HOST",
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::CorsAllowedOrigin => "CORS_ALLOWED_ORIGIN",
            EnvKey::StagingDir => "RENDER_STAGING_DIR",
            EnvKey::RenderProgram => "RENDER_PROGRAM",
            EnvKey::RenderQualityFlag => "RENDER_QUALITY_FLAG",
            EnvKey::RenderFormat => "RENDER_FORMAT",
            EnvKey::ScriptExtension => "RENDER_SCRIPT_EXTENSION",
            EnvKey::RenderTimeoutSecs => "RENDER_TIMEOUT_SECS",
            EnvKey::KeepArtifacts => "RENDER_KEEP_ARTIFACTS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
