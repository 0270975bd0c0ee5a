use crate::config::settings::AppConfig;
use crate::modules::render::service::RenderService;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub renderer: RenderService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let renderer = RenderService::new(config.render.clone());
        Self { config, renderer }
    }
}
