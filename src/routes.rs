use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::config::settings::AppConfig;
use crate::docs::ApiDoc;
use axum::http::HeaderValue;
use axum::Router;
use crate::state::AppState;
use tracing::warn;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn configure_routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes())
        .merge(crate::modules::render::router())
        .layer(cors_layer(&config.cors_allowed_origin))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(health))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String)
    ),
    tag = "Health"
)]
pub async fn health() -> &'static str {
    "ok"
}

// Wildcards are not allowed together with credentials, so methods and
// headers mirror the preflight request instead.
fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::list([value]),
        Err(e) => {
            warn!(origin, error = %e, "Invalid CORS origin, cross-origin requests will be refused");
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
