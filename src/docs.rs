use utoipa::OpenApi;
use crate::common::response::ErrorBody;
use crate::modules::render::dto::RenderForm;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::modules::render::handler::render_scene,
    ),
    components(
        schemas(RenderForm, ErrorBody)
    ),
    tags(
        (name = "Render", description = "Scene to video rendering"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;
