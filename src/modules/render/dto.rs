use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RenderForm {
    /// Scene source handed to the rendering engine verbatim.
    #[validate(length(min = 1, message = "Scene code must not be empty"))]
    pub code: String,
}
