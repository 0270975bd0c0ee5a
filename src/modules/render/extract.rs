use axum::{
    extract::{FromRequest, Multipart, Request},
    http::{header, StatusCode},
    Form,
};
use validator::Validate;

use super::dto::RenderForm;
use crate::common::response::ApiError;

/// Reads the `code` field from either a url-encoded or a multipart form.
pub struct SceneSource(pub RenderForm);

impl<S> FromRequest<S> for SceneSource
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let form = if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|r| ApiError(r.body_text(), r.status()))?;
            read_multipart(multipart).await?
        } else {
            let Form(form) = Form::<RenderForm>::from_request(req, state)
                .await
                .map_err(|r| ApiError(r.body_text(), r.status()))?;
            form
        };

        form.validate()
            .map_err(|e| ApiError(e.to_string(), StatusCode::UNPROCESSABLE_ENTITY))?;

        Ok(Self(form))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<RenderForm, ApiError> {
    let mut code = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError(e.body_text(), e.status()))?
    {
        if field.name() == Some("code") {
            code = Some(field.text().await.map_err(|e| ApiError(e.body_text(), e.status()))?);
        }
    }

    code.map(|code| RenderForm { code }).ok_or_else(|| {
        ApiError(
            "Missing form field `code`".to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
    })
}
