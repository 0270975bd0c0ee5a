use super::dto::RenderForm;
use super::extract::SceneSource;
use super::service::RenderedVideo;
use crate::common::response::{ApiError, ErrorBody};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

/// Render a scene to video
///
/// Stages the posted source, runs the rendering engine on it and streams the
/// resulting video back.
#[utoipa::path(
    post,
    path = "/render",
    request_body(content = RenderForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Rendered video", body = Vec<u8>, content_type = "video/mp4"),
        (status = 400, description = "Renderer rejected the scene or timed out", body = ErrorBody),
        (status = 404, description = "Renderer produced no video", body = ErrorBody),
        (status = 422, description = "Missing or empty `code` field", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    ),
    tag = "Render"
)]
pub async fn render_scene(
    State(state): State<AppState>,
    SceneSource(form): SceneSource,
) -> impl IntoResponse {
    match state.renderer.render(&form.code).await {
        Ok(video) => video_response(video),
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn video_response(video: RenderedVideo) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", video.file_name);
    let body = Body::from_stream(ReaderStream::new(video.file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, video.content_type)
        .header(header::CONTENT_LENGTH, video.len)
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(body)
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
