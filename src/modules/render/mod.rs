use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod extract;
pub mod handler;
pub mod service;
pub mod staging;

pub fn router() -> Router<AppState> {
    // Scene sources are passed through without a size cap.
    Router::new()
        .route("/render", post(handler::render_scene))
        .layer(DefaultBodyLimit::disable())
}
