use axum::Router;
use axum::routing::post;
use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod model;
pub mod service;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

pub fn router() -> Router<AppState> {
    Router::new().route("/frames", post(handler::extract_frames))
}
