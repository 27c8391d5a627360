use super::dto::ExtractFramesRequest;
use super::service::FrameService;
use crate::common::response::InvocationResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::warn;

/// Extract frames from a video
/// Downloads the video, samples stills at the requested rate and uploads them
/// under a fresh job id. The HTTP status mirrors `statusCode` in the envelope.
#[utoipa::path(
    post,
    path = "/api/v1/frames",
    request_body = ExtractFramesRequest,
    responses(
        (status = 200, description = "Frames uploaded; body holds jobId, framesUploaded, bucket", body = InvocationResponse),
        (status = 400, description = "Missing url or malformed request", body = InvocationResponse),
        (status = 500, description = "Download, extraction or upload failed", body = InvocationResponse)
    ),
    tag = "Frames"
)]
pub async fn extract_frames(
    State(state): State<AppState>,
    payload: Result<Json<ExtractFramesRequest>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(req)) => FrameService::invoke(&state, req).await,
        Err(rejection) => {
            warn!("Rejected frame job request: {}", rejection.body_text());
            InvocationResponse::error(StatusCode::BAD_REQUEST, &rejection.body_text())
        }
    }
}
