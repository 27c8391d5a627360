use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Invocation result: a status code plus a string body. Success bodies are
/// JSON-encoded payloads; failure bodies are the plain error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn success<T>(payload: &T) -> Self
    where
        T: Serialize,
    {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code: StatusCode::OK.as_u16(),
                body,
            },
            Err(e) => Self::error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
        }
    }

    pub fn error(status: StatusCode, message: &str) -> Self {
        Self {
            status_code: status.as_u16(),
            body: message.to_string(),
        }
    }
}

impl IntoResponse for InvocationResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
