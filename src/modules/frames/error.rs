//! Failure taxonomy for a frame extraction job.

use axum::http::StatusCode;
use thiserror::Error;

use crate::infrastructure::storage::StorageError;

pub const URL_REQUIRED: &str = "'url' is required";

#[derive(Debug, Error)]
pub enum FrameJobError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{tool} exited with status {}: {stderr}", exit_status_label(.exit_code))]
    ToolFailed {
        tool: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to launch {tool}: {message}")]
    ToolLaunch { tool: String, message: String },

    #[error("{tool} reported success but did not create {path}")]
    MissingOutput { tool: String, path: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_status_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

impl FrameJobError {
    pub fn missing_url() -> Self {
        Self::InvalidRequest(URL_REQUIRED.to_string())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn tool_failed(tool: impl Into<String>, exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    pub fn tool_launch(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolLaunch {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "client",
            Self::ToolFailed { .. } | Self::ToolLaunch { .. } | Self::MissingOutput { .. } => {
                "tool_invocation"
            }
            Self::Storage(_) => "storage",
            Self::Io(_) => "unknown",
        }
    }
}
