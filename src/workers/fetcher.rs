//! Video download using yt-dlp.

use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use super::command::ToolCommand;
use crate::modules::frames::error::FrameJobError;

/// Best combined stream, falling back to the best single file.
const FORMAT_SELECTOR: &str = "bestvideo+bestaudio/best";

#[async_trait]
pub trait VideoFetcher: Send + Sync {
    /// Download `url` to exactly `dest`.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), FrameJobError>;
}

pub struct YtDlpFetcher {
    binary: String,
}

impl YtDlpFetcher {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn command(&self, url: &str, dest: &Path) -> ToolCommand {
        ToolCommand::new("yt-dlp", self.binary.clone())
            .arg("--quiet")
            .arg("--no-warnings")
            .arg("--no-progress")
            .arg("-f")
            .arg(FORMAT_SELECTOR)
            .arg("--merge-output-format")
            .arg("mp4")
            .arg("-o")
            .path_arg(dest)
            .arg("--")
            .arg(url)
    }
}

#[async_trait]
impl VideoFetcher for YtDlpFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), FrameJobError> {
        info!(url = %url, output = %dest.display(), "⬇️ Downloading video");

        self.command(url, dest).run().await?;

        let metadata = tokio::fs::metadata(dest).await.map_err(|_| FrameJobError::MissingOutput {
            tool: "yt-dlp".to_string(),
            path: dest.display().to_string(),
        })?;

        info!(
            output = %dest.display(),
            size_mb = metadata.len() as f64 / (1024.0 * 1024.0),
            "Downloaded video"
        );
        Ok(())
    }
}
