//! Frame extraction using ffmpeg.

use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use super::command::ToolCommand;
use crate::modules::frames::error::FrameJobError;
use crate::modules::frames::model::{FRAME_TEMPLATE, Frame};

#[async_trait]
pub trait FrameExtractor: Send + Sync {
    /// Write stills sampled at `frame_rate` into `frames_dir` and return them in sequence order.
    async fn extract(
        &self,
        video: &Path,
        frames_dir: &Path,
        frame_rate: &str,
    ) -> Result<Vec<Frame>, FrameJobError>;
}

pub struct FfmpegExtractor {
    binary: String,
}

impl FfmpegExtractor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn command(&self, video: &Path, frames_dir: &Path, frame_rate: &str) -> ToolCommand {
        ToolCommand::new("ffmpeg", self.binary.clone())
            .arg("-hide_banner")
            .arg("-nostdin")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .path_arg(video)
            .arg("-vf")
            .arg(format!("fps={}", frame_rate))
            .path_arg(frames_dir.join(FRAME_TEMPLATE))
    }
}

#[async_trait]
impl FrameExtractor for FfmpegExtractor {
    async fn extract(
        &self,
        video: &Path,
        frames_dir: &Path,
        frame_rate: &str,
    ) -> Result<Vec<Frame>, FrameJobError> {
        tokio::fs::create_dir_all(frames_dir).await?;

        info!(video = %video.display(), frame_rate = %frame_rate, "🎞️ Extracting frames");
        self.command(video, frames_dir, frame_rate).run().await?;

        let frames = collect_frames(frames_dir).await?;
        info!(count = frames.len(), "Extracted frames");
        Ok(frames)
    }
}

/// Frame files in `dir`, in sequence order. Unrelated files are skipped.
pub async fn collect_frames(dir: &Path) -> Result<Vec<Frame>, FrameJobError> {
    let mut frames = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        if let Some(frame) = Frame::from_path(entry.path()) {
            frames.push(frame);
        }
    }

    frames.sort_by_key(|f| f.index);
    Ok(frames)
}
