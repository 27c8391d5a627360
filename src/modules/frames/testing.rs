//! Fakes for the pipeline seams.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::error::FrameJobError;
use super::model::Frame;
use crate::config::settings::AppConfig;
use crate::infrastructure::storage::{ObjectStore, StorageError, StorageResult};
use crate::state::AppState;
use crate::workers::extractor::collect_frames;
use crate::workers::{FrameExtractor, VideoFetcher};

pub fn test_state(
    scratch_root: &Path,
    fetcher: Arc<dyn VideoFetcher>,
    extractor: Arc<dyn FrameExtractor>,
    store: Arc<dyn ObjectStore>,
) -> AppState {
    let config = AppConfig {
        scratch_dir: Some(scratch_root.to_path_buf()),
        ..AppConfig::default()
    };
    AppState::new(config, fetcher, extractor, store)
}

/// Writes a placeholder video and remembers where.
#[derive(Default)]
pub struct FakeFetcher {
    pub destinations: Mutex<Vec<PathBuf>>,
    pub fail_with: Option<(i32, &'static str)>,
}

impl FakeFetcher {
    pub fn failing(exit_code: i32, stderr: &'static str) -> Self {
        Self {
            fail_with: Some((exit_code, stderr)),
            ..Default::default()
        }
    }

    pub fn destinations(&self) -> Vec<PathBuf> {
        self.destinations.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoFetcher for FakeFetcher {
    async fn fetch(&self, _url: &str, dest: &Path) -> Result<(), FrameJobError> {
        self.destinations.lock().unwrap().push(dest.to_path_buf());
        if let Some((code, stderr)) = self.fail_with {
            return Err(FrameJobError::tool_failed("yt-dlp", Some(code), stderr));
        }
        tokio::fs::write(dest, b"fake video content").await?;
        Ok(())
    }
}

/// Produces `frames` files named like ffmpeg would and records the rate it was asked for.
#[derive(Default)]
pub struct FakeExtractor {
    pub frames: u32,
    pub rates: Mutex<Vec<String>>,
    pub fail_with: Option<(i32, &'static str)>,
}

impl FakeExtractor {
    pub fn with_frames(frames: u32) -> Self {
        Self {
            frames,
            ..Default::default()
        }
    }

    pub fn failing(exit_code: i32, stderr: &'static str) -> Self {
        Self {
            fail_with: Some((exit_code, stderr)),
            ..Default::default()
        }
    }

    pub fn rates(&self) -> Vec<String> {
        self.rates.lock().unwrap().clone()
    }
}

#[async_trait]
impl FrameExtractor for FakeExtractor {
    async fn extract(
        &self,
        video: &Path,
        frames_dir: &Path,
        frame_rate: &str,
    ) -> Result<Vec<Frame>, FrameJobError> {
        self.rates.lock().unwrap().push(frame_rate.to_string());
        assert!(video.exists(), "extractor ran before the video was fetched");

        tokio::fs::create_dir_all(frames_dir).await?;
        if let Some((code, stderr)) = self.fail_with {
            return Err(FrameJobError::tool_failed("ffmpeg", Some(code), stderr));
        }
        for i in 1..=self.frames {
            tokio::fs::write(frames_dir.join(format!("frame_{:05}.jpg", i)), b"fakeframe").await?;
        }
        collect_frames(frames_dir).await
    }
}

/// In-memory object store; optionally fails once `fail_at` objects have been written.
#[derive(Default)]
pub struct RecordingStore {
    pub written: Mutex<Vec<String>>,
    pub fail_at: Option<usize>,
}

impl RecordingStore {
    pub fn failing_at(fail_at: usize) -> Self {
        Self {
            fail_at: Some(fail_at),
            ..Default::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn upload_file(&self, path: &Path, key: &str) -> StorageResult<()> {
        if !path.exists() {
            return Err(StorageError::read_failed(path.display().to_string(), "missing"));
        }
        let mut written = self.written.lock().unwrap();
        if Some(written.len()) == self.fail_at {
            return Err(StorageError::upload_failed(key, "SlowDown: reduce your request rate"));
        }
        written.push(key.to_string());
        Ok(())
    }
}
