use crate::config::env::{self, EnvKey};
use std::path::PathBuf;

pub const DEFAULT_FRAME_BUCKET: &str = "steez-video-frames";
pub const DEFAULT_FRAME_RATE: &str = "1";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub frame_bucket: String,
    pub frame_rate: String,
    pub s3_endpoint: Option<String>,
    pub s3_region: Option<String>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    pub ytdlp_bin: String,
    pub ffmpeg_bin: String,
    /// Parent of per-job scratch directories; system temp dir when unset.
    pub scratch_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            frame_bucket: env::get_or(EnvKey::FrameBucket, DEFAULT_FRAME_BUCKET)?,
            frame_rate: env::get_or(EnvKey::FrameRate, DEFAULT_FRAME_RATE)?,
            s3_endpoint: env::get_opt(EnvKey::S3Endpoint)?,
            s3_region: env::get_opt(EnvKey::S3Region)?,
            s3_access_key: env::get_opt(EnvKey::S3AccessKey)?,
            s3_secret_key: env::get_opt(EnvKey::S3SecretKey)?,
            ytdlp_bin: env::get_or(EnvKey::YtDlpBin, "yt-dlp")?,
            ffmpeg_bin: env::get_or(EnvKey::FfmpegBin, "ffmpeg")?,
            scratch_dir: env::get_path(EnvKey::ScratchDir),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            frame_bucket: DEFAULT_FRAME_BUCKET.to_string(),
            frame_rate: DEFAULT_FRAME_RATE.to_string(),
            s3_endpoint: None,
            s3_region: None,
            s3_access_key: None,
            s3_secret_key: None,
            ytdlp_bin: "yt-dlp".to_string(),
            ffmpeg_bin: "ffmpeg".to_string(),
            scratch_dir: None,
        }
    }
}
