use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    FrameBucket,
    FrameRate,
    S3Endpoint,
    S3Region,
    S3AccessKey,
    S3SecretKey,
    YtDlpBin,
    FfmpegBin,
    ScratchDir,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::FrameBucket => "FRAME_BUCKET",
            EnvKey::FrameRate => "FRAME_RATE",
            EnvKey::S3Endpoint => "S3_ENDPOINT",
            EnvKey::S3Region => "AWS_REGION",
            EnvKey::S3AccessKey => "AWS_ACCESS_KEY_ID",
            EnvKey::S3SecretKey => "AWS_SECRET_ACCESS_KEY",
            EnvKey::YtDlpBin => "YTDLP_BIN",
            EnvKey::FfmpegBin => "FFMPEG_BIN",
            EnvKey::ScratchDir => "SCRATCH_DIR",
        }
    }
}

/// Optional variable. Absent is `None`; present but not unicode is an error.
pub fn get_opt(key: EnvKey) -> Result<Option<String>, env::VarError> {
    match env::var(key.as_str()) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn get_or(key: EnvKey, default: &str) -> Result<String, env::VarError> {
    Ok(get_opt(key)?.unwrap_or_else(|| default.to_string()))
}

pub fn get_path(key: EnvKey) -> Option<PathBuf> {
    env::var_os(key.as_str()).map(PathBuf::from)
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match env::var(key.as_str()) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
