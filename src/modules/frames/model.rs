use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Output template handed to ffmpeg; five digits keep lexical order == sequence order.
pub const FRAME_TEMPLATE: &str = "frame_%05d.jpg";
pub const FRAME_PREFIX: &str = "frame_";
pub const FRAME_EXTENSION: &str = "jpg";

#[derive(Debug, Clone)]
pub struct Job {
    pub id: Uuid,
    pub url: String,
    pub frame_rate: String,
}

impl Job {
    pub fn new(url: impl Into<String>, frame_rate: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            frame_rate: frame_rate.into(),
        }
    }

    /// Numeric rate when the string is a plain number or an `n/d` ratio.
    /// Anything else is left for ffmpeg to reject.
    pub fn frames_per_second(&self) -> Option<f64> {
        let rate = self.frame_rate.trim();
        let fps = match rate.split_once('/') {
            Some((num, den)) => {
                let num: f64 = num.trim().parse().ok()?;
                let den: f64 = den.trim().parse().ok()?;
                num / den
            }
            None => rate.parse().ok()?,
        };
        (fps.is_finite() && fps > 0.0).then_some(fps)
    }
}

/// One extracted still, e.g. `frame_00042.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: u32,
    pub path: PathBuf,
}

impl Frame {
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some(FRAME_EXTENSION) {
            return None;
        }
        let index = path
            .file_stem()?
            .to_str()?
            .strip_prefix(FRAME_PREFIX)?
            .parse()
            .ok()?;

        Some(Self {
            index,
            path: path.to_path_buf(),
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn timestamp_secs(&self, fps: f64) -> f64 {
        f64::from(self.index) / fps
    }
}
