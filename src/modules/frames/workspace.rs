//! Per-invocation scratch directory.

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

const VIDEO_FILE: &str = "video.mp4";
const FRAMES_DIR: &str = "frames";

/// Owns the scratch tree for one job. The tree is removed by [`release`](Self::release)
/// on normal paths and by `Drop` if the guard is dropped without it.
pub struct ScratchWorkspace {
    dir: TempDir,
}

impl ScratchWorkspace {
    pub fn acquire(root: Option<&Path>) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("frame-job-");

        let dir = match root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };

        debug!("Acquired scratch workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn video_path(&self) -> PathBuf {
        self.dir.path().join(VIDEO_FILE)
    }

    pub fn frames_dir(&self) -> PathBuf {
        self.dir.path().join(FRAMES_DIR)
    }

    pub fn release(self) {
        let path = self.path().to_path_buf();
        match self.dir.close() {
            Ok(()) => debug!("Released scratch workspace {}", path.display()),
            Err(e) => warn!("Failed to remove scratch workspace {}: {}", path.display(), e),
        }
    }
}
