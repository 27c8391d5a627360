use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::infrastructure::storage::{ObjectStore, StorageResult};
use crate::modules::frames::model::Frame;

/// Uploads frames one at a time, in order. The first failure stops the run;
/// objects already written stay in the bucket.
pub struct FramePublisher {
    store: Arc<dyn ObjectStore>,
}

impl FramePublisher {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn publish(&self, job_id: Uuid, frames: &[Frame]) -> StorageResult<usize> {
        let mut uploaded = 0;
        for frame in frames {
            let key = frame_key(job_id, frame);
            self.store.upload_file(&frame.path, &key).await?;
            uploaded += 1;
        }

        info!(job_id = %job_id, uploaded, "⬆️ Uploaded frames");
        Ok(uploaded)
    }
}

pub fn frame_key(job_id: Uuid, frame: &Frame) -> String {
    format!("{}/{}", job_id, frame.file_name())
}
