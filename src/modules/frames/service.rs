use super::dto::{ExtractFramesRequest, ExtractFramesResponse};
use super::error::FrameJobError;
use super::model::Job;
use super::workspace::ScratchWorkspace;
use crate::common::response::InvocationResponse;
use crate::state::AppState;
use crate::workers::FramePublisher;
use tracing::{debug, error, info, warn};

pub struct FrameService;

impl FrameService {
    /// Run one job and translate the outcome into the wire envelope.
    pub async fn invoke(state: &AppState, req: ExtractFramesRequest) -> InvocationResponse {
        match Self::process(state, req).await {
            Ok(res) => InvocationResponse::success(&res),
            Err(e) => InvocationResponse::error(e.status_code(), &e.to_string()),
        }
    }

    /// Same as [`invoke`](Self::invoke) for a raw JSON event.
    pub async fn invoke_event(state: &AppState, event: &str) -> InvocationResponse {
        match serde_json::from_str::<ExtractFramesRequest>(event) {
            Ok(req) => Self::invoke(state, req).await,
            Err(e) => {
                let err = FrameJobError::invalid_request(format!("Invalid event: {}", e));
                warn!("Rejected frame job request: {}", err);
                InvocationResponse::error(err.status_code(), &err.to_string())
            }
        }
    }

    pub fn validate(req: ExtractFramesRequest, default_frame_rate: &str) -> Result<Job, FrameJobError> {
        let url = req
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(FrameJobError::missing_url)?;

        let frame_rate = req
            .frame_rate
            .filter(|rate| !rate.is_empty())
            .unwrap_or_else(|| default_frame_rate.to_string());

        Ok(Job::new(url, frame_rate))
    }

    pub async fn process(
        state: &AppState,
        req: ExtractFramesRequest,
    ) -> Result<ExtractFramesResponse, FrameJobError> {
        let job = Self::validate(req, &state.config.frame_rate)
            .inspect_err(|e| warn!("Rejected frame job request: {}", e))?;

        info!(job_id = %job.id, url = %job.url, frame_rate = %job.frame_rate, "🎬 Frame job started");

        let workspace = ScratchWorkspace::acquire(state.config.scratch_dir.as_deref())
            .inspect_err(|e| error!(job_id = %job.id, "❌ Failed to create scratch workspace: {}", e))?;
        let outcome = Self::run_stages(state, &job, &workspace).await;
        workspace.release();

        let frames_uploaded = outcome.inspect_err(|e| {
            error!(job_id = %job.id, kind = e.kind(), "❌ Frame job failed: {}", e)
        })?;

        info!(job_id = %job.id, frames_uploaded, "✅ Frame job completed");

        Ok(ExtractFramesResponse {
            job_id: job.id,
            frames_uploaded,
            bucket: state.config.frame_bucket.clone(),
        })
    }

    async fn run_stages(
        state: &AppState,
        job: &Job,
        workspace: &ScratchWorkspace,
    ) -> Result<usize, FrameJobError> {
        let video = workspace.video_path();
        state.fetcher.fetch(&job.url, &video).await?;

        let frames = state
            .extractor
            .extract(&video, &workspace.frames_dir(), &job.frame_rate)
            .await?;

        if let (Some(fps), Some(last)) = (job.frames_per_second(), frames.last()) {
            debug!(job_id = %job.id, frames = frames.len(), last_at_secs = last.timestamp_secs(fps), "Frame sequence ready");
        }

        let uploaded = FramePublisher::new(state.storage.clone())
            .publish(job.id, &frames)
            .await?;

        Ok(uploaded)
    }
}
