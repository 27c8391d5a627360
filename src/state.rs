use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::storage::ObjectStore;
use crate::workers::{FrameExtractor, VideoFetcher};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: Arc<dyn VideoFetcher>,
    pub extractor: Arc<dyn FrameExtractor>,
    pub storage: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        fetcher: Arc<dyn VideoFetcher>,
        extractor: Arc<dyn FrameExtractor>,
        storage: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            config,
            fetcher,
            extractor,
            storage,
        }
    }
}
