use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tracing::{debug, info};

use super::{ObjectStore, StorageError, StorageResult};
use crate::config::settings::AppConfig;

// Region used when a custom endpoint is configured without one (MinIO ignores it).
const FALLBACK_REGION: &str = "us-east-1";

#[derive(Clone)]
pub struct StorageService {
    pub client: Client,
    pub bucket: String,
}

impl StorageService {
    pub async fn new(config: &AppConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.s3_region {
            loader = loader.region(Region::new(region.clone()));
        } else if config.s3_endpoint.is_some() {
            loader = loader.region(Region::new(FALLBACK_REGION));
        }
        let shared = loader.load().await;

        let mut builder = Builder::from(&shared);

        if let Some(endpoint) = &config.s3_endpoint {
            builder = builder
                .endpoint_url(endpoint)
                .force_path_style(true); // Required for MinIO
        }

        if let (Some(access_key), Some(secret_key)) =
            (&config.s3_access_key, &config.s3_secret_key)
        {
            let credentials = Credentials::new(access_key, secret_key, None, None, "static");
            builder = builder.credentials_provider(credentials);
        }

        let client = Client::from_conf(builder.build());

        info!(
            bucket = %config.frame_bucket,
            endpoint = config.s3_endpoint.as_deref().unwrap_or("aws"),
            "✅ S3 client configured"
        );

        Self {
            client,
            bucket: config.frame_bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for StorageService {
    async fn upload_file(&self, path: &Path, key: &str) -> StorageResult<()> {
        debug!("Uploading {} to {}/{}", path.display(), self.bucket, key);

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::read_failed(path.display().to_string(), e.to_string()))?;

        let content_type = mime_guess::from_path(path).first_or_octet_stream();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type.essence_str())
            .send()
            .await
            .map_err(|e| {
                StorageError::upload_failed(key, aws_sdk_s3::error::DisplayErrorContext(e).to_string())
            })?;

        Ok(())
    }
}
