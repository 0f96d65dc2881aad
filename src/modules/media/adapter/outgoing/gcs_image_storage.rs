use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::StorageConfig;
use crate::modules::media::application::ports::outgoing::{
    ImageStorage, ImageStorageError, StorageBucket,
};

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_storage_error(msg: &str) -> ImageStorageError {
    let m = msg.to_lowercase();

    if m.contains("404") || m.contains("not found") {
        ImageStorageError::NotFound
    } else if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        ImageStorageError::AccessDenied
    } else {
        ImageStorageError::Unavailable(msg.to_string())
    }
}

/// Seam over the google-cloud-storage clients so the adapter can be tested
/// without a bucket.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), String> {
        self.0
            .write_object(bucket_resource, object_name, bytes, content_type)
            .await
    }

    async fn delete_object(&self, bucket_resource: &str, object_name: &str) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

#[derive(Clone)]
pub struct GcsImageStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    config: StorageConfig,
}

impl GcsImageStorage {
    /// The client is built lazily on first use.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            config,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, ImageStorageError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok::<_, String>(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
            .map_err(ImageStorageError::Unavailable)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, config: StorageConfig) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            config,
        }
    }

    fn public_url(&self, bucket: StorageBucket, path: &str) -> String {
        format!("{}{}", self.public_prefix(bucket), path)
    }
}

#[async_trait]
impl ImageStorage for GcsImageStorage {
    async fn upload(
        &self,
        bucket: StorageBucket,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, ImageStorageError> {
        let client = self.get_client().await?;
        let resource = bucket_resource(self.config.bucket_name(bucket));

        client
            .write_object(&resource, path, bytes, content_type)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %resource, %path, "GCS upload failed");
                map_storage_error(&e)
            })?;

        Ok(self.public_url(bucket, path))
    }

    async fn remove(&self, bucket: StorageBucket, path: &str) -> Result<(), ImageStorageError> {
        let client = self.get_client().await?;
        let resource = bucket_resource(self.config.bucket_name(bucket));

        client
            .delete_object(&resource, path)
            .await
            .map_err(|e| map_storage_error(&e))
    }

    fn public_prefix(&self, bucket: StorageBucket) -> String {
        format!(
            "{}/{}/",
            self.config.public_base_url.trim_end_matches('/'),
            self.config.bucket_name(bucket)
        )
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new() -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e.to_string()
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e.to_string()
            })?;

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), String> {
        self.storage
            .write_object(bucket_resource.to_string(), object_name.to_string(), bytes)
            .set_content_type(content_type.to_string())
            .send_buffered()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_object(&self, bucket_resource: &str, object_name: &str) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())
    }
}
