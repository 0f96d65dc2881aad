use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::ImageHostConfig;
use crate::modules::media::application::ports::outgoing::{ImageHost, ImageHostError};

/// imgbb-style upload API: form fields `key` and `image`, hosted URL at `data.url`.
pub struct HttpImageHost {
    http: Client,
    config: ImageHostConfig,
}

impl HttpImageHost {
    pub fn new(config: ImageHostConfig) -> Result<Self, ImageHostError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| ImageHostError::RequestFailed(e.to_string()))?;

        Ok(Self { http, config })
    }
}

fn hosted_url(body: &Value) -> Result<String, ImageHostError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(ImageHostError::Rejected(message.to_string()));
    }

    body.pointer("/data/url")
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .ok_or(ImageHostError::InvalidResponse)
}

#[async_trait]
impl ImageHost for HttpImageHost {
    async fn rehost(&self, source_url: &str) -> Result<String, ImageHostError> {
        let response = self
            .http
            .post(&self.config.upload_url)
            .form(&[("key", self.config.api_key.as_str()), ("image", source_url)])
            .send()
            .await
            .map_err(|e| ImageHostError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|_| ImageHostError::InvalidResponse)?;

        if !status.is_success() {
            return Err(hosted_url(&body)
                .err()
                .unwrap_or_else(|| ImageHostError::Rejected(status.to_string())));
        }

        let url = hosted_url(&body)?;
        debug!(%url, "Image rehosted");
        Ok(url)
    }
}
