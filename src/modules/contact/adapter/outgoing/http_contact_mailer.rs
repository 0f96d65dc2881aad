use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::modules::contact::application::domain::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::{ContactMailer, ContactMailerError};

/// Hands the submission to a mail-sending function endpoint.
pub struct HttpContactMailer {
    http: Client,
    endpoint_url: String,
    token: String,
}

impl HttpContactMailer {
    pub fn new(endpoint_url: &str, token: &str) -> Result<Self, ContactMailerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ContactMailerError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            endpoint_url: endpoint_url.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl ContactMailer for HttpContactMailer {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactMailerError> {
        let response = self
            .http
            .post(&self.endpoint_url)
            .bearer_auth(&self.token)
            .json(submission)
            .send()
            .await
            .map_err(|e| ContactMailerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContactMailerError::Rejected(format!("{status}: {body}")));
        }

        debug!(%status, "Contact notification accepted");
        Ok(())
    }
}
