use std::sync::Arc;
use tracing::warn;

use crate::modules::media::application::domain::convert_google_drive_url;
use crate::modules::media::application::ports::outgoing::ImageHost;

/// Normalises pasted image links and optionally copies them to an image host.
pub struct ImageRehoster {
    host: Option<Arc<dyn ImageHost>>,
}

impl ImageRehoster {
    pub fn new(host: Option<Arc<dyn ImageHost>>) -> Self {
        Self { host }
    }

    pub fn convert(&self, url: &str) -> String {
        convert_google_drive_url(url)
    }

    /// Never fails: any problem returns `url` exactly as given.
    pub async fn rehost(&self, url: &str) -> String {
        if url.trim().is_empty() {
            return url.to_string();
        }

        let converted = self.convert(url);
        let Some(host) = &self.host else {
            return converted;
        };

        match host.rehost(&converted).await {
            Ok(hosted) => hosted,
            Err(e) => {
                warn!(error = %e, %url, "Image rehosting failed, keeping original URL");
                url.to_string()
            }
        }
    }
}
