use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OAuthError {
    #[error("OAuth provider {0} is not configured")]
    UnknownProvider(String),

    #[error("Code exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Provider did not return an email address")]
    MissingEmail,
}

#[async_trait]
pub trait OAuthClient: Send + Sync {
    /// Where to send the browser to start the flow.
    fn authorize_url(&self, provider: &str, state: &str) -> Result<String, OAuthError>;

    /// Exchanges the callback code and returns the verified account email.
    async fn fetch_email(&self, provider: &str, code: &str) -> Result<String, OAuthError>;
}
