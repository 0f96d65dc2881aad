use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{optional, required, ConfigError};
use crate::modules::auth::application::ports::outgoing::{OAuthClient, OAuthError};

/// `OAUTH_<PROVIDER>_*` settings for one authorization-code provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProviderConfig {
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub redirect_url: String,
    pub scope: String,
}

impl OAuthProviderConfig {
    pub fn from_env(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim().to_lowercase();
        let key = |suffix: &str| format!("OAUTH_{}_{}", name.to_uppercase(), suffix);

        Ok(Self {
            client_id: required(&key("CLIENT_ID"))?,
            client_secret: required(&key("CLIENT_SECRET"))?,
            authorize_url: required(&key("AUTHORIZE_URL"))?,
            token_url: required(&key("TOKEN_URL"))?,
            userinfo_url: required(&key("USERINFO_URL"))?,
            redirect_url: required(&key("REDIRECT_URL"))?,
            scope: optional(&key("SCOPE")).unwrap_or_else(|| "email".to_string()),
            name,
        })
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfo {
    email: Option<String>,
}

pub struct HttpOAuthClient {
    http: Client,
    providers: HashMap<String, OAuthProviderConfig>,
}

impl HttpOAuthClient {
    pub fn new(providers: Vec<OAuthProviderConfig>) -> Result<Self, OAuthError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent("portfolio-backend")
            .build()
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?;

        Ok(Self {
            http,
            providers: providers
                .into_iter()
                .map(|p| (p.name.clone(), p))
                .collect(),
        })
    }

    fn provider(&self, name: &str) -> Result<&OAuthProviderConfig, OAuthError> {
        self.providers
            .get(name)
            .ok_or_else(|| OAuthError::UnknownProvider(name.to_string()))
    }
}

#[async_trait]
impl OAuthClient for HttpOAuthClient {
    fn authorize_url(&self, provider: &str, state: &str) -> Result<String, OAuthError> {
        let config = self.provider(provider)?;

        let url = reqwest::Url::parse_with_params(
            &config.authorize_url,
            &[
                ("response_type", "code"),
                ("client_id", config.client_id.as_str()),
                ("redirect_uri", config.redirect_url.as_str()),
                ("scope", config.scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| OAuthError::ExchangeFailed(format!("bad authorize url: {e}")))?;

        Ok(url.to_string())
    }

    async fn fetch_email(&self, provider: &str, code: &str) -> Result<String, OAuthError> {
        let config = self.provider(provider)?;

        let token: TokenResponse = self
            .http
            .post(&config.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", config.redirect_url.as_str()),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!("OAuth token exchange with {} failed: {}", provider, e);
                OAuthError::ExchangeFailed(e.to_string())
            })?
            .json()
            .await
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?;

        let info: UserInfo = self
            .http
            .get(&config.userinfo_url)
            .bearer_auth(&token.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?;

        debug!("OAuth user info received from {}", provider);
        info.email
            .filter(|e| !e.trim().is_empty())
            .ok_or(OAuthError::MissingEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> OAuthProviderConfig {
        OAuthProviderConfig {
            name: "github".into(),
            client_id: "client-1".into(),
            client_secret: "secret".into(),
            authorize_url: "https://github.com/login/oauth/authorize".into(),
            token_url: "https://github.com/login/oauth/access_token".into(),
            userinfo_url: "https://api.github.com/user".into(),
            redirect_url: "https://example.com/api/auth/oauth/github/callback".into(),
            scope: "user:email".into(),
        }
    }

    #[test]
    fn test_authorize_url_carries_parameters() {
        let client = HttpOAuthClient::new(vec![github()]).unwrap();
        let url = client.authorize_url("github", "state-token").unwrap();
        let parsed = reqwest::Url::parse(&url).unwrap();
        let params: HashMap<String, String> = parsed.query_pairs().into_owned().collect();

        assert_eq!(parsed.host_str(), Some("github.com"));
        assert_eq!(params["client_id"], "client-1");
        assert_eq!(params["state"], "state-token");
        assert_eq!(params["scope"], "user:email");
        assert_eq!(params["response_type"], "code");
    }

    #[test]
    fn test_unknown_provider() {
        let client = HttpOAuthClient::new(vec![github()]).unwrap();
        assert_eq!(
            client.authorize_url("gitlab", "s").unwrap_err(),
            OAuthError::UnknownProvider("gitlab".into())
        );
    }

    #[test]
    fn test_config_reads_prefixed_variables() {
        for (suffix, value) in [
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("AUTHORIZE_URL", "https://a.example.com"),
            ("TOKEN_URL", "https://t.example.com"),
            ("USERINFO_URL", "https://u.example.com"),
            ("REDIRECT_URL", "https://r.example.com"),
        ] {
            std::env::set_var(format!("OAUTH_TESTPROV_{suffix}"), value);
        }

        let config = OAuthProviderConfig::from_env("TestProv").unwrap();
        assert_eq!(config.name, "testprov");
        assert_eq!(config.client_id, "id");
        assert_eq!(config.scope, "email");
    }
}
