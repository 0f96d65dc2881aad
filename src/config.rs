use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;
use crate::modules::auth::adapter::outgoing::oauth_http_client::OAuthProviderConfig;
use crate::modules::media::application::ports::outgoing::StorageBucket;
use crate::modules::portfolio::application::services::DEFAULT_ABOUT_CACHE_TTL;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

/// Non-empty value or `Missing`.
pub fn required(key: &str) -> Result<String, ConfigError> {
    optional(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Unset and blank are the same thing.
pub fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_env_files() {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// `https://storage.googleapis.com` unless a CDN sits in front.
    pub public_base_url: String,
    pub projects_bucket: String,
    pub testimonials_bucket: String,
    /// Shared by certificates and achievements.
    pub certificates_bucket: String,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            public_base_url: optional("STORAGE_PUBLIC_BASE_URL")
                .unwrap_or_else(|| "https://storage.googleapis.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            projects_bucket: optional("STORAGE_BUCKET_PROJECTS")
                .unwrap_or_else(|| StorageBucket::Projects.default_name().to_string()),
            testimonials_bucket: optional("STORAGE_BUCKET_TESTIMONIALS")
                .unwrap_or_else(|| StorageBucket::Testimonials.default_name().to_string()),
            certificates_bucket: optional("STORAGE_BUCKET_CERTIFICATES")
                .unwrap_or_else(|| StorageBucket::Certificates.default_name().to_string()),
        })
    }

    pub fn bucket_name(&self, bucket: StorageBucket) -> &str {
        match bucket {
            StorageBucket::Projects => &self.projects_bucket,
            StorageBucket::Testimonials => &self.testimonials_bucket,
            StorageBucket::Certificates => &self.certificates_bucket,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactTransport {
    /// POST `{name, email, message}` with a bearer token.
    Http { endpoint_url: String, token: String },
    Smtp(SmtpConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub server: String,
    /// Plain connection without credentials (Mailpit and friends).
    pub local_port: Option<u16>,
    pub username: String,
    pub password: String,
    pub from: String,
    pub recipient: String,
}

impl ContactTransport {
    pub fn from_env() -> Result<Self, ConfigError> {
        let transport = optional("CONTACT_TRANSPORT").unwrap_or_else(|| "http".to_string());

        match transport.to_lowercase().as_str() {
            "http" => Ok(ContactTransport::Http {
                endpoint_url: required("CONTACT_ENDPOINT_URL")?,
                token: required("CONTACT_ENDPOINT_TOKEN")?,
            }),
            "smtp" => {
                let local_port = match optional("SMTP_LOCAL_PORT") {
                    Some(_) => Some(parse_or("SMTP_LOCAL_PORT", 1025u16)?),
                    None => None,
                };

                Ok(ContactTransport::Smtp(SmtpConfig {
                    server: required("SMTP_SERVER")?,
                    username: if local_port.is_some() {
                        optional("SMTP_USERNAME").unwrap_or_default()
                    } else {
                        required("SMTP_USERNAME")?
                    },
                    password: if local_port.is_some() {
                        optional("SMTP_PASSWORD").unwrap_or_default()
                    } else {
                        required("SMTP_PASSWORD")?
                    },
                    local_port,
                    from: required("EMAIL_FROM")?,
                    recipient: required("CONTACT_RECIPIENT")?,
                }))
            }
            other => Err(ConfigError::Invalid {
                key: "CONTACT_TRANSPORT".to_string(),
                reason: format!("expected http or smtp, got {other}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHostConfig {
    pub upload_url: String,
    pub api_key: String,
}

impl ImageHostConfig {
    /// Rehosting is optional; without a key URLs are only normalised.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            upload_url: optional("IMAGE_HOST_URL")
                .unwrap_or_else(|| "https://api.imgbb.com/1/upload".to_string()),
            api_key: optional("IMAGE_HOST_API_KEY")?,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Application config
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub jwt: JwtConfig,
    pub about_cache_ttl: Duration,
    pub storage: StorageConfig,
    pub contact: ContactTransport,
    pub image_host: Option<ImageHostConfig>,
    pub oauth_providers: Vec<OAuthProviderConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let about_ttl_secs = parse_or("ABOUT_CACHE_TTL_SECS", DEFAULT_ABOUT_CACHE_TTL.as_secs())?;

        let oauth_providers = optional("OAUTH_PROVIDERS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(OAuthProviderConfig::from_env)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080u16)?,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            jwt: JwtConfig::from_env()?,
            about_cache_ttl: Duration::from_secs(about_ttl_secs),
            storage: StorageConfig::from_env()?,
            contact: ContactTransport::from_env()?,
            image_host: ImageHostConfig::from_env(),
            oauth_providers,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
