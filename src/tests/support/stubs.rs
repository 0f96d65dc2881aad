use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Profile;
use crate::modules::auth::application::ports::outgoing::{
    OAuthClient, OAuthError, ProfileQuery, ProfileQueryError, TokenBlacklist, TokenBlacklistError,
};
use crate::modules::contact::application::domain::{ContactMessage, ContactSubmission};
use crate::modules::contact::application::ports::outgoing::{
    ContactMailer, ContactMailerError, ContactRepository, ContactRepositoryError,
};
use crate::modules::media::application::ports::outgoing::{
    ImageHost, ImageHostError, ImageStorage, ImageStorageError, StorageBucket,
};

// ============================ Auth =============================

#[derive(Default)]
pub struct MemoryTokenBlacklist {
    hashes: Mutex<HashMap<String, DateTime<Utc>>>,
    fail: bool,
}

impl MemoryTokenBlacklist {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn contains(&self, token_hash: &str) -> bool {
        self.hashes.lock().unwrap().contains_key(token_hash)
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl TokenBlacklist for MemoryTokenBlacklist {
    async fn blacklist(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        if self.fail {
            return Err(TokenBlacklistError::DatabaseError("blacklist offline".into()));
        }
        if expires_at <= Utc::now() {
            return Err(TokenBlacklistError::AlreadyExpired);
        }
        self.hashes
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), expires_at);
        Ok(())
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
        if self.fail {
            return Err(TokenBlacklistError::DatabaseError("blacklist offline".into()));
        }
        Ok(self.contains(token_hash))
    }
}

#[derive(Default)]
pub struct MemoryProfileQuery {
    profiles: Vec<Profile>,
}

impl MemoryProfileQuery {
    pub fn with_admin(email: &str, password_hash: Option<&str>) -> Self {
        Self {
            profiles: vec![profile(email, password_hash, true)],
        }
    }

    pub fn with_reader(email: &str) -> Self {
        Self {
            profiles: vec![profile(email, None, false)],
        }
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.profiles.clone()
    }
}

fn profile(email: &str, password_hash: Option<&str>, is_admin: bool) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        email: email.to_string(),
        display_name: email.split('@').next().unwrap_or(email).to_string(),
        password_hash: password_hash.map(str::to_string),
        is_admin,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl ProfileQuery for MemoryProfileQuery {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileQueryError> {
        Ok(self.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, ProfileQueryError> {
        Ok(self
            .profiles
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }
}

/// Knows `github` and `google`. Every code exchanges to the same email.
pub struct StubOAuthClient {
    email: String,
}

impl StubOAuthClient {
    pub fn returning(email: &str) -> Self {
        Self {
            email: email.to_string(),
        }
    }

    fn check(provider: &str) -> Result<(), OAuthError> {
        match provider {
            "github" | "google" => Ok(()),
            other => Err(OAuthError::UnknownProvider(other.to_string())),
        }
    }
}

#[async_trait]
impl OAuthClient for StubOAuthClient {
    fn authorize_url(&self, provider: &str, state: &str) -> Result<String, OAuthError> {
        Self::check(provider)?;
        Ok(format!("https://auth.example.com/{provider}?state={state}"))
    }

    async fn fetch_email(&self, provider: &str, _code: &str) -> Result<String, OAuthError> {
        Self::check(provider)?;
        Ok(self.email.clone())
    }
}

// ============================ Media =============================

#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub bucket: StorageBucket,
    pub path: String,
    pub bytes: Bytes,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryImageStorage {
    uploads: Mutex<Vec<StoredUpload>>,
    removals: Mutex<Vec<(StorageBucket, String)>>,
    error: Option<ImageStorageError>,
}

impl MemoryImageStorage {
    /// Every upload and removal fails with `error`.
    pub fn failing(error: ImageStorageError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn uploads(&self) -> Vec<StoredUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn removals(&self) -> Vec<(StorageBucket, String)> {
        self.removals.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for MemoryImageStorage {
    async fn upload(
        &self,
        bucket: StorageBucket,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, ImageStorageError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.uploads.lock().unwrap().push(StoredUpload {
            bucket,
            path: path.to_string(),
            bytes,
            content_type: content_type.to_string(),
        });
        Ok(format!("{}{path}", self.public_prefix(bucket)))
    }

    async fn remove(&self, bucket: StorageBucket, path: &str) -> Result<(), ImageStorageError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.removals
            .lock()
            .unwrap()
            .push((bucket, path.to_string()));
        Ok(())
    }

    fn public_prefix(&self, bucket: StorageBucket) -> String {
        format!("https://storage.test/{}/", bucket.default_name())
    }
}

pub struct StubImageHost {
    result: Result<String, ImageHostError>,
    requests: Mutex<Vec<String>>,
}

impl StubImageHost {
    pub fn returning(url: &str) -> Self {
        Self {
            result: Ok(url.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ImageHostError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageHost for StubImageHost {
    async fn rehost(&self, source_url: &str) -> Result<String, ImageHostError> {
        self.requests.lock().unwrap().push(source_url.to_string());
        self.result.clone()
    }
}

// ============================ Contact =============================

#[derive(Default)]
pub struct MemoryContactRepository {
    messages: Mutex<Vec<ContactMessage>>,
    fail: bool,
}

impl MemoryContactRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }

    fn guard(&self) -> Result<(), ContactRepositoryError> {
        if self.fail {
            return Err(ContactRepositoryError::DatabaseError(
                "contacts table offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        self.guard()?;
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: submission.name().to_string(),
            email: submission.email().to_string(),
            message: submission.message().to_string(),
            created_at: Utc::now(),
            read: false,
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        self.guard()?;
        let mut messages = self.messages();
        messages.sort_by(|a, b| {
            a.read
                .cmp(&b.read)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(messages)
    }

    async fn set_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        self.guard()?;
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ContactRepositoryError::NotFound)?;
        message.read = read;
        Ok(message.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        self.guard()?;
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingContactMailer {
    delivered: Mutex<Vec<ContactSubmission>>,
    error: Option<ContactMailerError>,
}

impl RecordingContactMailer {
    pub fn failing(error: ContactMailerError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn delivered(&self) -> Vec<ContactSubmission> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactMailer for RecordingContactMailer {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactMailerError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.delivered.lock().unwrap().push(submission.clone());
        Ok(())
    }
}
