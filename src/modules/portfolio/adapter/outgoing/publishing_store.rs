use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::drafts::{ContentDraft, ContentRecord};
use crate::modules::portfolio::application::ports::outgoing::{
    ChangeEvent, ChangeFeed, ChangeKind, ContentStore, ContentStoreError, ContentStores,
    SharedStore, Visibility,
};

/// Wraps a store and announces every successful write on the change feed.
/// Reads pass straight through.
pub struct PublishingStore<D>
where
    D: ContentDraft,
{
    inner: SharedStore<D>,
    feed: Arc<dyn ChangeFeed>,
}

impl<D> PublishingStore<D>
where
    D: ContentDraft,
{
    pub fn new(inner: SharedStore<D>, feed: Arc<dyn ChangeFeed>) -> Self {
        Self { inner, feed }
    }

    fn shared(inner: SharedStore<D>, feed: &Arc<dyn ChangeFeed>) -> SharedStore<D> {
        Arc::new(Self::new(inner, feed.clone()))
    }

    fn announce(&self, kind: ChangeKind, id: Uuid) {
        self.feed
            .publish(ChangeEvent::now(<D::Record as ContentRecord>::TABLE, kind, id));
    }
}

#[async_trait]
impl<D> ContentStore<D> for PublishingStore<D>
where
    D: ContentDraft,
{
    async fn list(&self, visibility: Visibility) -> Result<Vec<D::Record>, ContentStoreError> {
        self.inner.list(visibility).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<D::Record>, ContentStoreError> {
        self.inner.find(id).await
    }

    async fn insert(&self, draft: D) -> Result<D::Record, ContentStoreError> {
        let record = self.inner.insert(draft).await?;
        self.announce(ChangeKind::Insert, record.id());
        Ok(record)
    }

    async fn update(&self, id: Uuid, draft: D) -> Result<D::Record, ContentStoreError> {
        let record = self.inner.update(id, draft).await?;
        self.announce(ChangeKind::Update, record.id());
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        self.inner.delete(id).await?;
        self.announce(ChangeKind::Delete, id);
        Ok(())
    }
}

/// Every table announces its writes on the same feed.
pub fn publishing_stores(stores: ContentStores, feed: Arc<dyn ChangeFeed>) -> ContentStores {
    ContentStores {
        projects: PublishingStore::shared(stores.projects, &feed),
        experience: PublishingStore::shared(stores.experience, &feed),
        skills: PublishingStore::shared(stores.skills, &feed),
        certificates: PublishingStore::shared(stores.certificates, &feed),
        achievements: PublishingStore::shared(stores.achievements, &feed),
        testimonials: PublishingStore::shared(stores.testimonials, &feed),
        social_links: PublishingStore::shared(stores.social_links, &feed),
        about: PublishingStore::shared(stores.about, &feed),
    }
}
