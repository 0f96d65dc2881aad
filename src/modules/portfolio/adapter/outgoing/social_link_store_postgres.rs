use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err, optional_text};
use super::sea_orm_entity::social_links::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::SocialLinkDraft;
use crate::modules::portfolio::application::domain::entities::SocialLink;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

#[derive(Clone)]
pub struct SocialLinkStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialLinkStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<SocialLinkDraft> for SocialLinkStorePostgres {
    async fn list(&self, _visibility: Visibility) -> Result<Vec<SocialLink>, ContentStoreError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_link).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<SocialLink>, ContentStoreError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_link))
    }

    async fn insert(&self, draft: SocialLinkDraft) -> Result<SocialLink, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_link(saved))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: SocialLinkDraft,
    ) -> Result<SocialLink, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_link(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

fn draft_to_active(draft: SocialLinkDraft) -> ActiveModel {
    ActiveModel {
        platform: Set(draft.platform.trim().to_string()),
        url: Set(draft.url.trim().to_string()),
        icon: Set(optional_text(draft.icon)),
        label: Set(optional_text(draft.label)),
        ..Default::default()
    }
}

fn model_to_link(model: social_links::Model) -> SocialLink {
    SocialLink {
        id: model.id,
        platform: model.platform,
        url: model.url,
        icon: model.icon,
        label: model.label,
    }
}
