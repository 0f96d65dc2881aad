use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err, optional_text};
use super::sea_orm_entity::about_sections::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::AboutDraft;
use crate::modules::portfolio::application::domain::entities::AboutSection;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

/// The site renders the most recently updated row; older rows are kept for editing.
#[derive(Clone)]
pub struct AboutStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<AboutDraft> for AboutStorePostgres {
    async fn list(&self, _visibility: Visibility) -> Result<Vec<AboutSection>, ContentStoreError> {
        let rows = Entity::find()
            .order_by_desc(Column::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_about).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<AboutSection>, ContentStoreError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_about))
    }

    async fn insert(&self, draft: AboutDraft) -> Result<AboutSection, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_about(saved))
    }

    async fn update(&self, id: Uuid, draft: AboutDraft) -> Result<AboutSection, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_about(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

fn draft_to_active(draft: AboutDraft) -> ActiveModel {
    ActiveModel {
        title: Set(draft.title.trim().to_string()),
        content: Set(draft.content),
        tagline: Set(optional_text(draft.tagline)),
        footer_bio: Set(optional_text(draft.footer_bio)),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

fn model_to_about(model: about_sections::Model) -> AboutSection {
    AboutSection {
        id: model.id,
        title: model.title,
        content: model.content,
        tagline: model.tagline,
        footer_bio: model.footer_bio,
    }
}
