use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err, optional_text};
use super::sea_orm_entity::achievements::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::AchievementDraft;
use crate::modules::portfolio::application::domain::entities::Achievement;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

#[derive(Clone)]
pub struct AchievementStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<AchievementDraft> for AchievementStorePostgres {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Achievement>, ContentStoreError> {
        let mut query = Entity::find();
        if visibility == Visibility::Public {
            query = query.filter(Column::IsApproved.eq(true));
        }

        let rows = query
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_achievement).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Achievement>, ContentStoreError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_achievement))
    }

    async fn insert(&self, draft: AchievementDraft) -> Result<Achievement, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_achievement(saved))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: AchievementDraft,
    ) -> Result<Achievement, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_achievement(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

fn draft_to_active(draft: AchievementDraft) -> ActiveModel {
    ActiveModel {
        title: Set(draft.title.trim().to_string()),
        description: Set(draft.description),
        date: Set(draft.date),
        image_url: Set(optional_text(draft.image_url)),
        is_approved: Set(draft.is_approved),
        awarded_by: Set(optional_text(draft.awarded_by)),
        ..Default::default()
    }
}

fn model_to_achievement(model: achievements::Model) -> Achievement {
    Achievement {
        id: model.id,
        title: model.title,
        description: model.description,
        date: model.date,
        image_url: model.image_url,
        is_approved: model.is_approved,
        awarded_by: model.awarded_by,
    }
}
