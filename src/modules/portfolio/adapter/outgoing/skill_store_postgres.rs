use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err};
use super::sea_orm_entity::skills::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::SkillDraft;
use crate::modules::portfolio::application::domain::entities::Skill;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

#[derive(Clone)]
pub struct SkillStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<SkillDraft> for SkillStorePostgres {
    async fn list(&self, _visibility: Visibility) -> Result<Vec<Skill>, ContentStoreError> {
        let rows = Entity::find()
            .order_by_asc(Column::Category)
            .order_by_desc(Column::Level)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_skill).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Skill>, ContentStoreError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_skill))
    }

    async fn insert(&self, draft: SkillDraft) -> Result<Skill, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_skill(saved))
    }

    async fn update(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_skill(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

fn draft_to_active(draft: SkillDraft) -> ActiveModel {
    ActiveModel {
        name: Set(draft.name.trim().to_string()),
        category: Set(draft.category.trim().to_string()),
        level: Set(draft.level),
        ..Default::default()
    }
}

fn model_to_skill(model: skills::Model) -> Skill {
    Skill {
        id: model.id,
        name: model.name,
        category: model.category,
        level: model.level,
    }
}
