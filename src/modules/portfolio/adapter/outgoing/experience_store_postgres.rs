use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err, parse_stored};
use super::sea_orm_entity::experiences::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::ExperienceDraft;
use crate::modules::portfolio::application::domain::entities::Experience;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

#[derive(Clone)]
pub struct ExperienceStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<ExperienceDraft> for ExperienceStorePostgres {
    /// Most recent first.
    async fn list(&self, _visibility: Visibility) -> Result<Vec<Experience>, ContentStoreError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_experience).collect()
    }

    async fn find(&self, id: Uuid) -> Result<Option<Experience>, ContentStoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_experience)
            .transpose()
    }

    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_experience(saved)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        model_to_experience(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

fn draft_to_active(draft: ExperienceDraft) -> ActiveModel {
    ActiveModel {
        position: Set(draft.position.trim().to_string()),
        organization: Set(draft.organization.trim().to_string()),
        start_date: Set(draft.start_date),
        end_date: Set(draft.end_date),
        description: Set(draft.description),
        experience_type: Set(draft.experience_type.as_str().to_string()),
        ..Default::default()
    }
}

fn model_to_experience(model: experiences::Model) -> Result<Experience, ContentStoreError> {
    Ok(Experience {
        id: model.id,
        position: model.position,
        organization: model.organization,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        experience_type: parse_stored(&model.experience_type)?,
    })
}
