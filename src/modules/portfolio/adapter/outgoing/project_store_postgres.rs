use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err, optional_text};
use super::sea_orm_entity::projects::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::ProjectDraft;
use crate::modules::portfolio::application::domain::entities::Project;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

#[derive(Clone)]
pub struct ProjectStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<ProjectDraft> for ProjectStorePostgres {
    async fn list(&self, _visibility: Visibility) -> Result<Vec<Project>, ContentStoreError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_project).collect()
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>, ContentStoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_project)
            .transpose()
    }

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, ContentStoreError> {
        let mut model = draft_to_active(draft)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_project(saved)
    }

    async fn update(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, ContentStoreError> {
        let mut model = draft_to_active(draft)?;
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        model_to_project(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn draft_to_active(draft: ProjectDraft) -> Result<ActiveModel, ContentStoreError> {
    let tags: Vec<String> = draft
        .tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let tags = serde_json::to_value(tags)
        .map_err(|e| ContentStoreError::SerializationError(e.to_string()))?;

    Ok(ActiveModel {
        title: Set(draft.title.trim().to_string()),
        description: Set(draft.description),
        image_url: Set(optional_text(draft.image_url)),
        tags: Set(tags),
        link: Set(optional_text(draft.link)),
        ..Default::default()
    })
}

fn model_to_project(model: projects::Model) -> Result<Project, ContentStoreError> {
    let tags: Vec<String> = serde_json::from_value(model.tags)
        .map_err(|e| ContentStoreError::SerializationError(e.to_string()))?;

    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        tags,
        link: model.link,
        created_at: model.created_at.into(),
    })
}

// ============================================================================
// Tests
// ============================================================================
