use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err, optional_text};
use super::sea_orm_entity::testimonials::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::TestimonialDraft;
use crate::modules::portfolio::application::domain::entities::Testimonial;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

#[derive(Clone)]
pub struct TestimonialStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<TestimonialDraft> for TestimonialStorePostgres {
    async fn list(&self, visibility: Visibility) -> Result<Vec<Testimonial>, ContentStoreError> {
        let mut query = Entity::find();
        if visibility == Visibility::Public {
            query = query.filter(Column::IsApproved.eq(true));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_testimonial).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Testimonial>, ContentStoreError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_testimonial))
    }

    async fn insert(&self, draft: TestimonialDraft) -> Result<Testimonial, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_testimonial(saved))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: TestimonialDraft,
    ) -> Result<Testimonial, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_testimonial(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

fn draft_to_active(draft: TestimonialDraft) -> ActiveModel {
    ActiveModel {
        name: Set(draft.name.trim().to_string()),
        position: Set(optional_text(draft.position)),
        company: Set(optional_text(draft.company)),
        content: Set(draft.content),
        rating: Set(draft.rating),
        image_url: Set(optional_text(draft.image_url)),
        is_approved: Set(draft.is_approved),
        ..Default::default()
    }
}

fn model_to_testimonial(model: testimonials::Model) -> Testimonial {
    Testimonial {
        id: model.id,
        name: model.name,
        position: model.position,
        company: model.company,
        content: model.content,
        rating: model.rating,
        image_url: model.image_url,
        is_approved: model.is_approved,
        created_at: model.created_at.into(),
    }
}
