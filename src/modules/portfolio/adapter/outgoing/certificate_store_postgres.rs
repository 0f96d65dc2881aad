use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::postgres_support::{ensure_deleted, map_db_err, optional_text, parse_stored};
use super::sea_orm_entity::certificates::{self, ActiveModel, Column, Entity};
use crate::modules::portfolio::application::domain::drafts::CertificateDraft;
use crate::modules::portfolio::application::domain::entities::Certificate;
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStore, ContentStoreError, Visibility,
};

#[derive(Clone)]
pub struct CertificateStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore<CertificateDraft> for CertificateStorePostgres {
    async fn list(&self, _visibility: Visibility) -> Result<Vec<Certificate>, ContentStoreError> {
        let rows = Entity::find()
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_certificate).collect()
    }

    async fn find(&self, id: Uuid) -> Result<Option<Certificate>, ContentStoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_certificate)
            .transpose()
    }

    async fn insert(&self, draft: CertificateDraft) -> Result<Certificate, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_certificate(saved)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: CertificateDraft,
    ) -> Result<Certificate, ContentStoreError> {
        let mut model = draft_to_active(draft);
        model.id = Unchanged(id);

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        model_to_certificate(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentStoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        ensure_deleted(result)
    }
}

fn draft_to_active(draft: CertificateDraft) -> ActiveModel {
    ActiveModel {
        title: Set(draft.title.trim().to_string()),
        issuer: Set(draft.issuer.trim().to_string()),
        date: Set(draft.date),
        description: Set(draft.description),
        image_url: Set(optional_text(draft.image_url)),
        certificate_type: Set(draft.certificate_type.as_str().to_string()),
        ..Default::default()
    }
}

fn model_to_certificate(model: certificates::Model) -> Result<Certificate, ContentStoreError> {
    Ok(Certificate {
        id: model.id,
        title: model.title,
        issuer: model.issuer,
        date: model.date,
        description: model.description,
        image_url: model.image_url,
        certificate_type: parse_stored(&model.certificate_type)?,
    })
}
