use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::contacts::{self, ActiveModel, Column, Entity};
use crate::modules::contact::application::domain::{ContactMessage, ContactSubmission};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ContactRepositoryError::NotFound,
        other => ContactRepositoryError::DatabaseError(other.to_string()),
    }
}

fn to_message(model: contacts::Model) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        message: model.message,
        created_at: model.created_at.into(),
        read: model.read,
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(submission.name().to_string()),
            email: Set(submission.email().to_string()),
            message: Set(submission.message().to_string()),
            read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_message(saved))
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Read)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_message).collect())
    }

    async fn set_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let model = ActiveModel {
            id: Unchanged(id),
            read: Set(read),
            ..Default::default()
        };

        let saved = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(to_message(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}
