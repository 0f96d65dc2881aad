use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::profiles::{
    Column as ProfileColumn, Entity as ProfileEntity, Model as ProfileModel,
};
use crate::modules::auth::application::domain::entities::Profile;
use crate::modules::auth::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_profile(model: ProfileModel) -> Profile {
        Profile {
            id: model.id,
            email: model.email,
            display_name: model.display_name,
            password_hash: model.password_hash,
            is_admin: model.is_admin,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ProfileQueryError> {
        let profile = ProfileEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        Ok(profile.map(Self::map_to_profile))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, ProfileQueryError> {
        // Matches the lower(email) unique index
        let profile = ProfileEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(ProfileColumn::Email)))
                    .eq(email.trim().to_lowercase()),
            )
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        Ok(profile.map(Self::map_to_profile))
    }
}
