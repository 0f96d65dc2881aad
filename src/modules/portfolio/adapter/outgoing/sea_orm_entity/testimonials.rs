use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(nullable)]
    pub position: Option<String>,

    #[sea_orm(nullable)]
    pub company: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub rating: i16,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    pub is_approved: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
