// src/modules/portfolio/application/ports/outgoing/change_feed.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::ContentTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// Row-level change announcement. Carries no payload: receivers re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChangeEvent {
    pub table: ContentTable,
    pub kind: ChangeKind,
    pub record_id: Uuid,
    pub at: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn now(table: ContentTable, kind: ChangeKind, record_id: Uuid) -> Self {
        Self {
            table,
            kind,
            record_id,
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeNotice {
    Changed(ChangeEvent),
    /// The subscriber fell behind and `n` notices were dropped.
    Missed(u64),
}

#[async_trait]
pub trait ChangeSubscription: Send {
    /// `None` once the feed is closed.
    async fn next(&mut self) -> Option<ChangeNotice>;
}

pub trait ChangeFeed: Send + Sync {
    fn publish(&self, event: ChangeEvent);

    /// `None` subscribes to every table.
    fn subscribe(&self, table: Option<ContentTable>) -> Box<dyn ChangeSubscription>;
}
