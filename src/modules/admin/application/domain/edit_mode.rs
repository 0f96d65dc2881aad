use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Whether a submitted draft creates a row or replaces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Create,
    Edit(Uuid),
}

impl EditMode {
    pub fn id(&self) -> Option<Uuid> {
        match self {
            EditMode::Create => None,
            EditMode::Edit(id) => Some(*id),
        }
    }
}

/// A draft plus the id it was copied from. `id` is `None` in create mode.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DraftForm<D> {
    pub id: Option<Uuid>,
    pub draft: D,
}

impl<D> DraftForm<D> {
    pub fn mode(&self) -> EditMode {
        match self.id {
            Some(id) => EditMode::Edit(id),
            None => EditMode::Create,
        }
    }
}
