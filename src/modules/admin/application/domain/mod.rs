pub mod admin_dataset;
pub mod admin_entity;
pub mod edit_mode;

pub use admin_dataset::AdminDataset;
pub use admin_entity::{AdminEntity, UnknownEntity};
pub use edit_mode::{DraftForm, EditMode};
