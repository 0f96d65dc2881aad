pub mod content_editor;
pub mod dataset_loader;

pub use content_editor::{AdminError, ContentEditor};
pub use dataset_loader::AdminDatasetLoader;
