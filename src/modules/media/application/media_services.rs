use std::sync::Arc;

use super::services::{ImageRehoster, ImageUploader};

#[derive(Clone)]
pub struct MediaServices {
    pub uploader: Arc<ImageUploader>,
    pub rehoster: Arc<ImageRehoster>,
}
