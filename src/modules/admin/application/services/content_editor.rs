use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::admin::application::domain::{DraftForm, EditMode};
use crate::modules::media::application::domain::{ImageUpload, ImageUploadError};
use crate::modules::media::application::ports::outgoing::StorageBucket;
use crate::modules::media::application::services::{ImageUploader, MediaError};
use crate::modules::portfolio::application::domain::drafts::{
    Approvable, ContentDraft, ContentRecord, DraftError,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ContentStoreError, SharedStore,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] DraftError),

    #[error("Draft does not match the content type: {0}")]
    InvalidDraft(String),

    #[error(transparent)]
    Image(#[from] ImageUploadError),

    #[error("This content type has no image")]
    ImageNotSupported,

    #[error("Record not found")]
    NotFound,

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error(transparent)]
    Store(ContentStoreError),
}

impl From<ContentStoreError> for AdminError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::NotFound => AdminError::NotFound,
            other => AdminError::Store(other),
        }
    }
}

/// Create, edit and delete for one content table, including its stored image.
///
/// Nothing is rolled back: an upload followed by a failed row write leaves the
/// blob behind.
pub struct ContentEditor<D: ContentDraft> {
    store: SharedStore<D>,
    uploader: Arc<ImageUploader>,
    bucket: Option<StorageBucket>,
}

impl<D: ContentDraft> ContentEditor<D> {
    pub fn new(
        store: SharedStore<D>,
        uploader: Arc<ImageUploader>,
        bucket: Option<StorageBucket>,
    ) -> Self {
        Self {
            store,
            uploader,
            bucket,
        }
    }

    async fn existing(&self, id: Uuid) -> Result<D::Record, AdminError> {
        self.store.find(id).await?.ok_or(AdminError::NotFound)
    }

    /// Edit mode: a copy of the stored record.
    pub async fn load_draft(&self, id: Uuid) -> Result<DraftForm<D>, AdminError> {
        let record = self.existing(id).await?;
        Ok(DraftForm {
            id: Some(id),
            draft: D::from_record(&record),
        })
    }

    pub async fn save(
        &self,
        mode: EditMode,
        mut draft: D,
        image: Option<ImageUpload>,
    ) -> Result<D::Record, AdminError> {
        draft.validate()?;

        if image.is_some() && self.bucket.is_none() {
            return Err(AdminError::ImageNotSupported);
        }

        if let EditMode::Edit(id) = mode {
            let stored = self.existing(id).await?;
            if draft.image_url().is_none() {
                draft.set_image_url(stored.image_url().map(str::to_string));
            }
        }

        if let (Some(bucket), Some(upload)) = (self.bucket, image) {
            let url = self.uploader.upload(bucket, upload).await?;
            draft.set_image_url(Some(url));
        }

        let table = <D::Record as ContentRecord>::TABLE;
        let record = match mode {
            EditMode::Create => self.store.insert(draft).await?,
            EditMode::Edit(id) => self.store.update(id, draft).await?,
        };

        info!(%table, id = %record.id(), ?mode, "Content saved");
        Ok(record)
    }

    /// One storage delete (when there is an image), then one row delete.
    /// A failed storage delete is logged and does not stop the row delete.
    pub async fn delete(&self, id: Uuid) -> Result<(), AdminError> {
        let record = self.existing(id).await?;
        self.discard_image(&record).await;

        self.store.delete(id).await?;
        info!(table = %<D::Record as ContentRecord>::TABLE, %id, "Content deleted");
        Ok(())
    }

    /// Deletes the blob and clears the URL on the row.
    pub async fn remove_image(&self, id: Uuid) -> Result<D::Record, AdminError> {
        if self.bucket.is_none() {
            return Err(AdminError::ImageNotSupported);
        }

        let record = self.existing(id).await?;
        self.discard_image(&record).await;

        let mut draft = D::from_record(&record);
        draft.set_image_url(None);
        Ok(self.store.update(id, draft).await?)
    }

    async fn discard_image(&self, record: &D::Record) {
        let (Some(bucket), Some(url)) = (self.bucket, record.image_url()) else {
            return;
        };

        if let Err(e) = self.uploader.remove(bucket, url).await {
            warn!(%url, error = %e, "Failed to delete stored image");
        }
    }
}

impl<D: ContentDraft + Approvable> ContentEditor<D> {
    pub async fn set_approval(&self, id: Uuid, approved: bool) -> Result<D::Record, AdminError> {
        let record = self.existing(id).await?;
        let mut draft = D::from_record(&record);
        draft.set_approved(approved);

        Ok(self.store.update(id, draft).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::application::ports::outgoing::ImageStorageError;
    use crate::modules::portfolio::application::domain::drafts::{
        ProjectDraft, SkillDraft, TestimonialDraft,
    };
    use crate::modules::portfolio::application::domain::entities::Project;
    use crate::tests::support::fixtures;
    use crate::tests::support::memory_store::MemoryStore;
    use crate::tests::support::stubs::MemoryImageStorage;
    use bytes::Bytes;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_upload() -> ImageUpload {
        let mut buf = Vec::new();
        RgbImage::new(8, 8)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        ImageUpload {
            file_name: "cover.png".into(),
            content_type: "image/png".into(),
            bytes: Bytes::from(buf),
        }
    }

    fn project_editor(
        store: Arc<MemoryStore<ProjectDraft>>,
        storage: Arc<MemoryImageStorage>,
    ) -> ContentEditor<ProjectDraft> {
        ContentEditor::new(
            store,
            Arc::new(ImageUploader::new(storage)),
            Some(StorageBucket::Projects),
        )
    }

    fn stored_project_with_image() -> Project {
        let mut project = fixtures::project("Compiler", &["Rust"]);
        project.image_url =
            Some("https://storage.test/portfolio-projects/old.jpg".to_string());
        project
    }

    #[tokio::test]
    async fn create_uploads_then_inserts() {
        let store = Arc::new(MemoryStore::<ProjectDraft>::new());
        let storage = Arc::new(MemoryImageStorage::default());
        let editor = project_editor(store.clone(), storage.clone());

        let record = editor
            .save(EditMode::Create, fixtures::project_draft("New"), Some(png_upload()))
            .await
            .unwrap();

        assert_eq!(storage.uploads().len(), 1);
        assert_eq!(storage.uploads()[0].content_type, "image/jpeg");
        assert!(record
            .image_url
            .as_deref()
            .unwrap()
            .starts_with("https://storage.test/portfolio-projects/"));
        assert_eq!(store.rows().len(), 1);
    }

    #[tokio::test]
    async fn invalid_draft_touches_nothing() {
        let store = Arc::new(MemoryStore::<ProjectDraft>::new());
        let storage = Arc::new(MemoryImageStorage::default());
        let editor = project_editor(store.clone(), storage.clone());

        let result = editor
            .save(EditMode::Create, fixtures::project_draft("  "), Some(png_upload()))
            .await;

        assert_eq!(result.unwrap_err(), AdminError::Validation(DraftError::Missing("title")));
        assert!(storage.uploads().is_empty());
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn edit_without_new_file_keeps_the_stored_image() {
        let existing = stored_project_with_image();
        let store = Arc::new(MemoryStore::<ProjectDraft>::with_rows(vec![existing.clone()]));
        let storage = Arc::new(MemoryImageStorage::default());
        let editor = project_editor(store.clone(), storage.clone());

        let mut draft = editor.load_draft(existing.id).await.unwrap();
        assert_eq!(draft.mode(), EditMode::Edit(existing.id));
        draft.draft.title = "Compiler v2".into();
        draft.draft.image_url = None;

        let saved = editor.save(draft.mode(), draft.draft, None).await.unwrap();

        assert_eq!(saved.title, "Compiler v2");
        assert_eq!(saved.image_url, existing.image_url);
        assert!(storage.uploads().is_empty());
    }

    #[tokio::test]
    async fn edit_of_missing_row_is_not_found() {
        let editor = project_editor(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryImageStorage::default()),
        );

        let result = editor
            .save(EditMode::Edit(Uuid::new_v4()), fixtures::project_draft("X"), None)
            .await;

        assert_eq!(result.unwrap_err(), AdminError::NotFound);
    }

    #[tokio::test]
    async fn delete_removes_blob_once_then_row_once() {
        let existing = stored_project_with_image();
        let store = Arc::new(MemoryStore::<ProjectDraft>::with_rows(vec![existing.clone()]));
        let storage = Arc::new(MemoryImageStorage::default());
        let editor = project_editor(store.clone(), storage.clone());

        editor.delete(existing.id).await.unwrap();

        assert_eq!(
            storage.removals(),
            vec![(StorageBucket::Projects, "old.jpg".to_string())]
        );
        assert_eq!(store.delete_calls(), 1);
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn failed_blob_delete_still_deletes_the_row() {
        let existing = stored_project_with_image();
        let store = Arc::new(MemoryStore::<ProjectDraft>::with_rows(vec![existing.clone()]));
        let storage = Arc::new(MemoryImageStorage::failing(ImageStorageError::Unavailable(
            "503".into(),
        )));
        let editor = project_editor(store.clone(), storage);

        editor.delete(existing.id).await.unwrap();

        assert_eq!(store.delete_calls(), 1);
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn remove_image_clears_the_url() {
        let existing = stored_project_with_image();
        let store = Arc::new(MemoryStore::<ProjectDraft>::with_rows(vec![existing.clone()]));
        let storage = Arc::new(MemoryImageStorage::default());
        let editor = project_editor(store.clone(), storage.clone());

        let updated = editor.remove_image(existing.id).await.unwrap();

        assert_eq!(updated.image_url, None);
        assert_eq!(storage.removals().len(), 1);
    }

    #[tokio::test]
    async fn image_on_a_table_without_images_is_rejected() {
        let editor: ContentEditor<SkillDraft> = ContentEditor::new(
            Arc::new(MemoryStore::<SkillDraft>::new()),
            Arc::new(ImageUploader::new(Arc::new(MemoryImageStorage::default()))),
            None,
        );

        let draft = SkillDraft {
            name: "Rust".into(),
            category: "Languages".into(),
            level: 90,
        };
        let result = editor.save(EditMode::Create, draft, Some(png_upload())).await;

        assert_eq!(result.unwrap_err(), AdminError::ImageNotSupported);
    }

    #[tokio::test]
    async fn approval_toggles_the_flag() {
        let pending = fixtures::testimonial("Ana", false);
        let store = Arc::new(MemoryStore::<TestimonialDraft>::with_rows(vec![pending.clone()]));
        let editor: ContentEditor<TestimonialDraft> = ContentEditor::new(
            store.clone(),
            Arc::new(ImageUploader::new(Arc::new(MemoryImageStorage::default()))),
            Some(StorageBucket::Testimonials),
        );

        let approved = editor.set_approval(pending.id, true).await.unwrap();
        assert!(approved.is_approved);

        let hidden = editor.set_approval(pending.id, false).await.unwrap();
        assert!(!hidden.is_approved);
    }
}
