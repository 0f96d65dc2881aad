use std::sync::Arc;
use tracing::{error, info};

use crate::modules::portfolio::application::services::PortfolioFacade;
use crate::modules::resume::application::domain::{render_pdf, ResumeData, ResumeDocument};
use crate::shared::read_outcome::ReadError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeError {
    #[error("Could not read résumé data: {0}")]
    Read(#[from] ReadError),

    #[error("PDF rendering failed")]
    Render,
}

pub struct ResumeService {
    facade: Arc<PortfolioFacade>,
}

impl ResumeService {
    pub fn new(facade: Arc<PortfolioFacade>) -> Self {
        Self { facade }
    }

    /// Public rows only. Any failed read fails the document.
    pub async fn collect(&self) -> Result<ResumeData, ResumeError> {
        let f = &self.facade;
        let (about, experience, projects, skills, certificates, social_links) = tokio::join!(
            f.get_about_cached(),
            f.get_experience(),
            f.get_projects(),
            f.get_skills(),
            f.get_certificates(),
            f.get_social_links(),
        );

        Ok(ResumeData {
            about: about.into_result()?,
            experience: experience.into_items()?,
            projects: projects.into_items()?,
            skills: skills.into_items()?,
            certificates: certificates.into_items()?,
            social_links: social_links.into_items()?,
        })
    }

    pub async fn generate_pdf(&self) -> Result<Vec<u8>, ResumeError> {
        let data = self.collect().await?;
        let document = ResumeDocument::build(&data);

        let bytes = tokio::task::spawn_blocking(move || render_pdf(&document).map_err(|e| e.to_string()))
            .await
            .map_err(|_| ResumeError::Render)?
            .map_err(|e| {
                error!("Résumé rendering failed: {}", e);
                ResumeError::Render
            })?;

        info!(size = bytes.len(), "Résumé rendered");
        Ok(bytes)
    }
}
