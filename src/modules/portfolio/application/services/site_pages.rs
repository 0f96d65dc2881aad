use serde::Serialize;
use std::sync::Arc;

use super::portfolio_facade::PortfolioFacade;
use super::presentation::{
    distinct_tags, group_skills, social_link_views, SkillGroup, SocialLinkView,
};
use super::realtime_cache::RealtimeCache;
use crate::modules::portfolio::application::domain::entities::{
    AboutSection, Achievement, Certificate, Experience, Project, Testimonial,
};
use crate::modules::portfolio::application::domain::site_pages::SitePage;
use crate::shared::read_outcome::ReadError;

const FEATURED_PROJECTS: usize = 3;

/// Data one page renders, assembled from the same reads the public
/// endpoints use.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageBundle {
    Home {
        about: Option<AboutSection>,
        featured_projects: Vec<Project>,
        social_links: Vec<SocialLinkView>,
    },
    About {
        about: Option<AboutSection>,
        skills: Vec<SkillGroup>,
    },
    Portfolio {
        projects: Vec<Project>,
        tags: Vec<String>,
    },
    Experience {
        experience: Vec<Experience>,
        skills: Vec<SkillGroup>,
    },
    Certificates {
        certificates: Vec<Certificate>,
    },
    Achievements {
        achievements: Vec<Achievement>,
    },
    Testimonials {
        testimonials: Vec<Testimonial>,
    },
    Contact {
        social_links: Vec<SocialLinkView>,
    },
    /// The admin page loads its data from the admin dashboard endpoint.
    Admin,
}

pub struct SitePages {
    facade: Arc<PortfolioFacade>,
    realtime: Arc<RealtimeCache>,
}

impl SitePages {
    pub fn new(facade: Arc<PortfolioFacade>, realtime: Arc<RealtimeCache>) -> Self {
        Self { facade, realtime }
    }

    /// Any failed read fails the whole bundle.
    pub async fn assemble(&self, page: SitePage) -> Result<PageBundle, ReadError> {
        let bundle = match page {
            SitePage::Home => {
                let mut projects = self.realtime.read_projects().await.into_items()?;
                projects.truncate(FEATURED_PROJECTS);
                PageBundle::Home {
                    about: self.facade.get_about_cached().await.into_result()?,
                    featured_projects: projects,
                    social_links: social_link_views(
                        self.realtime.read_social_links().await.into_items()?,
                    ),
                }
            }
            SitePage::About => PageBundle::About {
                about: self.facade.get_about_cached().await.into_result()?,
                skills: group_skills(self.facade.get_skills().await.into_items()?),
            },
            SitePage::Portfolio => {
                let projects = self.realtime.read_projects().await.into_items()?;
                PageBundle::Portfolio {
                    tags: distinct_tags(&projects),
                    projects,
                }
            }
            SitePage::Experience => PageBundle::Experience {
                experience: self.realtime.read_experience().await.into_items()?,
                skills: group_skills(self.facade.get_skills().await.into_items()?),
            },
            SitePage::Certificates => PageBundle::Certificates {
                certificates: self.facade.get_certificates().await.into_items()?,
            },
            SitePage::Achievements => PageBundle::Achievements {
                achievements: self.facade.get_achievements().await.into_items()?,
            },
            SitePage::Testimonials => PageBundle::Testimonials {
                testimonials: self.facade.get_testimonials().await.into_items()?,
            },
            SitePage::Contact => PageBundle::Contact {
                social_links: social_link_views(
                    self.realtime.read_social_links().await.into_items()?,
                ),
            },
            SitePage::Admin => PageBundle::Admin,
        };

        Ok(bundle)
    }
}
