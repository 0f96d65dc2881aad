use crate::modules::portfolio::application::domain::entities::{
    AboutSection, Certificate, Experience, Project, SocialLink, Skill,
};
use crate::modules::portfolio::application::services::presentation::group_skills;
use crate::shared::dates::{format_month_year, format_period};

/// Everything the résumé is built from.
#[derive(Debug, Clone, Default)]
pub struct ResumeData {
    pub about: Option<AboutSection>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeLine {
    Title(String),
    Subtitle(String),
    Heading(String),
    Strong(String),
    Body(String),
    Bullet(String),
    Gap,
}

/// Ordered lines of the résumé, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResumeDocument {
    pub lines: Vec<ResumeLine>,
}

impl ResumeDocument {
    /// Empty sections are left out.
    pub fn build(data: &ResumeData) -> Self {
        let mut doc = ResumeDocument::default();

        match &data.about {
            Some(about) => {
                doc.push(ResumeLine::Title(about.title.clone()));
                if let Some(tagline) = about.tagline.as_deref().filter(|t| !t.trim().is_empty()) {
                    doc.push(ResumeLine::Subtitle(tagline.to_string()));
                }
            }
            None => doc.push(ResumeLine::Title("Résumé".to_string())),
        }

        if !data.social_links.is_empty() {
            let contacts = data
                .social_links
                .iter()
                .map(|l| format!("{}: {}", l.label.as_deref().unwrap_or(&l.platform), l.url))
                .collect::<Vec<_>>()
                .join("  |  ");
            doc.push(ResumeLine::Body(contacts));
        }

        if let Some(about) = &data.about {
            doc.section("About");
            for paragraph in about.content.split("\n\n").filter(|p| !p.trim().is_empty()) {
                doc.push(ResumeLine::Body(paragraph.trim().replace('\n', " ")));
            }
        }

        if !data.experience.is_empty() {
            doc.section("Experience");
            for item in &data.experience {
                doc.push(ResumeLine::Strong(format!(
                    "{} - {}",
                    item.position, item.organization
                )));
                doc.push(ResumeLine::Body(format_period(item.start_date, item.end_date)));
                if !item.description.trim().is_empty() {
                    doc.push(ResumeLine::Body(item.description.trim().to_string()));
                }
            }
        }

        if !data.projects.is_empty() {
            doc.section("Projects");
            for project in &data.projects {
                doc.push(ResumeLine::Strong(project.title.clone()));
                doc.push(ResumeLine::Body(project.description.trim().to_string()));
                if !project.tags.is_empty() {
                    doc.push(ResumeLine::Body(project.tags.join(", ")));
                }
                if let Some(link) = &project.link {
                    doc.push(ResumeLine::Body(link.clone()));
                }
            }
        }

        if !data.skills.is_empty() {
            doc.section("Skills");
            for group in group_skills(data.skills.clone()) {
                let names: Vec<&str> = group.skills.iter().map(|s| s.name.as_str()).collect();
                doc.push(ResumeLine::Bullet(format!(
                    "{}: {}",
                    group.category,
                    names.join(", ")
                )));
            }
        }

        if !data.certificates.is_empty() {
            doc.section("Certificates");
            for cert in &data.certificates {
                doc.push(ResumeLine::Bullet(format!(
                    "{} - {} ({})",
                    cert.title,
                    cert.issuer,
                    format_month_year(cert.date)
                )));
            }
        }

        doc
    }

    fn push(&mut self, line: ResumeLine) {
        self.lines.push(line);
    }

    fn section(&mut self, name: &str) {
        self.lines.push(ResumeLine::Gap);
        self.lines.push(ResumeLine::Heading(name.to_string()));
    }
}
