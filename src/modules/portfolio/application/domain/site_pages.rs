use serde::Serialize;
use utoipa::ToSchema;

/// Client-side page table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SitePage {
    Home,
    About,
    Portfolio,
    Experience,
    Certificates,
    Achievements,
    Testimonials,
    Contact,
    Admin,
}

const ROUTES: &[(&str, SitePage)] = &[
    ("/", SitePage::Home),
    ("/about", SitePage::About),
    ("/portfolio", SitePage::Portfolio),
    ("/experience", SitePage::Experience),
    ("/certificates", SitePage::Certificates),
    ("/achievements", SitePage::Achievements),
    ("/testimonials", SitePage::Testimonials),
    ("/contact", SitePage::Contact),
    ("/admin", SitePage::Admin),
];

impl SitePage {
    /// Exact match after dropping the query string and a trailing slash.
    /// Anything else is not a page.
    pub fn resolve(path: &str) -> Option<SitePage> {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| *page)
    }

    pub fn path(&self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, page)| page == self)
            .map(|(route, _)| *route)
            .unwrap_or("/")
    }

    pub fn title(&self) -> &'static str {
        match self {
            SitePage::Home => "Home",
            SitePage::About => "About",
            SitePage::Portfolio => "Portfolio",
            SitePage::Experience => "Experience",
            SitePage::Certificates => "Certificates",
            SitePage::Achievements => "Achievements",
            SitePage::Testimonials => "Testimonials",
            SitePage::Contact => "Contact",
            SitePage::Admin => "Admin",
        }
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, SitePage::Admin)
    }

    pub fn all() -> impl Iterator<Item = SitePage> {
        ROUTES.iter().map(|(_, page)| *page)
    }
}
