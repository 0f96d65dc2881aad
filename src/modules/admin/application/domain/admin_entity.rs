use std::fmt;
use std::str::FromStr;

use crate::modules::media::application::ports::outgoing::StorageBucket;

/// Content collections the admin routes address by path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminEntity {
    Projects,
    Experience,
    Skills,
    Certificates,
    Achievements,
    Testimonials,
    SocialLinks,
    About,
}

const SEGMENTS: &[(&str, AdminEntity)] = &[
    ("projects", AdminEntity::Projects),
    ("experience", AdminEntity::Experience),
    ("skills", AdminEntity::Skills),
    ("certificates", AdminEntity::Certificates),
    ("achievements", AdminEntity::Achievements),
    ("testimonials", AdminEntity::Testimonials),
    ("social-links", AdminEntity::SocialLinks),
    ("about", AdminEntity::About),
];

impl AdminEntity {
    pub fn segment(&self) -> &'static str {
        SEGMENTS
            .iter()
            .find(|(_, e)| e == self)
            .map(|(s, _)| *s)
            .unwrap_or_default()
    }

    /// Achievements share the certificates bucket.
    pub fn bucket(&self) -> Option<StorageBucket> {
        match self {
            AdminEntity::Projects => Some(StorageBucket::Projects),
            AdminEntity::Testimonials => Some(StorageBucket::Testimonials),
            AdminEntity::Certificates | AdminEntity::Achievements => {
                Some(StorageBucket::Certificates)
            }
            _ => None,
        }
    }

    pub fn is_approvable(&self) -> bool {
        matches!(self, AdminEntity::Testimonials | AdminEntity::Achievements)
    }
}

impl fmt::Display for AdminEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown content type: {0}")]
pub struct UnknownEntity(pub String);

impl FromStr for AdminEntity {
    type Err = UnknownEntity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SEGMENTS
            .iter()
            .find(|(segment, _)| *segment == s)
            .map(|(_, e)| *e)
            .ok_or_else(|| UnknownEntity(s.to_string()))
    }
}
