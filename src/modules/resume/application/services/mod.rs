pub mod resume_service;

pub use resume_service::{ResumeError, ResumeService};
