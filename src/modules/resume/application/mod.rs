pub mod domain;
pub mod services;

pub use services::{ResumeError, ResumeService};
