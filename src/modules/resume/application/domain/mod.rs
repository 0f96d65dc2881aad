pub mod pdf_writer;
pub mod resume_document;

pub use pdf_writer::render_pdf;
pub use resume_document::{ResumeData, ResumeDocument, ResumeLine};
