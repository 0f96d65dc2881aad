pub mod drafts;
pub mod entities;
pub mod site_pages;
