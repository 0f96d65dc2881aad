pub mod approval;
pub mod contacts;
pub mod content;
pub mod dashboard;
mod errors;

pub use approval::{set_approval_handler, ApprovalRequest};
pub use contacts::{delete_contact_handler, list_contacts_handler, set_contact_read_handler, ReadFlagRequest};
pub use content::{
    create_content_handler, delete_content_handler, load_draft_handler, remove_image_handler,
    update_content_handler, AdminSaveRequest, AdminSaveResponse,
};
pub use dashboard::dashboard_handler;
