pub mod direct_url;

pub use direct_url::{direct_url_handler, DirectUrlRequest, DirectUrlResponse};
