pub mod login;
pub mod logout;
pub mod oauth;
pub mod refresh_token;
pub mod session;

pub use login::{login_handler, LoginRequestDto};
pub use logout::logout_handler;
pub use oauth::{oauth_begin_handler, oauth_callback_handler};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto};
pub use session::session_handler;
