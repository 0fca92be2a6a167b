pub mod admin;
pub mod cors;
pub mod session;

pub use admin::AdminUser;
pub use cors::create_cors;
pub use session::{SessionMiddleware, SessionUser, current_user_id};
