pub mod admin;
pub mod auth;
pub mod contact;
pub mod menu;
pub mod order;
pub mod pages;

pub use admin::{admin_api_config, admin_pages_config};
pub use auth::auth_config;
pub use contact::contact_config;
pub use menu::menu_config;
pub use order::order_config;
pub use pages::pages_config;
