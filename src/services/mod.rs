pub mod auth_service;
pub mod catalog_service;
pub mod contact_service;
pub mod order_service;
pub mod user_service;

pub use auth_service::*;
pub use catalog_service::*;
pub use contact_service::*;
pub use order_service::*;
pub use user_service::*;
