pub mod common;
pub mod contact;
pub mod item;
pub mod order;
pub mod user;

pub use common::*;
pub use contact::*;
pub use item::*;
pub use order::*;
pub use user::*;
