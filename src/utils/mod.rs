pub mod password;
pub mod session;

pub use password::*;
pub use session::*;
