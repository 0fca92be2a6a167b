pub mod feedback;
pub mod items;
pub mod order_items;
pub mod orders;
pub mod queries;
pub mod users;

pub use feedback as feedback_entity;
pub use items as item_entity;
pub use order_items as order_item_entity;
pub use orders as order_entity;
pub use orders::OrderStatus;
pub use queries as query_entity;
pub use users as user_entity;
