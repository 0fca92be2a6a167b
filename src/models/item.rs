use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::item_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: i32,
    #[schema(example = "Chicken Biryani")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 150.0)]
    pub price: f64,
    #[schema(example = "static/images/chickenbiryani.jpg")]
    pub image: Option<String>,
}

impl From<item_entity::Model> for MenuItemResponse {
    fn from(m: item_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            image: m.image,
        }
    }
}
