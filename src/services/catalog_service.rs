use crate::entities::item_entity as items;
use crate::error::AppResult;
use crate::models::MenuItemResponse;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Clone)]
pub struct CatalogService {
    pool: DatabaseConnection,
}

impl CatalogService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 全部菜单项，按插入顺序
    pub async fn list_items(&self) -> AppResult<Vec<MenuItemResponse>> {
        let list = items::Entity::find()
            .order_by_asc(items::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
