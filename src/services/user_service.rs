use crate::entities::user_entity as users;
use crate::error::AppResult;
use crate::models::CustomerResponse;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 客户列表，按ID倒序
    pub async fn list_customers(&self) -> AppResult<Vec<CustomerResponse>> {
        let models = users::Entity::find()
            .order_by_desc(users::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(CustomerResponse::from).collect())
    }
}
