use crate::entities::{feedback_entity as feedback, query_entity as queries};
use crate::error::AppResult;
use crate::models::{FeedbackRequest, QueryRequest};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

/// 留言与咨询：匿名写入，管理员查看
#[derive(Clone)]
pub struct ContactService {
    pool: DatabaseConnection,
}

impl ContactService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 缺失字段按 NULL 存储，不做非空校验
    pub async fn submit_feedback(&self, request: FeedbackRequest) -> AppResult<feedback::Model> {
        let model = feedback::ActiveModel {
            name: Set(request.name),
            message: Set(request.message),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        log::info!("Feedback stored: id={}", model.id);
        Ok(model)
    }

    pub async fn submit_query(&self, request: QueryRequest) -> AppResult<queries::Model> {
        let model = queries::ActiveModel {
            name: Set(request.name),
            email: Set(request.email),
            message: Set(request.message),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        log::info!("Query stored: id={}", model.id);
        Ok(model)
    }

    pub async fn list_feedback(&self) -> AppResult<Vec<feedback::Model>> {
        let list = feedback::Entity::find()
            .order_by_desc(feedback::Column::CreatedAt)
            .order_by_desc(feedback::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list)
    }

    pub async fn list_queries(&self) -> AppResult<Vec<queries::Model>> {
        let list = queries::Entity::find()
            .order_by_desc(queries::Column::CreatedAt)
            .order_by_desc(queries::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list)
    }
}
