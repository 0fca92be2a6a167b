use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::non_empty;
use crate::entities::user_entity;

/// 注册与登录共用的请求体
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "pw1")]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// 用户名和密码都非空时返回
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((non_empty(&self.username)?, non_empty(&self.password)?))
    }
}

/// 客户列表项（不含密码哈希）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    pub username: String,
}

impl From<user_entity::Model> for CustomerResponse {
    fn from(m: user_entity::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
        }
    }
}
