use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::CredentialsRequest;
use crate::utils::{hash_password, verify_password};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

/// 管理员即用户名恰好为 "admin" 的用户，没有单独的角色字段
pub const ADMIN_USERNAME: &str = "admin";

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// 注册；成功时不返回任何用户信息
    pub async fn signup(&self, request: &CredentialsRequest) -> AppResult<()> {
        let (username, password) = request.credentials().ok_or_else(|| {
            AppError::ValidationError("username and password required".to_string())
        })?;

        if self.find_by_username(username).await?.is_some() {
            return Err(AppError::ValidationError("user exists".to_string()));
        }

        let password_hash = hash_password(password, self.bcrypt_cost)?;

        let inserted = users::ActiveModel {
            username: Set(username.to_string()),
            password: Set(password_hash),
            ..Default::default()
        }
        .insert(&self.pool)
        .await;

        match inserted {
            Ok(user) => {
                log::info!("User signed up: id={} username={}", user.id, user.username);
                Ok(())
            }
            // 并发注册同名用户时由唯一索引兜底
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::ValidationError("user exists".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 登录，返回用户ID供写入会话
    pub async fn login(&self, request: &CredentialsRequest) -> AppResult<i32> {
        let (username, password) = request.credentials().ok_or_else(|| {
            AppError::ValidationError("username and password required".to_string())
        })?;

        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::AuthError("invalid credentials".to_string()))?;

        if !verify_password(password, &user.password) {
            return Err(AppError::AuthError("invalid credentials".to_string()));
        }

        log::info!("User logged in: id={}", user.id);
        Ok(user.id)
    }

    /// 管理员校验
    ///
    /// 所有管理端接口与页面都经由此处判断，未登录、用户不存在或不是
    /// admin 一律返回 `Forbidden`。
    pub async fn require_admin(&self, user_id: Option<i32>) -> AppResult<users::Model> {
        let user_id = user_id.ok_or(AppError::Forbidden)?;
        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or(AppError::Forbidden)?;

        if user.username != ADMIN_USERNAME {
            return Err(AppError::Forbidden);
        }
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<users::Model>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.pool)
            .await?;
        Ok(user)
    }
}
