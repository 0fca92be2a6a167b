use crate::entities::user_entity;
use crate::error::AppError;
use crate::middlewares::current_user_id;
use crate::services::AuthService;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

/// 管理员身份提取器
///
/// 管理端接口把它放在第一个参数，校验失败时直接返回 403，
/// 处理函数本身不再重复判断。
pub struct AdminUser(pub user_entity::Model);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = current_user_id(req);
        let auth_service = req.app_data::<web::Data<AuthService>>().cloned();

        Box::pin(async move {
            let auth_service = auth_service.ok_or_else(|| {
                AppError::InternalError("AuthService is not registered".to_string())
            })?;
            let user = auth_service.require_admin(user_id).await?;
            Ok(AdminUser(user))
        })
    }
}
