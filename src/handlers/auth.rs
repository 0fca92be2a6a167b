use actix_web::{web, HttpResponse, Result, ResponseError};
use crate::models::*;
use crate::services::AuthService;
use crate::utils::SessionService;

#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "注册成功", body = OkResponse),
        (status = 400, description = "缺少用户名/密码或用户已存在", body = ErrorResponse)
    )
)]
pub async fn signup(
    auth_service: web::Data<AuthService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: CredentialsRequest = decode_body(&body);
    match auth_service.signup(&request).await {
        Ok(()) => Ok(HttpResponse::Ok().json(OkResponse::ok())),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "登录成功，下发会话 cookie", body = OkResponse),
        (status = 400, description = "缺少用户名或密码", body = ErrorResponse),
        (status = 401, description = "用户名或密码错误", body = ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    session_service: web::Data<SessionService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request: CredentialsRequest = decode_body(&body);
    let cookie = match auth_service.login(&request).await {
        Ok(user_id) => session_service.session_cookie(user_id),
        Err(e) => Err(e),
    };
    match cookie {
        Ok(cookie) => Ok(HttpResponse::Ok().cookie(cookie).json(OkResponse::ok())),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "auth",
    responses(
        (status = 200, description = "登出成功（未登录时同样成功）", body = OkResponse)
    )
)]
pub async fn logout(session_service: web::Data<SessionService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .cookie(session_service.removal_cookie())
        .json(OkResponse::ok()))
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/signup", web::post().to(signup))
        .route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout));
}
