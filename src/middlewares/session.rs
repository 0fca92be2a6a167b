use crate::utils::SessionService;
use actix_web::{
    Error, HttpMessage, HttpRequest,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

/// 已通过会话 cookie 识别出的用户ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser(pub i32);

/// 会话中间件
///
/// 只负责识别身份，不拦截请求：cookie 缺失、签名错误或过期时按匿名处理，
/// 是否需要登录由各接口自行判断。
pub struct SessionMiddleware {
    session_service: SessionService,
}

impl SessionMiddleware {
    pub fn new(session_service: SessionService) -> Self {
        Self { session_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service,
            session_service: self.session_service.clone(),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: S,
    session_service: SessionService,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(cookie) = req.request().cookie(self.session_service.cookie_name()) {
            match self.session_service.verify_token(cookie.value()) {
                Ok(user_id) => {
                    req.extensions_mut().insert(SessionUser(user_id));
                }
                Err(e) => {
                    log::debug!("Ignoring invalid session cookie: {}", e);
                }
            }
        }

        Box::pin(self.service.call(req))
    }
}

/// 获取当前会话用户ID，未登录为 None
pub fn current_user_id(req: &HttpRequest) -> Option<i32> {
    req.extensions().get::<SessionUser>().map(|u| u.0)
}
