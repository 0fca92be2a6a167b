use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse, Result, ResponseError};
use std::path::Path;
use crate::config::PagesConfig;
use crate::error::AppError;
use crate::handlers::admin::redirect_home;
use crate::middlewares::current_user_id;
use crate::services::AuthService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    Public,
    Admin,
}

#[derive(Debug)]
pub struct Page {
    pub path: &'static str,
    pub file: &'static str,
    pub access: PageAccess,
}

const fn public(path: &'static str, file: &'static str) -> Page {
    Page {
        path,
        file,
        access: PageAccess::Public,
    }
}

/// 页面路由表：路径 -> 页面文件
pub const PAGES: &[Page] = &[
    public("/", "index.html"),
    public("/index.html", "index.html"),
    public("/login.html", "login.html"),
    public("/signup.html", "signup.html"),
    public("/menu123.html", "menu123.html"),
    public("/cart.html", "cart.html"),
    public("/checkout.html", "checkout.html"),
    public("/payment.html", "payment.html"),
    public("/order-success.html", "order-success.html"),
    public("/my-orders.html", "my-orders.html"),
    public("/track-order.html", "track-order.html"),
    Page {
        path: "/admin.html",
        file: "admin.html",
        access: PageAccess::Admin,
    },
];

pub fn find_page(path: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.path == path)
}

pub async fn render_page(
    req: HttpRequest,
    pages: web::Data<PagesConfig>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse> {
    let Some(page) = find_page(req.path()) else {
        return Ok(AppError::NotFound("page not found".to_string()).error_response());
    };

    if page.access == PageAccess::Admin
        && auth_service
            .require_admin(current_user_id(&req))
            .await
            .is_err()
    {
        return Ok(redirect_home());
    }

    let file = Path::new(&pages.dir).join(page.file);
    match tokio::fs::read_to_string(&file).await {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html)),
        Err(e) => {
            log::warn!("Page file {} unavailable: {}", file.display(), e);
            Ok(AppError::NotFound("page not found".to_string()).error_response())
        }
    }
}

pub fn pages_config(cfg: &mut web::ServiceConfig) {
    for page in PAGES {
        cfg.service(
            web::resource(page.path)
                .route(web::get().to(render_page))
                .route(web::post().to(render_page)),
        );
    }
}
