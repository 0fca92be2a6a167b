use actix_web::{http::header, web, HttpResponse, Result, ResponseError};
use crate::middlewares::AdminUser;
use crate::models::*;
use crate::services::{ContactService, OrderService, UserService};

/// 管理页面校验失败时静默跳回首页
pub(crate) fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "admin",
    responses(
        (status = 200, description = "全部订单（含下单用户名），最新在前", body = [AdminOrderResponse]),
        (status = 403, description = "非管理员", body = ErrorResponse)
    )
)]
pub async fn list_orders(
    _admin: AdminUser,
    order_service: web::Data<OrderService>,
) -> Result<HttpResponse> {
    match order_service.list_all_orders().await {
        Ok(orders) => Ok(HttpResponse::Ok().json(orders)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/customers",
    tag = "admin",
    responses(
        (status = 200, description = "全部客户，按ID倒序", body = [CustomerResponse]),
        (status = 403, description = "非管理员", body = ErrorResponse)
    )
)]
pub async fn list_customers(
    _admin: AdminUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse> {
    match user_service.list_customers().await {
        Ok(customers) => Ok(HttpResponse::Ok().json(customers)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/order/{order_id}/update",
    tag = "admin",
    params(
        ("order_id" = i32, Path, description = "订单ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "已更新（订单不存在时同样返回成功）", body = OkResponse),
        (status = 400, description = "状态不在 created/cancelled/delivered 之内", body = ErrorResponse),
        (status = 403, description = "非管理员", body = ErrorResponse)
    )
)]
pub async fn update_order_status(
    _admin: AdminUser,
    order_service: web::Data<OrderService>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let order_id = path.into_inner();
    let request: UpdateOrderStatusRequest = decode_body(&body);
    match order_service
        .update_status(order_id, request.status.as_deref())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(OkResponse::ok())),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/feedbacks",
    tag = "admin",
    responses(
        (status = 200, description = "全部留言，最新在前", body = [FeedbackResponse]),
        (status = 302, description = "非管理员，跳转首页")
    )
)]
pub async fn feedbacks_page(
    admin: Option<AdminUser>,
    contact_service: web::Data<ContactService>,
) -> Result<HttpResponse> {
    if admin.is_none() {
        return Ok(redirect_home());
    }
    match contact_service.list_feedback().await {
        Ok(list) => Ok(HttpResponse::Ok().json(
            list.into_iter().map(FeedbackResponse::from).collect::<Vec<_>>(),
        )),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/queries",
    tag = "admin",
    responses(
        (status = 200, description = "全部咨询，最新在前", body = [QueryResponse]),
        (status = 302, description = "非管理员，跳转首页")
    )
)]
pub async fn queries_page(
    admin: Option<AdminUser>,
    contact_service: web::Data<ContactService>,
) -> Result<HttpResponse> {
    if admin.is_none() {
        return Ok(redirect_home());
    }
    match contact_service.list_queries().await {
        Ok(list) => Ok(HttpResponse::Ok().json(
            list.into_iter().map(QueryResponse::from).collect::<Vec<_>>(),
        )),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/orders", web::get().to(list_orders))
            .route("/customers", web::get().to(list_customers))
            .route("/order/{order_id}/update", web::post().to(update_order_status)),
    );
}

pub fn admin_pages_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/feedbacks", web::get().to(feedbacks_page))
        .route("/admin/queries", web::get().to(queries_page));
}
