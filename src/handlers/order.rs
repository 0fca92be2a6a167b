use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use crate::error::AppError;
use crate::middlewares::current_user_id;
use crate::models::*;
use crate::services::OrderService;

fn login_required() -> HttpResponse {
    AppError::AuthError("login required".to_string()).error_response()
}

#[utoipa::path(
    post,
    path = "/api/create_order",
    tag = "order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "下单成功", body = CreateOrderResponse),
        (status = 400, description = "没有明细、菜品不存在或数量无效", body = ErrorResponse),
        (status = 401, description = "未登录", body = ErrorResponse)
    )
)]
pub async fn create_order(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    // 先校验登录，再看明细
    let Some(user_id) = current_user_id(&req) else {
        return Ok(login_required());
    };

    let request: CreateOrderRequest = decode_body(&body);
    match order_service.create_order(user_id, request.into_lines()).await {
        Ok(order_id) => Ok(HttpResponse::Ok().json(CreateOrderResponse { ok: true, order_id })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/my_orders",
    tag = "order",
    responses(
        (status = 200, description = "当前用户的订单，最新在前", body = [OrderResponse]),
        (status = 401, description = "未登录", body = ErrorResponse)
    )
)]
pub async fn my_orders(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let Some(user_id) = current_user_id(&req) else {
        return Ok(login_required());
    };

    match order_service.list_user_orders(user_id).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(orders)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/create_order", web::post().to(create_order))
        .route("/my_orders", web::get().to(my_orders));
}
