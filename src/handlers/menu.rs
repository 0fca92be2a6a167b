use actix_web::{web, HttpResponse, Result, ResponseError};
use crate::services::CatalogService;

#[utoipa::path(
    get,
    path = "/api/menu",
    tag = "menu",
    responses(
        (status = 200, description = "菜单列表", body = [crate::models::MenuItemResponse])
    )
)]
pub async fn get_menu(catalog_service: web::Data<CatalogService>) -> Result<HttpResponse> {
    match catalog_service.list_items().await {
        Ok(items) => Ok(HttpResponse::Ok().json(items)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn menu_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/menu", web::get().to(get_menu));
}
