use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::OrderStatus;
use crate::handlers;
use crate::models::*;

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("foodiezone_session"))),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::signup,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::menu::get_menu,
        handlers::order::create_order,
        handlers::order::my_orders,
        handlers::admin::list_orders,
        handlers::admin::list_customers,
        handlers::admin::update_order_status,
        handlers::admin::feedbacks_page,
        handlers::admin::queries_page,
        handlers::contact::submit_feedback,
        handlers::contact::submit_query,
    ),
    components(
        schemas(
            OkResponse,
            ErrorResponse,
            CredentialsRequest,
            CustomerResponse,
            MenuItemResponse,
            OrderLineRequest,
            CreateOrderRequest,
            CreateOrderResponse,
            UpdateOrderStatusRequest,
            OrderStatus,
            OrderResponse,
            AdminOrderResponse,
            FeedbackRequest,
            QueryRequest,
            SubmitResponse,
            FeedbackResponse,
            QueryResponse,
        )
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "auth", description = "Signup, login and logout"),
        (name = "menu", description = "Menu catalog"),
        (name = "order", description = "Customer orders"),
        (name = "admin", description = "Administration (admin user only)"),
        (name = "contact", description = "Feedback and support queries"),
    ),
    info(
        title = "FoodieZone Backend API",
        version = "1.0.0",
        description = "FoodieZone food ordering REST API documentation"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
