use actix_web::web;

use crate::config::{Config, PagesConfig};
use crate::database::DbPool;
use crate::handlers;
use crate::services::*;
use crate::utils::SessionService;

/// 所有处理函数共享的服务
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub catalog_service: CatalogService,
    pub order_service: OrderService,
    pub contact_service: ContactService,
    pub session_service: SessionService,
    pub pages: PagesConfig,
}

impl AppState {
    pub fn new(pool: DbPool, config: &Config) -> Self {
        Self {
            auth_service: AuthService::new(pool.clone(), config.security.bcrypt_cost),
            user_service: UserService::new(pool.clone()),
            catalog_service: CatalogService::new(pool.clone()),
            order_service: OrderService::new(pool.clone()),
            contact_service: ContactService::new(pool),
            session_service: SessionService::new(&config.session),
            pages: config.pages.clone(),
        }
    }

    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.auth_service.clone()))
            .app_data(web::Data::new(self.user_service.clone()))
            .app_data(web::Data::new(self.catalog_service.clone()))
            .app_data(web::Data::new(self.order_service.clone()))
            .app_data(web::Data::new(self.contact_service.clone()))
            .app_data(web::Data::new(self.session_service.clone()))
            .app_data(web::Data::new(self.pages.clone()));
    }
}

/// 业务路由（不含 Swagger）
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(handlers::auth_config)
            .configure(handlers::menu_config)
            .configure(handlers::order_config)
            .configure(handlers::admin_api_config),
    )
    .configure(handlers::contact_config)
    .configure(handlers::admin_pages_config)
    .configure(handlers::pages_config);
}
