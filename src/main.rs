use actix_web::{App, HttpServer, middleware::Logger};
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use chrono::Local;  // timestamp in log lines

use foodiezone_backend::{
    AppState,
    config::Config,
    database::{create_pool, run_migrations, seed_defaults},
    middlewares::{SessionMiddleware, create_cors},
    routes,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration");
    if config.uses_default_session_secret() {
        log::warn!("SESSION_SECRET is not set; using the built-in default secret");
    }

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 初始化管理员与默认菜单
    seed_defaults(
        &pool,
        &config.admin.default_password,
        config.security.bcrypt_cost,
    )
    .await
    .expect("Failed to seed default data");

    let state = AppState::new(pool, &config);

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(SessionMiddleware::new(state.session_service.clone()))
            .configure(|cfg| state.register(cfg))
            .configure(swagger_config)
            .configure(routes)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
