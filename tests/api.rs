use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};

use foodiezone_backend::database::{run_migrations, seed_defaults};
use foodiezone_backend::entities::{order_entity, user_entity};
use foodiezone_backend::middlewares::SessionMiddleware;
use foodiezone_backend::{AppState, Config, routes};

const TEST_COST: u32 = 4;
const COOKIE: &str = "foodiezone_session";

static PAGES_SEQ: AtomicUsize = AtomicUsize::new(0);

/// 每个测试使用独立的页面目录
fn pages_dir() -> String {
    let seq = PAGES_SEQ.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "foodiezone-pages-{}-{}",
        std::process::id(),
        seq
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>FoodieZone</h1>").unwrap();
    std::fs::write(dir.join("admin.html"), "<h1>Admin</h1>").unwrap();
    dir.to_string_lossy().into_owned()
}

async fn setup() -> (AppState, DatabaseConnection) {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    run_migrations(&db).await.unwrap();
    seed_defaults(&db, "admin123", TEST_COST).await.unwrap();

    let mut config = Config::default();
    config.security.bcrypt_cost = TEST_COST;
    config.session.secret = "test-secret".to_string();
    config.pages.dir = pages_dir();

    (AppState::new(db.clone(), &config), db)
}

macro_rules! test_app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(
            App::new()
                .wrap(SessionMiddleware::new(state.session_service.clone()))
                .configure(|cfg| state.register(cfg))
                .configure(routes),
        )
        .await
    }};
}

/// 发送 JSON POST，返回 (状态码, 响应体)
macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {
        post_json!($app, $uri, $body, None::<Cookie<'static>>)
    };
    ($app:expr, $uri:expr, $body:expr, $cookie:expr) => {{
        let mut req = test::TestRequest::post().uri($uri).set_json($body);
        if let Some(c) = $cookie.clone() {
            req = req.cookie(c);
        }
        let resp = test::call_service(&$app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

macro_rules! get_json {
    ($app:expr, $uri:expr, $cookie:expr) => {{
        let mut req = test::TestRequest::get().uri($uri);
        if let Some(c) = $cookie.clone() {
            req = req.cookie(c);
        }
        let resp = test::call_service(&$app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

/// 登录并返回会话 cookie
macro_rules! login {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": $username, "password": $password }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == COOKIE)
            .map(|c| c.into_owned())
            .expect("session cookie");
        Some(cookie)
    }};
}

macro_rules! signup_and_login {
    ($app:expr, $username:expr, $password:expr) => {{
        let (status, _) = post_json!(
            $app,
            "/api/signup",
            json!({ "username": $username, "password": $password })
        );
        assert_eq!(status, StatusCode::OK);
        login!($app, $username, $password)
    }};
}

#[actix_web::test]
async fn test_menu_returns_seeded_items_in_order() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let (status, body) = get_json!(app, "/api/menu", None::<Cookie<'static>>);
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Chicken Biryani", "Paneer Frankie", "White Pasta", "Oreo Shake"]
    );
    assert_eq!(body[0]["price"], json!(150.0));
    assert_eq!(body[0]["image"], json!("static/images/chickenbiryani.jpg"));
}

#[actix_web::test]
async fn test_seeding_twice_keeps_single_copy() {
    let (state, db) = setup().await;
    seed_defaults(&db, "admin123", TEST_COST).await.unwrap();
    let items = state.catalog_service.list_items().await.unwrap();
    assert_eq!(items.len(), 4);
    let admins = user_entity::Entity::find().all(&db).await.unwrap();
    assert_eq!(admins.len(), 1);
}

#[actix_web::test]
async fn test_signup_login_scenario() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let (status, body) = post_json!(app, "/api/signup", json!({ "username": "alice", "password": "pw1" }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, body) = post_json!(app, "/api/signup", json!({ "username": "alice", "password": "pw2" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "user exists" }));

    let cookie = login!(app, "alice", "pw1");
    assert!(cookie.is_some());

    let (status, body) = post_json!(app, "/api/login", json!({ "username": "alice", "password": "wrong" }));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "invalid credentials" }));

    let (status, body) = post_json!(app, "/api/login", json!({ "username": "nobody", "password": "pw1" }));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "invalid credentials" }));
}

#[actix_web::test]
async fn test_signup_and_login_require_both_fields() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    for body in [
        json!({ "username": "alice" }),
        json!({ "username": "", "password": "pw1" }),
        json!({}),
    ] {
        let (status, resp) = post_json!(app, "/api/signup", body.clone());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp, json!({ "error": "username and password required" }));

        let (status, resp) = post_json!(app, "/api/login", body);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp, json!({ "error": "username and password required" }));
    }
}

#[actix_web::test]
async fn test_signup_accepts_form_body() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/signup")
        .set_form([("username", "carol"), ("password", "pw3")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = login!(app, "carol", "pw3");
    assert!(cookie.is_some());
}

#[actix_web::test]
async fn test_password_is_hashed_and_never_returned() {
    let (state, db) = setup().await;
    let app = test_app!(state);
    let _ = signup_and_login!(app, "alice", "pw1");

    let users = user_entity::Entity::find().all(&db).await.unwrap();
    let alice = users.iter().find(|u| u.username == "alice").unwrap();
    assert_ne!(alice.password, "pw1");
    assert!(alice.password.starts_with("$2"));

    let admin = login!(app, "admin", "admin123");
    let (status, body) = get_json!(app, "/api/admin/customers", admin);
    assert_eq!(status, StatusCode::OK);
    let text = body.to_string();
    assert!(!text.contains("password"));
    assert!(!text.contains(&alice.password));
    // 按ID倒序
    assert_eq!(body[0]["username"], json!("alice"));
    assert_eq!(body[1]["username"], json!("admin"));
}

#[actix_web::test]
async fn test_anonymous_my_orders_requires_login() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let (status, body) = get_json!(app, "/api/my_orders", None::<Cookie<'static>>);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "login required" }));
}

#[actix_web::test]
async fn test_tampered_cookie_is_anonymous() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let forged = Some(Cookie::new(COOKIE, "eyJhbGciOiJIUzI1NiJ9.e30.invalid"));
    let (status, body) = get_json!(app, "/api/my_orders", forged);
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "login required" }));
}

#[actix_web::test]
async fn test_create_order_checks_login_before_items() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let (status, body) = post_json!(app, "/api/create_order", json!({ "items": [] }));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "login required" }));

    let cookie = signup_and_login!(app, "alice", "pw1");
    let (status, body) = post_json!(app, "/api/create_order", json!({ "items": [] }), cookie);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "no items" }));

    let (status, body) = post_json!(app, "/api/create_order", json!({}), cookie);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "no items" }));
}

#[actix_web::test]
async fn test_malformed_order_body_becomes_no_items() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let cookie = signup_and_login!(app, "alice", "pw1");

    let req = test::TestRequest::post()
        .uri("/api/create_order")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"items\": [")
        .cookie(cookie.clone().unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "no items" }));

    let (status, body) = post_json!(app, "/api/create_order", json!({ "items": "not json" }), cookie);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "no items" }));
}

#[actix_web::test]
async fn test_create_order_snapshots_catalog_price() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let cookie = signup_and_login!(app, "alice", "pw1");

    let (status, body) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": [
            { "id": 1, "qty": 2, "price": 0.01 },
            { "id": 4 }
        ] }),
        cookie
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    let order_id = body["order_id"].as_i64().unwrap() as i32;

    let lines = state.order_service.list_order_lines(order_id).await.unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].item_id, lines[0].qty, lines[0].price), (1, 2, 150.0));
    assert_eq!((lines[1].item_id, lines[1].qty, lines[1].price), (4, 1, 90.0));

    let (status, body) = get_json!(app, "/api/my_orders", cookie);
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], json!(order_id));
    assert_eq!(orders[0]["status"], json!("created"));
    assert_eq!(orders[0]["total"], json!(390.0));
}

#[actix_web::test]
async fn test_create_order_accepts_encoded_items_string() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let cookie = signup_and_login!(app, "alice", "pw1");

    let (status, body) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": "[{\"id\": 3, \"qty\": 1}]" }),
        cookie
    );
    assert_eq!(status, StatusCode::OK);
    let order_id = body["order_id"].as_i64().unwrap() as i32;
    let lines = state.order_service.list_order_lines(order_id).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].price, 140.0);
}

#[actix_web::test]
async fn test_create_order_tolerates_string_numbers() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let cookie = signup_and_login!(app, "alice", "pw1");

    let (status, body) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": [{ "id": 1, "qty": 1, "price": "150" }] }),
        cookie
    );
    assert_eq!(status, StatusCode::OK);
    let order_id = body["order_id"].as_i64().unwrap() as i32;
    let lines = state.order_service.list_order_lines(order_id).await.unwrap();
    assert_eq!((lines[0].item_id, lines[0].qty, lines[0].price), (1, 1, 150.0));

    let (status, body) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": [{ "id": "2", "qty": "2", "price": 1 }] }),
        cookie
    );
    assert_eq!(status, StatusCode::OK);
    let order_id = body["order_id"].as_i64().unwrap() as i32;
    let lines = state.order_service.list_order_lines(order_id).await.unwrap();
    assert_eq!((lines[0].item_id, lines[0].qty, lines[0].price), (2, 2, 120.0));

    let (status, body) = get_json!(app, "/api/my_orders", cookie);
    assert_eq!(status, StatusCode::OK);
    let totals: Vec<&Value> = body.as_array().unwrap().iter().map(|o| &o["total"]).collect();
    assert_eq!(totals, vec![&json!(240.0), &json!(150.0)]);
}

#[actix_web::test]
async fn test_invalid_lines_are_rejected_before_writing() {
    let (state, db) = setup().await;
    let app = test_app!(state);
    let cookie = signup_and_login!(app, "alice", "pw1");

    let (status, body) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": [{ "id": 1 }, { "id": 999 }] }),
        cookie
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "unknown item" }));

    let (status, body) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": [{ "id": 1, "qty": 0 }] }),
        cookie
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid quantity" }));

    let orders = order_entity::Entity::find().all(&db).await.unwrap();
    assert!(orders.is_empty());
}

#[actix_web::test]
async fn test_order_rolls_back_when_line_insert_fails() {
    let (state, db) = setup().await;
    let app = test_app!(state);
    let cookie = signup_and_login!(app, "alice", "pw1");

    db.execute_unprepared(
        "CREATE TRIGGER reject_order_lines BEFORE INSERT ON order_items \
         BEGIN SELECT RAISE(ABORT, 'line rejected'); END;",
    )
    .await
    .unwrap();

    let (status, body) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": [{ "id": 1 }, { "id": 2 }] }),
        cookie
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "database error" }));

    // 订单行已先于明细写入，失败后必须一并回滚
    let orders = order_entity::Entity::find().all(&db).await.unwrap();
    assert!(orders.is_empty());

    db.execute_unprepared("DROP TRIGGER reject_order_lines;")
        .await
        .unwrap();
    let (status, _) = post_json!(
        app,
        "/api/create_order",
        json!({ "items": [{ "id": 1 }] }),
        cookie
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order_entity::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_my_orders_only_lists_own_orders_newest_first() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let alice = signup_and_login!(app, "alice", "pw1");
    let bob = signup_and_login!(app, "bob", "pw2");

    let (_, first) = post_json!(app, "/api/create_order", json!({ "items": [{ "id": 1 }] }), alice);
    let (_, second) = post_json!(app, "/api/create_order", json!({ "items": [{ "id": 2 }] }), alice);
    let _ = post_json!(app, "/api/create_order", json!({ "items": [{ "id": 3 }] }), bob);

    let (status, body) = get_json!(app, "/api/my_orders", alice);
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&Value> = body.as_array().unwrap().iter().map(|o| &o["id"]).collect();
    assert_eq!(ids, vec![&second["order_id"], &first["order_id"]]);
}

#[actix_web::test]
async fn test_admin_updates_order_status() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let alice = signup_and_login!(app, "alice", "pw1");
    let (_, created) = post_json!(app, "/api/create_order", json!({ "items": [{ "id": 2 }] }), alice);
    let order_id = created["order_id"].as_i64().unwrap();

    let admin = login!(app, "admin", "admin123");

    let (status, body) = post_json!(app, "/api/admin/order/5/update", json!({ "status": "shipped" }), admin);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid status" }));

    let (status, body) = post_json!(app, "/api/admin/order/5/update", json!({}), admin);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid status" }));

    let uri = format!("/api/admin/order/{order_id}/update");
    let (status, body) = post_json!(app, &uri, json!({ "status": "delivered" }), admin);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, body) = get_json!(app, "/api/admin/orders", admin);
    assert_eq!(status, StatusCode::OK);
    let order = &body.as_array().unwrap()[0];
    assert_eq!(order["id"], json!(order_id));
    assert_eq!(order["status"], json!("delivered"));
    assert_eq!(order["username"], json!("alice"));

    // 不存在的订单：返回成功且不改动任何数据
    let (status, body) = post_json!(app, "/api/admin/order/9999/update", json!({ "status": "cancelled" }), admin);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
    let (_, body) = get_json!(app, "/api/admin/orders", admin);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["status"], json!("delivered"));
}

#[actix_web::test]
async fn test_admin_orders_keep_orders_of_missing_users() {
    let (state, db) = setup().await;
    let app = test_app!(state);
    let alice = signup_and_login!(app, "alice", "pw1");
    let _ = post_json!(app, "/api/create_order", json!({ "items": [{ "id": 1 }] }), alice);

    let alice_row = user_entity::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.username == "alice")
        .unwrap();
    user_entity::Entity::delete_by_id(alice_row.id)
        .exec(&db)
        .await
        .unwrap();

    let admin = login!(app, "admin", "admin123");
    let (status, body) = get_json!(app, "/api/admin/orders", admin);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["username"], Value::Null);
}

#[actix_web::test]
async fn test_admin_api_is_forbidden_for_others() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let alice = signup_and_login!(app, "alice", "pw1");

    for cookie in [None::<Cookie<'static>>, alice.clone()] {
        let (status, body) = get_json!(app, "/api/admin/orders", cookie);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "error": "forbidden" }));

        let (status, _) = get_json!(app, "/api/admin/customers", cookie);
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = post_json!(app, "/api/admin/order/1/update", json!({ "status": "delivered" }), cookie);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "error": "forbidden" }));
    }
}

#[actix_web::test]
async fn test_admin_pages_redirect_non_admin() {
    let (state, _db) = setup().await;
    let app = test_app!(state);
    let alice = signup_and_login!(app, "alice", "pw1");

    for uri in ["/admin.html", "/admin/feedbacks", "/admin/queries"] {
        for cookie in [None::<Cookie<'static>>, alice.clone()] {
            let mut req = test::TestRequest::get().uri(uri);
            if let Some(c) = cookie {
                req = req.cookie(c);
            }
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
            assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        }
    }

    let admin = login!(app, "admin", "admin123");
    let req = test::TestRequest::get()
        .uri("/admin.html")
        .cookie(admin.unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "<h1>Admin</h1>");
}

#[actix_web::test]
async fn test_public_pages_are_served() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    let body = test::read_body(resp).await;
    assert_eq!(body, "<h1>FoodieZone</h1>");

    // 路由表中存在但文件缺失
    let resp = test::call_service(&app, test::TestRequest::get().uri("/cart.html").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_feedback_and_queries_flow() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/submit_feedback")
        .set_form([("name", "Ann"), ("message", "Great food")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true, "msg": "Feedback stored" }));

    let (status, body) = post_json!(app, "/submit_feedback", json!({ "message": "anonymous" }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], json!("Feedback stored"));

    let (status, body) = post_json!(
        app,
        "/submit_query",
        json!({ "name": "Ben", "email": "ben@example.com", "message": "Open on Sunday?" })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "msg": "Query stored" }));

    let admin = login!(app, "admin", "admin123");
    let (status, body) = get_json!(app, "/admin/feedbacks", admin);
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["message"], json!("anonymous"));
    assert_eq!(list[0]["name"], Value::Null);
    assert_eq!(list[1]["name"], json!("Ann"));

    let (status, body) = get_json!(app, "/admin/queries", admin);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["email"], json!("ben@example.com"));
}

#[actix_web::test]
async fn test_logout_clears_session_and_is_idempotent() {
    let (state, _db) = setup().await;
    let app = test_app!(state);

    let req = test::TestRequest::post().uri("/api/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == COOKIE)
        .map(|c| c.into_owned())
        .unwrap();
    assert_eq!(removal.value(), "");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));

    let cookie = signup_and_login!(app, "alice", "pw1");
    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(cookie.unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
