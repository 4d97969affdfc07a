//! End-to-end API tests over an in-memory SQLite database.
//!
//! The full axum application is built with `build_app` and driven with
//! `tower::ServiceExt::oneshot`, so middleware (auth, role gates) is
//! exercised exactly as in production.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use backoffice_server::auth::{JwtConfig, JwtService};
use backoffice_server::auth::password::hash_password;
use backoffice_server::db::{MIGRATOR, seed};
use backoffice_server::{Config, ServerState, build_app};
use shared::models::UserRole;

// 2024-03-15T00:00:00Z
const MARCH_15: i64 = 1_710_460_800_000;
const DAY: i64 = 86_400_000;
const HOUR: i64 = 3_600_000;

const ADMIN_USERNAME: &str = "admin@restaurant.test";
const ADMIN_PASSWORD: &str = "Admin123!@#";

fn test_config() -> Config {
    Config {
        database_path: ":memory:".into(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-key-32-chars!".into(),
            expiration_minutes: 1440,
            issuer: "backoffice-server".into(),
            audience: "backoffice-clients".into(),
        },
        environment: "test".into(),
        client_url: "http://localhost:3000".into(),
        cors_allowed_origins: vec!["http://localhost:3000".into()],
        email_from: None,
        salary_base_rate: 1000.0,
        admin_username: ADMIN_USERNAME.into(),
        admin_password: ADMIN_PASSWORD.into(),
    }
}

async fn test_state() -> ServerState {
    // One connection: each in-memory SQLite connection is its own database
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    MIGRATOR.run(&pool).await.expect("migrations failed");

    let config = test_config();
    seed::seed_initial_admin(&pool, &config)
        .await
        .expect("admin seeding failed");

    let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
    ServerState::new(config, pool, jwt_service, None)
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn send_raw_body(app: &Router, method: &str, path: &str, token: Option<&str>) -> Vec<u8> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Insert a user directly and return its id
async fn insert_user(pool: &SqlitePool, name: &str, username: &str, role: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    let hash = hash_password("Staff123!").unwrap();
    sqlx::query(
        "INSERT INTO users (id, full_name, username, password_hash, role, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
    )
    .bind(&id)
    .bind(name)
    .bind(username)
    .bind(&hash)
    .bind(role)
    .bind(0_i64)
    .execute(pool)
    .await
    .unwrap();
    id
}

async fn insert_menu_item(pool: &SqlitePool, name: &str, price: f64, cost_price: f64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO menu_items (name, price, cost_price, is_active, created_at)
         VALUES (?1, ?2, ?3, 1, 0) RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(cost_price)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_paid_order(
    pool: &SqlitePool,
    waiter_id: &str,
    total_price: f64,
    paid_at: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO orders (table_number, waiter_id, status, total_price, created_at, paid_at)
         VALUES ('5', ?1, 'PAID', ?2, ?3, ?4) RETURNING id",
    )
    .bind(waiter_id)
    .bind(total_price)
    .bind(paid_at - HOUR)
    .bind(paid_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_order_item(
    pool: &SqlitePool,
    order_id: i64,
    menu_item_id: i64,
    quantity: i64,
    price: f64,
) {
    sqlx::query(
        "INSERT INTO order_items (order_id, menu_item_id, quantity, price)
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(order_id)
    .bind(menu_item_id)
    .bind(quantity)
    .bind(price)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_shift(pool: &SqlitePool, user_id: &str, start: i64, end: i64) {
    let shift_id: i64 = sqlx::query_scalar(
        "INSERT INTO shifts (start_time, end_time) VALUES (?1, ?2) RETURNING id",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO shift_staff (shift_id, user_id) VALUES (?1, ?2)")
        .bind(shift_id)
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
}

fn token_for(state: &ServerState, user_id: &str, role: UserRole) -> String {
    state.jwt_service.generate_token(user_id, role).unwrap()
}

// ─── Health ─────────────────────────────────────────────────────────

#[tokio::test]
async fn health_is_public() {
    let state = test_state().await;
    let app = build_app(state);

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

// ─── Login ──────────────────────────────────────────────────────────

#[tokio::test]
async fn login_rejects_wrong_password() {
    let state = test_state().await;
    let app = build_app(state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": ADMIN_USERNAME, "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Неверные учетные данные");
}

#[tokio::test]
async fn login_returns_decodable_token() {
    let state = test_state().await;
    let app = build_app(state.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token missing");
    let claims = state.jwt_service.validate_token(token).unwrap();
    assert_eq!(claims.role, UserRole::Admin);
}

#[tokio::test]
async fn login_rejects_missing_fields() {
    let state = test_state().await;
    let app = build_app(state);

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "", "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─── Auth & role gates ──────────────────────────────────────────────

#[tokio::test]
async fn reports_require_authentication() {
    let state = test_state().await;
    let app = build_app(state);

    let (status, _) = send(
        &app,
        "GET",
        "/api/reports/revenue?startDate=2024-03-15&endDate=2024-03-15",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reports_forbidden_for_waiters() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;
    let token = token_for(&state, &waiter_id, UserRole::Waiter);
    let app = build_app(state);

    let (status, _) = send(
        &app,
        "GET",
        "/api/reports/revenue?startDate=2024-03-15&endDate=2024-03-15",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn reports_allowed_for_managers() {
    let state = test_state().await;
    let manager_id = insert_user(&state.pool, "Мария", "maria@restaurant.test", "MANAGER").await;
    let token = token_for(&state, &manager_id, UserRole::Manager);
    let app = build_app(state);

    let (status, _) = send(
        &app,
        "GET",
        "/api/reports/revenue?startDate=2024-03-15&endDate=2024-03-15",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_token_is_unauthorized() {
    let state = test_state().await;
    let app = build_app(state);

    let (status, _) = send(
        &app,
        "GET",
        "/api/staff/",
        Some("definitely-not-a-jwt"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ─── Reports ────────────────────────────────────────────────────────

#[tokio::test]
async fn report_range_is_required() {
    let state = test_state().await;
    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    let (status, _) = send(&app, "GET", "/api/reports/revenue", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "GET",
        "/api/reports/revenue?startDate=not-a-date&endDate=2024-03-15",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn revenue_report_single_day_scenario() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;
    for total in [100.0, 200.0, 300.0] {
        insert_paid_order(&state.pool, &waiter_id, total, MARCH_15 + 12 * HOUR).await;
    }
    // An OPEN order in range must not count
    sqlx::query(
        "INSERT INTO orders (table_number, waiter_id, status, total_price, created_at)
         VALUES ('9', ?1, 'OPEN', 999.0, ?2)",
    )
    .bind(&waiter_id)
    .bind(MARCH_15 + 13 * HOUR)
    .execute(&state.pool)
    .await
    .unwrap();

    let manager_id = insert_user(&state.pool, "Мария", "maria@restaurant.test", "MANAGER").await;
    let token = token_for(&state, &manager_id, UserRole::Manager);
    let app = build_app(state);

    let (status, body) = send(
        &app,
        "GET",
        "/api/reports/revenue?startDate=2024-03-15&endDate=2024-03-15",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dailyData"], json!([{ "date": "2024-03-15", "revenue": 600.0 }]));
    assert_eq!(body["stats"]["totalRevenue"], 600.0);
    assert_eq!(body["stats"]["averageRevenue"], 600.0);
    assert_eq!(body["stats"]["maxRevenue"], 600.0);
}

#[tokio::test]
async fn revenue_report_empty_range_is_zero() {
    let state = test_state().await;
    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    let (status, body) = send(
        &app,
        "GET",
        "/api/reports/revenue?startDate=2030-01-01&endDate=2030-01-31",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dailyData"], json!([]));
    assert_eq!(body["stats"]["totalRevenue"], 0.0);
    assert_eq!(body["stats"]["averageRevenue"], 0.0);
    assert_eq!(body["stats"]["maxRevenue"], 0.0);
}

#[tokio::test]
async fn report_is_byte_identical_on_repeat() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;
    insert_paid_order(&state.pool, &waiter_id, 250.5, MARCH_15 + 10 * HOUR).await;
    insert_paid_order(&state.pool, &waiter_id, 99.5, MARCH_15 + DAY + 10 * HOUR).await;

    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    let path = "/api/reports/sales?startDate=2024-03-15&endDate=2024-03-20";
    let first = send_raw_body(&app, "GET", path, Some(&token)).await;
    let second = send_raw_body(&app, "GET", path, Some(&token)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn sales_report_top_items_and_profit() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;
    let borscht = insert_menu_item(&state.pool, "Борщ", 250.0, 100.0).await;
    let pelmeni = insert_menu_item(&state.pool, "Пельмени", 300.0, 120.0).await;

    // Order 1: 2 × borscht (500), order 2: 1 × pelmeni (300)
    let order1 = insert_paid_order(&state.pool, &waiter_id, 500.0, MARCH_15 + 12 * HOUR).await;
    insert_order_item(&state.pool, order1, borscht, 2, 250.0).await;
    let order2 = insert_paid_order(&state.pool, &waiter_id, 300.0, MARCH_15 + 14 * HOUR).await;
    insert_order_item(&state.pool, order2, pelmeni, 1, 300.0).await;

    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    let (status, body) = send(
        &app,
        "GET",
        "/api/reports/sales?startDate=2024-03-15&endDate=2024-03-15",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["totalSales"], 800.0);
    assert_eq!(body["stats"]["averageCheck"], 400.0);
    // Profit: 2 × (250 − 100) + 1 × (300 − 120) = 480
    assert_eq!(body["stats"]["totalProfit"], 480.0);

    let top = body["topSellingItems"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    // Sorted by revenue: borscht 500 before pelmeni 300
    assert_eq!(top[0]["name"], "Борщ");
    assert_eq!(top[0]["sales"], 2);
    assert_eq!(top[0]["revenue"], 500.0);
    assert_eq!(top[1]["name"], "Пельмени");
}

#[tokio::test]
async fn salary_report_counts_only_contained_shifts() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;
    // Two shifts fully inside [03-15, 03-21]
    insert_shift(&state.pool, &waiter_id, MARCH_15 + 9 * HOUR, MARCH_15 + 17 * HOUR).await;
    insert_shift(
        &state.pool,
        &waiter_id,
        MARCH_15 + DAY + 9 * HOUR,
        MARCH_15 + DAY + 17 * HOUR,
    )
    .await;
    // One shift starting before the range (overlaps, must not count)
    insert_shift(&state.pool, &waiter_id, MARCH_15 - 2 * HOUR, MARCH_15 + 6 * HOUR).await;

    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    let (status, body) = send(
        &app,
        "GET",
        "/api/reports/salary?startDate=2024-03-15&endDate=2024-03-21",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let employees = body["employeeData"].as_array().unwrap();
    let anna = employees
        .iter()
        .find(|e| e["name"] == "Анна")
        .expect("waiter missing from salary report");
    assert_eq!(anna["shifts"], 2);
    assert_eq!(anna["salary"], 2000.0);

    // Seeded admin + waiter + second admin are all active employees
    assert_eq!(body["stats"]["employeeCount"], 3);

    let positions = body["positionData"].as_array().unwrap();
    let waiters = positions.iter().find(|p| p["name"] == "WAITER").unwrap();
    assert_eq!(waiters["value"], 2000.0);
}

// ─── Staff management ───────────────────────────────────────────────

#[tokio::test]
async fn staff_list_excludes_admins_and_reports_shift_status() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;
    insert_user(&state.pool, "Борис", "boris@restaurant.test", "CASHIER").await;

    // Put the waiter on a shift that started today (start at `now` so the
    // test cannot cross the UTC midnight boundary)
    let now = shared::util::now_millis();
    insert_shift(&state.pool, &waiter_id, now, now + 8 * HOUR).await;

    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    let (status, body) = send(&app, "GET", "/api/staff/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let members = body.as_array().unwrap();
    // Admin accounts never appear in the staff listing
    assert!(members.iter().all(|m| m["role"] != "ADMIN"));
    assert_eq!(members.len(), 2);

    let anna = members.iter().find(|m| m["fullName"] == "Анна").unwrap();
    assert_eq!(anna["status"], "работает");
    let boris = members.iter().find(|m| m["fullName"] == "Борис").unwrap();
    assert_eq!(boris["status"], "не на смене");
}

#[tokio::test]
async fn staff_create_update_delete_flow() {
    let state = test_state().await;
    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    // Create
    let (status, created) = send(
        &app,
        "POST",
        "/api/staff/",
        Some(&token),
        Some(json!({
            "fullName": "Вера Кузнецова",
            "username": "vera@restaurant.test",
            "password": "Vera123!",
            "role": "CASHIER"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["role"], "CASHIER");
    assert!(created.get("passwordHash").is_none());

    // Duplicate username is a conflict, caught by the UNIQUE index
    let (status, body) = send(
        &app,
        "POST",
        "/api/staff/",
        Some(&token),
        Some(json!({
            "fullName": "Другая Вера",
            "username": "vera@restaurant.test",
            "password": "Vera123!",
            "role": "WAITER"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Пользователь с таким email уже существует");

    // Update
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/staff/{id}"),
        Some(&token),
        Some(json!({
            "fullName": "Вера Кузнецова",
            "username": "vera@restaurant.test",
            "role": "MANAGER"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "MANAGER");

    // Soft delete
    let (status, _) = send(&app, "DELETE", &format!("/api/staff/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deactivated staff disappear from the listing
    let (_, listing) = send(&app, "GET", "/api/staff/", Some(&token), None).await;
    assert!(
        listing
            .as_array()
            .unwrap()
            .iter()
            .all(|m| m["id"] != id.as_str())
    );

    // Unknown id is a 404
    let (status, _) = send(&app, "DELETE", "/api/staff/missing-id", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn staff_write_requires_admin() {
    let state = test_state().await;
    let manager_id = insert_user(&state.pool, "Мария", "maria@restaurant.test", "MANAGER").await;
    let token = token_for(&state, &manager_id, UserRole::Manager);
    let app = build_app(state);

    // Managers can read...
    let (status, _) = send(&app, "GET", "/api/staff/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    // ...but not create
    let (status, _) = send(
        &app,
        "POST",
        "/api/staff/",
        Some(&token),
        Some(json!({
            "fullName": "x",
            "username": "x@restaurant.test",
            "password": "Xx123456",
            "role": "WAITER"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ─── Password reset ─────────────────────────────────────────────────

#[tokio::test]
async fn forgot_password_is_neutral_for_unknown_email() {
    let state = test_state().await;
    let app = build_app(state);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/forgot-password",
        None,
        Some(json!({ "email": "nobody@restaurant.test" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().starts_with("Если указанный email"));
}

#[tokio::test]
async fn reset_password_token_is_single_use() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;

    // Token created by the forgot-password flow (inserted directly here)
    let token_value = "ab".repeat(32);
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO password_reset_tokens (id, token, user_id, used, expires_at, created_at)
         VALUES ('t-1', ?1, ?2, 0, ?3, ?4)",
    )
    .bind(&token_value)
    .bind(&waiter_id)
    .bind(now + 3_600_000)
    .bind(now)
    .execute(&state.pool)
    .await
    .unwrap();

    let app = build_app(state.clone());

    // First redemption succeeds
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/reset-password",
        None,
        Some(json!({ "token": token_value, "newPassword": "NewPass123!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Пароль успешно изменен");

    // Second redemption of the same token fails
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/reset-password",
        None,
        Some(json!({ "token": token_value, "newPassword": "Other123!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Недействительный или просроченный токен");

    // The new password actually works
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "anna@restaurant.test", "password": "NewPass123!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn expired_reset_token_is_rejected() {
    let state = test_state().await;
    let waiter_id = insert_user(&state.pool, "Анна", "anna@restaurant.test", "WAITER").await;

    let token_value = "cd".repeat(32);
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO password_reset_tokens (id, token, user_id, used, expires_at, created_at)
         VALUES ('t-2', ?1, ?2, 0, ?3, ?4)",
    )
    .bind(&token_value)
    .bind(&waiter_id)
    .bind(now - 1_000)
    .bind(now - 3_600_000)
    .execute(&state.pool)
    .await
    .unwrap();

    let app = build_app(state);

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/reset-password",
        None,
        Some(json!({ "token": token_value, "newPassword": "NewPass123!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─── Profile ────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_profile_round_trip() {
    let state = test_state().await;
    let admin_id = insert_user(&state.pool, "Админ", "a2@restaurant.test", "ADMIN").await;
    let token = token_for(&state, &admin_id, UserRole::Admin);
    let app = build_app(state);

    let (status, profile) = send(&app, "GET", "/api/admin/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["username"], "a2@restaurant.test");

    let (status, updated) = send(
        &app,
        "PUT",
        "/api/admin/profile",
        Some(&token),
        Some(json!({
            "fullName": "Главный Администратор",
            "username": "a2@restaurant.test"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["fullName"], "Главный Администратор");
}

#[tokio::test]
async fn admin_profile_forbidden_for_managers() {
    let state = test_state().await;
    let manager_id = insert_user(&state.pool, "Мария", "maria@restaurant.test", "MANAGER").await;
    let token = token_for(&state, &manager_id, UserRole::Manager);
    let app = build_app(state);

    let (status, _) = send(&app, "GET", "/api/admin/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn me_returns_current_profile() {
    let state = test_state().await;
    let manager_id = insert_user(&state.pool, "Мария", "maria@restaurant.test", "MANAGER").await;
    let token = token_for(&state, &manager_id, UserRole::Manager);
    let app = build_app(state);

    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], manager_id.as_str());
    assert_eq!(body["role"], "MANAGER");
}
