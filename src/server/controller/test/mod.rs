use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use entity::sea_orm_active_enums::UserStatus;
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::factory;
use tower::ServiceExt;

use crate::server::{router, state::AppState, util::password::hash_password};

mod agreement;
mod auth;
mod role;

const PASSWORD: &str = "Rodada#2024";

fn app(db: &DatabaseConnection) -> Router {
    router::router(AppState::for_test(db.clone()))
}

/// Sends a JSON request through the router and returns the status with the parsed body.
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    };

    send_request(app, request.unwrap()).await
}

/// Runs `request` through the router. Empty bodies come back as `Value::Null`.
async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Creates an active member of `role_id` whose password is [`PASSWORD`] and returns its user id.
async fn member_with_role(db: &DatabaseConnection, email: &str, role_id: i32) -> i32 {
    let location = factory::create_location(db).await.unwrap();
    let team = factory::create_team(db, location.id).await.unwrap();
    let user = factory::user::UserFactory::new(db, role_id)
        .email(email)
        .password_hash(hash_password(PASSWORD).unwrap())
        .status(UserStatus::Active)
        .build()
        .await
        .unwrap();
    factory::create_profile(db, user.id, team.id).await.unwrap();

    user.id
}

async fn login(app: Router, email: &str, password: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("username={}&password={}", email, password)))
        .unwrap();

    send_request(app, request).await
}

/// Logs in as `email` and returns the access token.
async fn access_token(db: &DatabaseConnection, email: &str) -> String {
    let (_, tokens) = login(app(db), email, PASSWORD).await;

    tokens["access_token"].as_str().unwrap().to_string()
}

fn with_bearer(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}
