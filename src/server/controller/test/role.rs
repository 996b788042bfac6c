use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::server::model::role::ADMIN_ROLE;

fn create_role_request(token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/roles")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "name": "treasurer", "description": "Handles club dues" }).to_string(),
        ))
        .unwrap()
}

/// Tests an administrator can create roles.
///
/// Expected: 201 with the new role
#[tokio::test]
async fn admin_creates_role() {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::role::RoleFactory::new(db)
        .name(ADMIN_ROLE)
        .build()
        .await
        .unwrap();
    member_with_role(db, "admin@motoclub.co", admin.id).await;
    let token = access_token(db, "admin@motoclub.co").await;

    let (status, body) = send_request(app(db), create_role_request(&token)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "treasurer");
}

/// Tests a member without the admin role cannot create roles.
///
/// Expected: 403 and no role stored
#[tokio::test]
async fn member_cannot_create_role() {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::create_role(db).await.unwrap();
    member_with_role(db, "camila@motoclub.co", role.id).await;
    let token = access_token(db, "camila@motoclub.co").await;

    let (status, body) = send_request(app(db), create_role_request(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "User doesn't have the necessary role to access this route"
    );
    let (_, roles) = send(app(db), Method::GET, "/roles?filter=name=treasurer", None).await;
    assert_eq!(roles["pagination"]["total_records"], 0);
}

/// Tests deleting a role without a token.
///
/// Expected: 401
#[tokio::test]
async fn delete_role_requires_token() {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::create_role(db).await.unwrap();

    let (status, _) = send(app(db), Method::DELETE, &format!("/roles/{}", role.id), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
