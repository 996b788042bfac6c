use test_utils::{builder::TestBuilder, factory};

use super::*;

/// Creates an active member with a fresh role and returns its user id.
async fn member(db: &DatabaseConnection, email: &str) -> i32 {
    let role = factory::create_role(db).await.unwrap();

    member_with_role(db, email, role.id).await
}

/// Tests the login form issues tokens accepted by protected routes.
///
/// Expected: 200 with a bearer pair, then 200 on `/users/me` with the member's e-mail
#[tokio::test]
async fn login_token_reaches_current_user() {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let id = member(db, "camila@motoclub.co").await;

    let (status, tokens) = login(app(db), "camila@motoclub.co", PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tokens["token_type"], "bearer");
    let access = tokens["access_token"].as_str().unwrap();

    let (status, body) =
        send_request(app(db), with_bearer(Method::GET, "/users/me", access)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["email"], "camila@motoclub.co");
    assert!(body.get("password").is_none());
}

/// Tests a wrong password is refused.
///
/// Expected: 401 with "Incorrect email or password"
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    member(db, "camila@motoclub.co").await;

    let (status, body) = login(app(db), "camila@motoclub.co", "otra-clave").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Incorrect email or password");
}

/// Tests protected routes without a token.
///
/// Expected: 401 with "Could not validate credentials"
#[tokio::test]
async fn protected_route_requires_token() {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), Method::GET, "/users/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Could not validate credentials");
}

/// Tests a member cannot read another member's card.
///
/// Expected: 403 for the other card, 200 for their own
#[tokio::test]
async fn membership_card_is_self_only() {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let own = member(db, "camila@motoclub.co").await;
    let other = member(db, "mateo@motoclub.co").await;

    let access = access_token(db, "camila@motoclub.co").await;
    let access = access.as_str();

    let (status, _) = send_request(
        app(db),
        with_bearer(Method::GET, &format!("/users/{}/membership-card", other), access),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send_request(
        app(db),
        with_bearer(Method::GET, &format!("/users/{}/membership-card", own), access),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member_name"], "Ana Restrepo");
}
