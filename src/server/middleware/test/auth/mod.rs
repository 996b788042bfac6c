use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::UserStatus;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission, ADMIN_ROLE},
    service::token::TokenKind,
    state::AppState,
};

mod require;

fn bearer(state: &AppState, email: &str, kind: TokenKind) -> HeaderMap {
    let token = state.tokens.issue(email, kind).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

#[test]
fn extracts_bearer_token() {
    let mut headers = HeaderMap::new();
    assert_eq!(bearer_token(&headers), None);

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert_eq!(bearer_token(&headers), None);

    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc.def"));
    assert_eq!(bearer_token(&headers), Some("abc.def"));

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
    assert_eq!(bearer_token(&headers), None);
}
