use super::*;

/// Tests valid credentials return a bearer token pair.
///
/// Verifies that the access token resolves back to the same account.
///
/// Expected: Ok(TokenDto) with token_type "bearer"
#[tokio::test]
async fn issues_token_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = active_user(db, "ana@example.com", UserStatus::Active).await?;

    let service = AuthService::new(&state);
    let tokens = service.login("ana@example.com", PASSWORD).await?;

    assert_eq!(tokens.token_type, "bearer");
    let current = service.current_user(&tokens.access_token).await?;
    assert_eq!(current.id, user.id);

    Ok(())
}

/// Tests a wrong password and an unknown e-mail fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    active_user(db, "ana@example.com", UserStatus::Active).await?;

    let service = AuthService::new(&state);

    assert!(matches!(
        service.login("ana@example.com", "Wrong#Pass1").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", PASSWORD).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests an unconfirmed account cannot log in.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn rejects_inactive_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = active_user(db, "ana@example.com", UserStatus::Inactive).await?;

    let result = AuthService::new(&state).login("ana@example.com", PASSWORD).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser(id))) if id == user.id
    ));

    Ok(())
}

/// Tests a refresh token yields a new pair while an access token is refused.
///
/// Expected: Ok(TokenDto) for refresh, Err(AuthError::InvalidToken) for access
#[tokio::test]
async fn refreshes_with_refresh_token_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    active_user(db, "ana@example.com", UserStatus::Active).await?;

    let service = AuthService::new(&state);
    let tokens = service.login("ana@example.com", PASSWORD).await?;

    assert!(service.refresh(&tokens.refresh_token).await.is_ok());
    assert!(matches!(
        service.refresh(&tokens.access_token).await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
