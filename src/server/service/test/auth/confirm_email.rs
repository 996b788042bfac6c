use super::*;

/// Tests the confirmation token activates a registered account.
///
/// Verifies that the member can log in after confirming.
///
/// Expected: Ok(()) and a successful login
#[tokio::test]
async fn activates_registered_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let team_id = seed(db).await?;
    let service = AuthService::new(&state);
    service
        .register(register_params("camila_z", "camila@example.com", team_id))
        .await?;

    let token = state
        .tokens
        .issue("camila@example.com", TokenKind::Confirmation)?;
    service.confirm_email(&token).await?;

    let tokens = service.login("camila@example.com", PASSWORD).await?;
    assert!(!tokens.access_token.is_empty());

    Ok(())
}

/// Tests confirming an already active account is a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_already_active() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    active_user(db, "ana@example.com", UserStatus::Active).await?;

    let token = state.tokens.issue("ana@example.com", TokenKind::Confirmation)?;
    let result = AuthService::new(&state).confirm_email(&token).await;

    match result {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, "User with email ana@example.com is already active!")
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests a token issued for another purpose cannot confirm an account.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_reset_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    active_user(db, "ana@example.com", UserStatus::Inactive).await?;

    let token = state.tokens.issue("ana@example.com", TokenKind::Reset)?;
    let result = AuthService::new(&state).confirm_email(&token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
