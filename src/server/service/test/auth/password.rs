use super::*;

/// Tests changing the password replaces the stored hash.
///
/// Expected: Ok and only the new password logs in
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = active_user(db, "ana@example.com", UserStatus::Active).await?;

    let service = AuthService::new(&state);
    service
        .change_password(&user, PASSWORD, "Nueva#Clave9")
        .await?;

    assert!(service.login("ana@example.com", "Nueva#Clave9").await.is_ok());
    assert!(service.login("ana@example.com", PASSWORD).await.is_err());

    Ok(())
}

/// Tests the old password must match and differ from the new one.
///
/// Expected: Err(AppError::BadRequest) for both cases
#[tokio::test]
async fn rejects_wrong_or_unchanged_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = active_user(db, "ana@example.com", UserStatus::Active).await?;
    let service = AuthService::new(&state);

    match service.change_password(&user, "Wrong#Pass1", "Nueva#Clave9").await {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Old password is incorrect!"),
        other => panic!("expected bad request, got {:?}", other),
    }
    match service.change_password(&user, PASSWORD, PASSWORD).await {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            "New password cannot be the same as the old password."
        ),
        other => panic!("expected bad request, got {:?}", other),
    }

    Ok(())
}

/// Tests a reset token sets a new password.
///
/// Expected: Ok and the new password logs in
#[tokio::test]
async fn resets_password_with_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    active_user(db, "ana@example.com", UserStatus::Active).await?;

    let service = AuthService::new(&state);
    service.request_password_reset("ana@example.com").await?;

    let token = state.tokens.issue("ana@example.com", TokenKind::Reset)?;
    service.reset_password(&token, "Nueva#Clave9").await?;

    assert!(service.login("ana@example.com", "Nueva#Clave9").await.is_ok());

    Ok(())
}

/// Tests a reset cannot be requested for an unknown e-mail.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reset_request_needs_known_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let state = AppState::for_test(test.db.clone().unwrap());

    let result = AuthService::new(&state)
        .request_password_reset("nobody@example.com")
        .await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "User with email nobody@example.com not found")
        }
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}
