use super::*;

/// Tests a request without a bearer token is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let state = AppState::for_test(test.db.clone().unwrap());

    let headers = HeaderMap::new();
    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a refresh token cannot be used as an access token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let role = factory::create_role(db).await?;
    let user = factory::create_user(db, role.id).await?;

    let headers = bearer(&state, &user.email, TokenKind::Refresh);
    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an inactive account is refused even with a valid token.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let role = factory::create_role(db).await?;
    let user = factory::user::UserFactory::new(db, role.id)
        .status(UserStatus::Inactive)
        .build()
        .await?;

    let headers = bearer(&state, &user.email, TokenKind::Access);
    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::InactiveUser(id))) => assert_eq!(id, user.id),
        other => panic!("Expected InactiveUser, got: {:?}", other.map(|u| u.user.id)),
    }

    Ok(())
}

/// Tests an admin passes the admin role check.
///
/// Expected: Ok(CurrentUser) carrying the admin role
#[tokio::test]
async fn grants_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let role = factory::role::RoleFactory::new(db)
        .name(ADMIN_ROLE)
        .build()
        .await?;
    let user = factory::create_user(db, role.id).await?;

    let headers = bearer(&state, &user.email, TokenKind::Access);
    let current = AuthGuard::new(&state, &headers)
        .require(&[Permission::AnyRole(&[ADMIN_ROLE])])
        .await?;

    assert_eq!(current.user.id, user.id);
    assert!(current.is_admin());

    Ok(())
}

/// Tests a member is denied an admin-only route.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member_on_admin_route() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let role = factory::role::RoleFactory::new(db).name("member").build().await?;
    let user = factory::create_user(db, role.id).await?;

    let headers = bearer(&state, &user.email, TokenKind::Access);
    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::AnyRole(&[ADMIN_ROLE])])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, user.id),
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.user.id)),
    }

    Ok(())
}

/// Tests a member may act on their own account but not on another one.
///
/// Expected: Ok for self, Err(AuthError::AccessDenied) for another user
#[tokio::test]
async fn self_or_role_checks_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let role = factory::role::RoleFactory::new(db).name("member").build().await?;
    let user = factory::create_user(db, role.id).await?;
    let other = factory::create_user(db, role.id).await?;

    let headers = bearer(&state, &user.email, TokenKind::Access);
    let guard = AuthGuard::new(&state, &headers);

    assert!(guard
        .require(&[Permission::SelfOrRole(user.id, &[ADMIN_ROLE])])
        .await
        .is_ok());
    assert!(matches!(
        guard
            .require(&[Permission::SelfOrRole(other.id, &[ADMIN_ROLE])])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
