use super::*;

/// Tests registering creates an inactive account with its profile.
///
/// Verifies that the default member role is assigned, the password is stored
/// as a hash and the profile belongs to the requested team.
///
/// Expected: Ok(UserDto) with status Inactive
#[tokio::test]
async fn creates_inactive_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let team_id = seed(db).await?;

    let user = AuthService::new(&state)
        .register(register_params("camila_z", "Camila@Example.com", team_id))
        .await?;

    assert_eq!(user.username, "camila_z");
    assert_eq!(user.email, "camila@example.com");
    assert_eq!(user.status, UserStatus::Inactive);
    let profile = user.profile.unwrap();
    assert_eq!(profile.team_id, team_id);
    assert_eq!(profile.telephone.as_deref(), Some("3105551234"));

    let stored = crate::server::service::crud::CrudService::<entity::user::Entity>::new(db)
        .get(user.id)
        .await?;
    assert_ne!(stored.password, PASSWORD);
    assert!(verify_password(PASSWORD, &stored.password));

    Ok(())
}

/// Tests a second registration with the same e-mail is refused.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let team_id = seed(db).await?;
    let service = AuthService::new(&state);
    service
        .register(register_params("first", "rider@example.com", team_id))
        .await?;

    let result = service
        .register(register_params("second", "rider@example.com", team_id))
        .await;

    match result {
        Err(AppError::Conflict(message)) => assert_eq!(
            message,
            "User with email rider@example.com is already registered!"
        ),
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests a second registration with the same username is refused.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let team_id = seed(db).await?;
    let service = AuthService::new(&state);
    service
        .register(register_params("rider", "one@example.com", team_id))
        .await?;

    let result = service
        .register(register_params("rider", "two@example.com", team_id))
        .await;

    match result {
        Err(AppError::Conflict(message)) => assert_eq!(message, "User rider already exists!"),
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests registering into an unknown team leaves no account behind.
///
/// Expected: Err(AppError::NotFound) and no user row
#[tokio::test]
async fn rejects_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    seed(db).await?;

    let result = AuthService::new(&state)
        .register(register_params("lost", "lost@example.com", 999))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let found = crate::server::service::user::UserService::new(db)
        .find_by_email("lost@example.com")
        .await?;
    assert!(found.is_none());

    Ok(())
}
