use super::*;

/// Tests account and profile changes are applied together.
///
/// Expected: Ok(user) with the new role, status and team
#[tokio::test]
async fn updates_account_and_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let other_role = factory::create_role(db).await?;
    let other_team = factory::create_team(db, location.id).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                role_id: Some(other_role.id),
                status: Some(UserStatus::Inactive),
                profile: Some(UpdateProfileParams {
                    first_name: Some("Valentina".to_string()),
                    team_id: Some(other_team.id),
                    ..Default::default()
                }),
            },
        )
        .await?;

    assert_eq!(updated.role_id, other_role.id);
    assert_eq!(updated.status, UserStatus::Inactive);
    let profile = updated.profile.unwrap();
    assert_eq!(profile.first_name, "Valentina");
    assert_eq!(profile.team_id, other_team.id);

    Ok(())
}

/// Tests an unknown team leaves the account untouched.
///
/// Verifies that the role change in the same request is not stored when the profile
/// part of the update fails.
///
/// Expected: Err(AppError::NotFound("Team #9999 not found!")) and the original role kept
#[tokio::test]
async fn unknown_team_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, team, role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let other_role = factory::create_role(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                role_id: Some(other_role.id),
                status: None,
                profile: Some(UpdateProfileParams {
                    team_id: Some(9999),
                    ..Default::default()
                }),
            },
        )
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Team #9999 not found!"),
        other => panic!("expected not found, got {:?}", other),
    }

    let stored = entity::user::Entity::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role_id, role.id);
    let stored_profile = entity::profile::Entity::find_by_id(profile.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_profile.team_id, team.id);

    Ok(())
}

/// Tests profile changes for an account without a profile.
///
/// Expected: Err(AppError::NotFound) and the requested status not stored
#[tokio::test]
async fn missing_profile_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;
    let user = factory::create_user(db, role.id).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                role_id: None,
                status: Some(UserStatus::Inactive),
                profile: Some(UpdateProfileParams {
                    nickname: Some(Some("Tigre".to_string())),
                    ..Default::default()
                }),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let stored = entity::user::Entity::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, user.status);

    Ok(())
}
