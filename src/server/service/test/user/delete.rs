use super::*;

/// Tests a soft delete hides the account and its profile.
///
/// Expected: Ok(()), then NotFound for the user and a profile marked deleted
#[tokio::test]
async fn soft_delete_removes_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let service = UserService::new(db);
    service.delete(user.id, false).await?;

    assert!(matches!(service.get(user.id).await, Err(AppError::NotFound(_))));
    let stored = entity::profile::Entity::find_by_id(profile.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted);
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Tests deleting an account twice.
///
/// Expected: Err(AppError::NotFound) on the second soft delete
#[tokio::test]
async fn soft_delete_twice_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let service = UserService::new(db);
    service.delete(user.id, false).await?;
    let result = service.delete(user.id, false).await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, format!("User #{} not found!", user.id))
        }
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}
