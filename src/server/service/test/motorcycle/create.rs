use super::*;

/// Tests a motorcycle is registered to the owner's profile.
///
/// Expected: Ok(motorcycle) listed among the owner's motorcycles
#[tokio::test]
async fn registers_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorcycle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let brand = factory::create_brand(db).await?;

    let service = MotorcycleService::new(db);
    let created = service.create(motorcycle("KTM390", brand.id, user.id)).await?;

    assert_eq!(created.owner_id, profile.id);
    let owned = service.by_user(user.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, created.id);

    Ok(())
}

/// Tests license plates are unique.
///
/// Expected: Err(AppError::Conflict("Motorcycle KTM390 already exists!"))
#[tokio::test]
async fn rejects_duplicate_plate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorcycle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let (other, _other_profile) = factory::helpers::create_member_in_team(db, team.id).await?;
    let brand = factory::create_brand(db).await?;

    let service = MotorcycleService::new(db);
    service.create(motorcycle("KTM390", brand.id, user.id)).await?;
    let result = service.create(motorcycle("KTM390", brand.id, other.id)).await;

    match result {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, "Motorcycle KTM390 already exists!")
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests changing a plate to one already registered.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn update_rejects_taken_plate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_motorcycle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let brand = factory::create_brand(db).await?;

    let service = MotorcycleService::new(db);
    service.create(motorcycle("KTM390", brand.id, user.id)).await?;
    let second = service.create(motorcycle("BMW310", brand.id, user.id)).await?;

    let result = service
        .update(
            second.id,
            UpdateMotorcycleParams {
                license_plate: Some("KTM390".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
