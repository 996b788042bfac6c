use super::*;

/// Tests a partial update only writes the given fields.
///
/// Verifies that the name changes, the kind stays as it was and
/// `updated_at` moves forward.
///
/// Expected: Ok(Some(location)) with the new name
#[tokio::test]
async fn applies_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_location(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let updated = repo
        .update(
            original.id,
            UpdateLocationParams {
                name: Some("Rionegro".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Rionegro");
    assert_eq!(updated.kind, original.kind);
    assert_eq!(updated.is_capital, original.is_capital);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);

    Ok(())
}

/// Tests an explicit null clears an optional column.
///
/// Expected: Ok(Some(location)) with department_id = None
#[tokio::test]
async fn clears_nullable_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::location::LocationFactory::new(db)
        .kind(LocationType::Department)
        .build()
        .await?;
    let city = factory::location::LocationFactory::new(db)
        .department_id(department.id)
        .build()
        .await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let updated = repo
        .update(
            city.id,
            UpdateLocationParams {
                department_id: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.department_id, None);

    Ok(())
}

/// Tests updating a soft deleted row writes nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_soft_deleted_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    repo.soft_delete(location.id).await?;

    let result = repo
        .update(
            location.id,
            UpdateLocationParams {
                name: Some("Sabaneta".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let stored = repo.find_any(location.id).await?.unwrap();
    assert_eq!(stored.name, location.name);

    Ok(())
}
