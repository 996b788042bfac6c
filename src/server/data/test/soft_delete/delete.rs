use super::*;

/// Tests a soft delete marks the row and keeps it stored.
///
/// Expected: Ok(1) with deleted = true and deleted_at set
#[tokio::test]
async fn soft_delete_marks_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let affected = repo.soft_delete(location.id).await?;

    assert_eq!(affected, 1);
    let stored = repo.find_any(location.id).await?.unwrap();
    assert!(stored.deleted);
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Tests deleting an already soft deleted row touches nothing.
///
/// Verifies that `deleted_at` keeps the time of the first deletion.
///
/// Expected: Ok(0)
#[tokio::test]
async fn soft_delete_is_not_repeated() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    repo.soft_delete(location.id).await?;
    let first = repo.find_any(location.id).await?.unwrap().deleted_at;

    let affected = repo.soft_delete(location.id).await?;

    assert_eq!(affected, 0);
    assert_eq!(repo.find_any(location.id).await?.unwrap().deleted_at, first);

    Ok(())
}

/// Tests a hard delete removes soft deleted rows too.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn hard_delete_removes_any_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    repo.soft_delete(location.id).await?;

    let affected = repo.hard_delete(location.id).await?;

    assert_eq!(affected, 1);
    assert!(repo.find_any(location.id).await?.is_none());
    assert_eq!(repo.hard_delete(location.id).await?, 0);

    Ok(())
}

/// Tests a hard delete cascades to dependents declared with cascade.
///
/// Verifies that removing a department removes its cities.
///
/// Expected: Ok with the city gone
#[tokio::test]
async fn hard_delete_cascades() -> Result<(), DbErr> {
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
    repo.hard_delete(department.id).await?;

    assert!(repo.find_any(city.id).await?.is_none());

    Ok(())
}

/// Tests a hard delete of a row still referenced without cascade fails.
///
/// Expected: Err(DbErr) and the location is kept
#[tokio::test]
async fn hard_delete_refuses_referenced_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .with_table(entity::company::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    factory::create_company(db, location.id).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let result = repo.hard_delete(location.id).await;

    assert!(result.is_err());
    assert!(repo.find_active(location.id).await?.is_some());

    Ok(())
}
