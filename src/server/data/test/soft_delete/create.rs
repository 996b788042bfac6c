use super::*;

/// Tests inserting a row fills the bookkeeping columns.
///
/// Verifies that a new row is active and that its creation and update
/// timestamps are identical.
///
/// Expected: Ok with deleted = false and created_at == updated_at
#[tokio::test]
async fn creates_active_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let created = repo.create(city("Envigado")).await?;

    assert_eq!(created.name, "Envigado");
    assert!(!created.deleted);
    assert!(created.deleted_at.is_none());
    assert_eq!(created.created_at, created.updated_at);

    Ok(())
}

/// Tests the generated id can be read back.
///
/// Expected: Ok(Some(location))
#[tokio::test]
async fn created_row_is_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let created = repo.create(city("Bello")).await?;

    let found = repo.find_active(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}
