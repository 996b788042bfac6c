use super::*;

/// Tests soft deleted rows are hidden from active lookups.
///
/// Verifies that `find_active`, `exists` and `find_where` skip a soft deleted
/// row while `find_any` still returns it.
///
/// Expected: Ok(None) from find_active, Ok(Some) from find_any
#[tokio::test]
async fn hides_soft_deleted_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_location(db).await?;
    let removed = factory::create_location(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    repo.soft_delete(removed.id).await?;

    assert!(repo.find_active(removed.id).await?.is_none());
    assert!(!repo.exists(removed.id).await?);
    assert!(repo.find_any(removed.id).await?.is_some());
    assert!(repo.exists(kept.id).await?);

    let active = repo
        .find_where(location::Column::Kind.eq(LocationType::City))
        .await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, kept.id);

    Ok(())
}

/// Tests an unknown id resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoftDeleteRepository::<location::Entity>::new(db);

    assert!(repo.find_active(999).await?.is_none());
    assert!(repo.find_any(999).await?.is_none());

    Ok(())
}

/// Tests children of a row are found through their parent column.
///
/// Expected: Ok with the cities of the department ordered by id
#[tokio::test]
async fn finds_children_by_parent() -> Result<(), DbErr> {
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
    let first = factory::location::LocationFactory::new(db)
        .department_id(department.id)
        .build()
        .await?;
    let second = factory::location::LocationFactory::new(db)
        .department_id(department.id)
        .build()
        .await?;
    factory::create_location(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let cities = repo
        .find_where(location::Column::DepartmentId.eq(department.id))
        .await?;

    let ids: Vec<i32> = cities.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(
        repo.count_where(location::Column::DepartmentId.eq(department.id))
            .await?,
        2
    );

    Ok(())
}
