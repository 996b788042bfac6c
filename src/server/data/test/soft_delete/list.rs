use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<Vec<location::Model>, DbErr> {
    let mut created = Vec::new();
    for (name, is_capital) in [
        ("Medellín", true),
        ("Bello", false),
        ("Envigado", false),
        ("Itagüí", false),
        ("Caldas", false),
    ] {
        created.push(
            factory::location::LocationFactory::new(db)
                .name(name)
                .is_capital(is_capital)
                .build()
                .await?,
        );
    }

    Ok(created)
}

/// Tests a window returns its rows and the full count.
///
/// Expected: Ok with 2 rows out of 5
#[tokio::test]
async fn returns_window_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = seed(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let select = apply_sort(repo.select_active(), &parse_sort(Some("id=asc"))).unwrap();
    let (rows, total) = repo
        .list(select, &PageRequest { skip: 2, limit: 2 })
        .await?;

    assert_eq!(total, 5);
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![created[2].id, created[3].id]);

    Ok(())
}

/// Tests a zero limit returns every row after `skip`.
///
/// Expected: Ok with 4 rows
#[tokio::test]
async fn zero_limit_returns_rest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let (rows, total) = repo
        .list(repo.select_active(), &PageRequest { skip: 1, limit: 0 })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(rows.len(), 4);

    Ok(())
}

/// Tests filters and sort clauses combine on the active rows.
///
/// Verifies that soft deleted rows are excluded from both the rows and the
/// count and that rows come back in descending name order.
///
/// Expected: Ok with the non capital cities sorted by name descending
#[tokio::test]
async fn filters_and_sorts_active_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = seed(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    repo.soft_delete(created[4].id).await?;

    let select = apply_filters(repo.select_active(), &parse_filter(Some("is_capital=false")))
        .unwrap();
    let select = apply_sort(select, &parse_sort(Some("name=desc"))).unwrap();
    let (rows, total) = repo.list(select, &PageRequest::default()).await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Itagüí", "Envigado", "Bello"]);

    Ok(())
}

/// Tests a skip beyond the database's signed range.
///
/// Expected: Ok with no rows and the full count
#[tokio::test]
async fn huge_skip_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(location::Entity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db).await?;

    let repo = SoftDeleteRepository::<location::Entity>::new(db);
    let (rows, total) = repo
        .list(
            repo.select_active(),
            &PageRequest {
                skip: i64::MAX as u64 + 1,
                limit: 5,
            },
        )
        .await?;

    assert_eq!(total, 5);
    assert!(rows.is_empty());

    Ok(())
}
