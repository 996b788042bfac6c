use super::*;

/// Tests birthdays match on month and day regardless of the year.
///
/// Expected: Ok with the two members born on March 8
#[tokio::test]
async fn birthdays_match_month_and_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let team = factory::create_team(db, location.id).await?;
    let older = member_born(db, team.id, date(1985, 3, 8)).await?;
    let younger = member_born(db, team.id, date(2001, 3, 8)).await?;
    member_born(db, team.id, date(1985, 3, 9)).await?;

    let users = UserService::new(db).birthdays_on(date(2026, 3, 8)).await?;

    let mut ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    ids.sort();
    assert_eq!(ids, vec![older, younger]);
    assert!(users.iter().all(|u| u.profile.is_some()));

    Ok(())
}

/// Tests the exact date and the inclusive range queries.
///
/// Expected: Ok with one member for the date and both range ends included
#[tokio::test]
async fn finds_by_date_and_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let team = factory::create_team(db, location.id).await?;
    let first = member_born(db, team.id, date(1990, 1, 1)).await?;
    let second = member_born(db, team.id, date(1990, 6, 30)).await?;
    member_born(db, team.id, date(1991, 1, 1)).await?;

    let service = UserService::new(db);

    let on = service
        .by_birthdate(BirthdateQuery::On(date(1990, 6, 30)))
        .await?;
    assert_eq!(on.len(), 1);
    assert_eq!(on[0].id, second);

    let between = service
        .by_birthdate(BirthdateQuery::Between(date(1990, 1, 1), date(1990, 6, 30)))
        .await?;
    let mut ids: Vec<i32> = between.iter().map(|u| u.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first, second]);

    Ok(())
}
