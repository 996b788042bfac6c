use super::*;

fn review(score: i32) -> CreateReviewParams {
    CreateReviewParams {
        score,
        comment: Some("Excelente ruta".to_string()),
    }
}

/// Tests a member who attended can review the event once.
///
/// Expected: Ok for the first review, Err(AppError::BadRequest) for the second
#[tokio::test]
async fn reviews_attended_event_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let event = factory::create_event(db, location.id, profile.id, team.id).await?;
    factory::create_participation(db, profile.id, event.id, true).await?;

    let service = ReviewService::new(db);
    let created = service.create(event.id, user.id, review(5)).await?;

    assert_eq!(created.score, 5);
    assert_eq!(created.author_id, profile.id);

    let result = service.create(event.id, user.id, review(4)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a registered member who did not attend cannot review.
///
/// Expected: Err(AppError::BadRequest("User #.. didn't attend the event #..!"))
#[tokio::test]
async fn requires_attendance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let event = factory::create_event(db, location.id, profile.id, team.id).await?;
    factory::create_participation(db, profile.id, event.id, false).await?;

    let result = ReviewService::new(db).create(event.id, user.id, review(3)).await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            format!("User #{} didn't attend the event #{}!", user.id, event.id)
        ),
        other => panic!("expected bad request, got {:?}", other),
    }

    Ok(())
}

/// Tests reviews of a member can be narrowed by score.
///
/// Expected: Ok with only the matching review
#[tokio::test]
async fn filters_user_reviews_by_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let first = factory::create_event(db, location.id, profile.id, team.id).await?;
    let second = factory::create_event(db, location.id, profile.id, team.id).await?;
    factory::create_participation(db, profile.id, first.id, true).await?;
    factory::create_participation(db, profile.id, second.id, true).await?;

    let service = ReviewService::new(db);
    service.create(first.id, user.id, review(5)).await?;
    service.create(second.id, user.id, review(2)).await?;

    let top = service.by_user(user.id, Some(5)).await?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].event_id, first.id);
    assert_eq!(service.by_user(user.id, None).await?.len(), 2);

    Ok(())
}
