use super::*;

fn answer(author_user_id: i32, feedback_id: i32) -> CreateFeedbackAnswerParams {
    CreateFeedbackAnswerParams {
        content: "Ya revisamos la ruta y quedó corregida.".to_string(),
        author_user_id,
        feedback_id,
    }
}

/// Tests answering a feedback marks it resolved.
///
/// Expected: Ok(answer) and the feedback status is `Resolved`
#[tokio::test]
async fn answer_resolves_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, team, _role, _user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let (admin, admin_profile) = factory::helpers::create_member_in_team(db, team.id).await?;
    let feedback = factory::create_feedback(db, profile.id).await?;
    assert_eq!(feedback.status, FeedbackStatus::Pending);

    let created = FeedbackAnswerService::new(db)
        .create(answer(admin.id, feedback.id))
        .await?;

    assert_eq!(created.author_id, admin_profile.id);
    let feedback = FeedbackService::new(db).get(feedback.id).await?;
    assert_eq!(feedback.status, FeedbackStatus::Resolved);
    assert_eq!(FeedbackService::new(db).answer(feedback.id).await?.id, created.id);

    Ok(())
}

/// Tests a feedback accepts a single answer.
///
/// Expected: Err(AppError::Conflict) for the second answer
#[tokio::test]
async fn rejects_second_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let feedback = factory::create_feedback(db, profile.id).await?;

    let service = FeedbackAnswerService::new(db);
    service.create(answer(user.id, feedback.id)).await?;
    let result = service.create(answer(user.id, feedback.id)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests answering a missing feedback leaves nothing behind.
///
/// Expected: Err(AppError::NotFound("Feedback #999 not found!"))
#[tokio::test]
async fn rejects_unknown_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let result = FeedbackAnswerService::new(db).create(answer(user.id, 999)).await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Feedback #999 not found!"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests a feedback without an answer reports it.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unanswered_feedback_has_no_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, _user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let feedback = factory::create_feedback(db, profile.id).await?;

    let result = FeedbackService::new(db).answer(feedback.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
