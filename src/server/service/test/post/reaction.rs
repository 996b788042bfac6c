use super::*;

fn like(comment_id: i32, author_user_id: i32) -> CreateReactionParams {
    CreateReactionParams {
        kind: ReactionType::Like,
        comment_id,
        author_user_id,
    }
}

/// Tests a member reacts to a comment at most once.
///
/// Expected: Ok for the first reaction, Err(AppError::Conflict) for the second
#[tokio::test]
async fn rejects_second_reaction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let post = factory::create_post(db, profile.id).await?;
    let comment = factory::create_comment(db, profile.id, post.id, None).await?;

    let service = ReactionService::new(db);
    let first = service.create(like(comment.id, user.id)).await?;
    assert_eq!(first.author_id, profile.id);

    let result = service.create(like(comment.id, user.id)).await;

    match result {
        Err(AppError::Conflict(message)) => assert_eq!(
            message,
            format!("User #{} already reacted to comment #{}!", user.id, comment.id)
        ),
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests different members may react to the same comment.
///
/// Expected: Ok with two reactions on the comment
#[tokio::test]
async fn members_react_independently() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let (other, _other_profile) = factory::helpers::create_member_in_team(db, team.id).await?;
    let post = factory::create_post(db, profile.id).await?;
    let comment = factory::create_comment(db, profile.id, post.id, None).await?;

    let service = ReactionService::new(db);
    service.create(like(comment.id, user.id)).await?;
    service.create(like(comment.id, other.id)).await?;

    assert_eq!(CommentService::new(db).reactions(comment.id).await?.len(), 2);

    Ok(())
}
