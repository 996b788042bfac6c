use super::*;

fn reply(author_user_id: i32, post_id: i32, parent_id: Option<i32>) -> CreateCommentParams {
    CreateCommentParams {
        content: "¿A qué hora salimos?".to_string(),
        author_user_id,
        post_id,
        parent_id,
    }
}

/// Tests a reply is stored under its parent on the same post.
///
/// Expected: Ok(comment) listed in the parent's replies
#[tokio::test]
async fn replies_on_same_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let post = factory::create_post(db, profile.id).await?;
    let parent = factory::create_comment(db, profile.id, post.id, None).await?;

    let service = CommentService::new(db);
    let created = service
        .create(reply(user.id, post.id, Some(parent.id)))
        .await?;

    assert_eq!(created.parent_id, Some(parent.id));
    assert_eq!(created.author_id, profile.id);
    let replies = service.replies(parent.id).await?;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].id, created.id);

    Ok(())
}

/// Tests a parent comment from another post is refused.
///
/// Expected: Err(AppError::BadRequest) and no comment stored on the post
#[tokio::test]
async fn rejects_parent_from_other_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let post = factory::create_post(db, profile.id).await?;
    let other_post = factory::create_post(db, profile.id).await?;
    let foreign_parent = factory::create_comment(db, profile.id, other_post.id, None).await?;

    let result = CommentService::new(db)
        .create(reply(user.id, post.id, Some(foreign_parent.id)))
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            format!(
                "Comment #{} does not belong to post #{}!",
                foreign_parent.id, post.id
            )
        ),
        other => panic!("expected bad request, got {:?}", other),
    }
    assert!(PostService::new(db).comments(post.id).await?.is_empty());

    Ok(())
}
