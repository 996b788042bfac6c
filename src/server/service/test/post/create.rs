use super::*;

/// Tests a post is stored with its tags and author profile.
///
/// Expected: Ok(post) whose tags are the two requested tags
#[tokio::test]
async fn creates_post_with_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let rutas = factory::create_tag(db).await?;
    let eventos = factory::create_tag(db).await?;

    let service = PostService::new(db);
    let post = service
        .create(post_params(
            "Crónica de la rodada a Jardín",
            user.id,
            vec![rutas.id, eventos.id],
        ))
        .await?;

    assert_eq!(post.slug, "cronica-de-la-rodada-a-jardin");
    assert_eq!(post.author_id, profile.id);

    let mut tag_ids: Vec<i32> = service.tags(post.id).await?.into_iter().map(|t| t.id).collect();
    tag_ids.sort();
    assert_eq!(tag_ids, vec![rutas.id, eventos.id]);

    Ok(())
}

/// Tests every unknown tag id is named in the error.
///
/// Expected: Err(AppError::NotFound("Tags #998, #999 not found!")) and no post stored
#[tokio::test]
async fn rejects_unknown_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let tag = factory::create_tag(db).await?;

    let service = PostService::new(db);
    let result = service
        .create(post_params("Rodada sin etiquetas", user.id, vec![tag.id, 998, 999]))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Tags #998, #999 not found!"),
        other => panic!("expected not found, got {:?}", other),
    }
    assert_eq!(entity::post::Entity::find().count(db).await?, 0);

    Ok(())
}

/// Tests a post without tags.
///
/// Expected: Ok(post) with no tags
#[tokio::test]
async fn creates_post_without_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let service = PostService::new(db);
    let post = service
        .create(post_params("Mantenimiento de cadena", user.id, vec![]))
        .await?;

    assert!(service.tags(post.id).await?.is_empty());

    Ok(())
}

/// Tests post titles are unique.
///
/// Expected: Err(AppError::Conflict("Post Rodada al páramo already exists!"))
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let service = PostService::new(db);
    service
        .create(post_params("Rodada al páramo", user.id, vec![]))
        .await?;
    let result = service
        .create(post_params("Rodada al páramo", user.id, vec![]))
        .await;

    match result {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, "Post Rodada al páramo already exists!")
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}
