use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{DeleteParamsDto, ErrorDto, ListParamsDto, PaginatedDto},
        comment::CommentDto,
        post::{CreatePostDto, CreateTagDto, PostDto, TagDto, UpdatePostDto, UpdateTagDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        model::{
            pagination::ListQuery,
            post::{CreatePostParams, CreateTagParams, UpdatePostParams, UpdateTagParams},
        },
        service::post::{PostService, TagService},
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tags";

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "posts";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_tags, create_tag))
        .routes(routes!(get_tag, update_tag, delete_tag))
        .routes(routes!(get_tag_posts))
        .routes(routes!(list_posts, create_post))
        .routes(routes!(get_post, update_post, delete_post))
        .routes(routes!(get_post_author))
        .routes(routes!(get_post_tags))
        .routes(routes!(get_post_comments))
}

#[utoipa::path(
    get,
    path = "/tags",
    tag = TAG_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of tags", body = PaginatedDto<TagDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(tags.into_dto::<TagDto>())))
}

#[utoipa::path(
    post,
    path = "/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 409, description = "Tag name already exists", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTagParams::from_dto(payload)?;
    let tag = TagService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(TagDto::from(tag))))
}

#[utoipa::path(
    get,
    path = "/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "The tag", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(TagDto::from(tag))))
}

#[utoipa::path(
    put,
    path = "/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    request_body = UpdateTagDto,
    responses(
        (status = 200, description = "Tag updated", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Tag name already exists", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateTagParams::from_dto(payload)?;
    let tag = TagService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(TagDto::from(tag))))
}

#[utoipa::path(
    delete,
    path = "/tags/{id}",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Tag is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    TagService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/tags/{id}/posts",
    tag = TAG_TAG,
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Posts carrying the tag", body = Vec<PostDto>),
        (status = 404, description = "Tag not found", body = ErrorDto)
    ),
)]
pub async fn get_tag_posts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let posts = TagService::new(&state.db).posts(id).await?;
    let posts_dto: Vec<PostDto> = posts.into_iter().map(PostDto::from).collect();

    Ok((StatusCode::OK, Json(posts_dto)))
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = POST_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of posts", body = PaginatedDto<PostDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto::<PostDto>())))
}

/// Publish a post, optionally tagged.
///
/// The slug is derived from the title. Every id of `tag_ids` must resolve to a tag,
/// the 404 lists the ones that do not.
#[utoipa::path(
    post,
    path = "/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 404, description = "Author or tags not found", body = ErrorDto),
        (status = 409, description = "Post title already exists", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePostParams::from_dto(payload)?;
    let post = PostService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

/// Partially update a post. A new title regenerates the slug.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Post title already exists", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdatePostParams::from_dto(payload)?;
    let post = PostService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Post is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    PostService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/posts/{id}/author",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Author with profile", body = UserDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn get_post_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let author = PostService::new(&state.db).author(id).await?;

    Ok((StatusCode::OK, Json(author)))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/tags",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Tags of the post", body = Vec<TagDto>),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn get_post_tags(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tags = PostService::new(&state.db).tags(id).await?;
    let tags_dto: Vec<TagDto> = tags.into_iter().map(TagDto::from).collect();

    Ok((StatusCode::OK, Json(tags_dto)))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments on the post", body = Vec<CommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = PostService::new(&state.db).comments(id).await?;
    let comments_dto: Vec<CommentDto> = comments.into_iter().map(CommentDto::from).collect();

    Ok((StatusCode::OK, Json(comments_dto)))
}
