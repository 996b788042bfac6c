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
        comment::{
            CommentDto, CreateCommentDto, CreateReactionDto, ReactionDto, UpdateCommentDto,
            UpdateReactionDto,
        },
        post::PostDto,
        user::UserDto,
    },
    server::{
        error::AppError,
        model::{
            comment::{
                CreateCommentParams, CreateReactionParams, UpdateCommentParams,
                UpdateReactionParams,
            },
            pagination::ListQuery,
        },
        service::post::{CommentService, ReactionService},
        state::AppState,
    },
};

/// Tag for grouping comment and reaction endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comments";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_comments, create_comment))
        .routes(routes!(get_comment, update_comment, delete_comment))
        .routes(routes!(get_comment_author))
        .routes(routes!(get_comment_post))
        .routes(routes!(get_comment_parent))
        .routes(routes!(get_comment_replies))
        .routes(routes!(get_comment_reactions))
        .routes(routes!(list_reactions, create_reaction))
        .routes(routes!(get_reaction, update_reaction, delete_reaction))
}

#[utoipa::path(
    get,
    path = "/comments",
    tag = COMMENT_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of comments", body = PaginatedDto<CommentDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(comments.into_dto::<CommentDto>())))
}

/// Comment on a post, or reply to another comment of the same post.
#[utoipa::path(
    post,
    path = "/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 404, description = "Post, parent comment or author not found", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCommentParams::from_dto(payload)?;
    let comment = CommentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(CommentDto::from(comment))))
}

#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The comment", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(CommentDto::from(comment))))
}

#[utoipa::path(
    put,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateCommentParams::from_dto(payload)?;
    let comment = CommentService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(CommentDto::from(comment))))
}

#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 409, description = "Comment is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/comments/{id}/author",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Author with profile", body = UserDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn get_comment_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let author = CommentService::new(&state.db).author(id).await?;

    Ok((StatusCode::OK, Json(author)))
}

#[utoipa::path(
    get,
    path = "/comments/{id}/post",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Commented post", body = PostDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn get_comment_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = CommentService::new(&state.db).post(id).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    get,
    path = "/comments/{id}/parent",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment this one replies to", body = CommentDto),
        (status = 404, description = "Comment not found, or it is not a reply", body = ErrorDto)
    ),
)]
pub async fn get_comment_parent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let parent = CommentService::new(&state.db).parent(id).await?;

    Ok((StatusCode::OK, Json(CommentDto::from(parent))))
}

#[utoipa::path(
    get,
    path = "/comments/{id}/replies",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Replies to the comment", body = Vec<CommentDto>),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn get_comment_replies(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let replies = CommentService::new(&state.db).replies(id).await?;
    let replies_dto: Vec<CommentDto> = replies.into_iter().map(CommentDto::from).collect();

    Ok((StatusCode::OK, Json(replies_dto)))
}

#[utoipa::path(
    get,
    path = "/comments/{id}/reactions",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Reactions to the comment", body = Vec<ReactionDto>),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn get_comment_reactions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reactions = CommentService::new(&state.db).reactions(id).await?;
    let reactions_dto: Vec<ReactionDto> = reactions.into_iter().map(ReactionDto::from).collect();

    Ok((StatusCode::OK, Json(reactions_dto)))
}

#[utoipa::path(
    get,
    path = "/reactions",
    tag = COMMENT_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of reactions", body = PaginatedDto<ReactionDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_reactions(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let reactions = ReactionService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(reactions.into_dto::<ReactionDto>())))
}

#[utoipa::path(
    post,
    path = "/reactions",
    tag = COMMENT_TAG,
    request_body = CreateReactionDto,
    responses(
        (status = 201, description = "Reaction created", body = ReactionDto),
        (status = 400, description = "Invalid reaction data", body = ErrorDto),
        (status = 404, description = "Comment or author not found", body = ErrorDto),
        (status = 409, description = "The member already reacted to the comment", body = ErrorDto)
    ),
)]
pub async fn create_reaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateReactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReactionParams::from_dto(payload);
    let reaction = ReactionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ReactionDto::from(reaction))))
}

#[utoipa::path(
    get,
    path = "/reactions/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Reaction id")),
    responses(
        (status = 200, description = "The reaction", body = ReactionDto),
        (status = 404, description = "Reaction not found", body = ErrorDto)
    ),
)]
pub async fn get_reaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reaction = ReactionService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ReactionDto::from(reaction))))
}

#[utoipa::path(
    put,
    path = "/reactions/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Reaction id")),
    request_body = UpdateReactionDto,
    responses(
        (status = 200, description = "Reaction updated", body = ReactionDto),
        (status = 400, description = "Invalid reaction data", body = ErrorDto),
        (status = 404, description = "Reaction not found", body = ErrorDto),
        (status = 409, description = "The member already reacted to the comment", body = ErrorDto)
    ),
)]
pub async fn update_reaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateReactionParams::from_dto(payload);
    let reaction = ReactionService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(ReactionDto::from(reaction))))
}

#[utoipa::path(
    delete,
    path = "/reactions/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Reaction id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Reaction deleted"),
        (status = 404, description = "Reaction not found", body = ErrorDto),
        (status = 409, description = "Reaction is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_reaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    ReactionService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}
