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
        feedback::{
            CreateFeedbackAnswerDto, CreateFeedbackDto, FeedbackAnswerDto, FeedbackDto,
            UpdateFeedbackAnswerDto, UpdateFeedbackDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        model::{
            feedback::{
                CreateFeedbackAnswerParams, CreateFeedbackParams, UpdateFeedbackAnswerParams,
                UpdateFeedbackParams,
            },
            pagination::ListQuery,
        },
        service::feedback::{FeedbackAnswerService, FeedbackService},
        state::AppState,
    },
};

/// Tag for grouping feedback and answer endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedbacks";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_feedbacks, create_feedback))
        .routes(routes!(get_feedback, update_feedback, delete_feedback))
        .routes(routes!(get_feedback_author))
        .routes(routes!(get_feedback_answer))
        .routes(routes!(list_answers, create_answer))
        .routes(routes!(get_answer, update_answer, delete_answer))
        .routes(routes!(get_answer_author))
        .routes(routes!(get_answer_feedback))
}

#[utoipa::path(
    get,
    path = "/feedbacks",
    tag = FEEDBACK_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of feedbacks", body = PaginatedDto<FeedbackDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_feedbacks(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let feedbacks = FeedbackService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(feedbacks.into_dto::<FeedbackDto>())))
}

/// Submit a question, suggestion or complaint.
///
/// New feedback starts out `pendiente`.
#[utoipa::path(
    post,
    path = "/feedbacks",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback created", body = FeedbackDto),
        (status = 400, description = "Invalid feedback data", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateFeedbackParams::from_dto(payload)?;
    let feedback = FeedbackService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(FeedbackDto::from(feedback))))
}

#[utoipa::path(
    get,
    path = "/feedbacks/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback id")),
    responses(
        (status = 200, description = "The feedback", body = FeedbackDto),
        (status = 404, description = "Feedback not found", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = FeedbackService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(FeedbackDto::from(feedback))))
}

#[utoipa::path(
    put,
    path = "/feedbacks/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback id")),
    request_body = UpdateFeedbackDto,
    responses(
        (status = 200, description = "Feedback updated", body = FeedbackDto),
        (status = 400, description = "Invalid feedback data", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto)
    ),
)]
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateFeedbackParams::from_dto(payload)?;
    let feedback = FeedbackService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(FeedbackDto::from(feedback))))
}

#[utoipa::path(
    delete,
    path = "/feedbacks/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Feedback deleted"),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 409, description = "Feedback is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    FeedbackService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/feedbacks/{id}/author",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback id")),
    responses(
        (status = 200, description = "Author with profile", body = UserDto),
        (status = 404, description = "Feedback not found", body = ErrorDto)
    ),
)]
pub async fn get_feedback_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let author = FeedbackService::new(&state.db).author(id).await?;

    Ok((StatusCode::OK, Json(author)))
}

#[utoipa::path(
    get,
    path = "/feedbacks/{id}/answer",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback id")),
    responses(
        (status = 200, description = "Answer to the feedback", body = FeedbackAnswerDto),
        (status = 404, description = "Feedback not found, or not answered yet", body = ErrorDto)
    ),
)]
pub async fn get_feedback_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let answer = FeedbackService::new(&state.db).answer(id).await?;

    Ok((StatusCode::OK, Json(FeedbackAnswerDto::from(answer))))
}

#[utoipa::path(
    get,
    path = "/feedback_answers",
    tag = FEEDBACK_TAG,
    params(ListParamsDto),
    responses(
        (status = 200, description = "Page of feedback answers", body = PaginatedDto<FeedbackAnswerDto>),
        (status = 400, description = "Invalid filter or sort clause", body = ErrorDto)
    ),
)]
pub async fn list_answers(
    State(state): State<AppState>,
    Query(params): Query<ListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let answers = FeedbackAnswerService::new(&state.db)
        .list(&ListQuery::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(answers.into_dto::<FeedbackAnswerDto>())))
}

/// Answer a feedback.
///
/// The answered feedback is marked `resuelto`. A feedback takes a single answer.
#[utoipa::path(
    post,
    path = "/feedback_answers",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackAnswerDto,
    responses(
        (status = 201, description = "Feedback answer created", body = FeedbackAnswerDto),
        (status = 400, description = "Invalid feedback answer data", body = ErrorDto),
        (status = 404, description = "Feedback or author not found", body = ErrorDto),
        (status = 409, description = "The feedback already has an answer", body = ErrorDto)
    ),
)]
pub async fn create_answer(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateFeedbackAnswerParams::from_dto(payload)?;
    let answer = FeedbackAnswerService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(FeedbackAnswerDto::from(answer))))
}

#[utoipa::path(
    get,
    path = "/feedback_answers/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback answer id")),
    responses(
        (status = 200, description = "The feedback answer", body = FeedbackAnswerDto),
        (status = 404, description = "Feedback answer not found", body = ErrorDto)
    ),
)]
pub async fn get_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let answer = FeedbackAnswerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(FeedbackAnswerDto::from(answer))))
}

#[utoipa::path(
    put,
    path = "/feedback_answers/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback answer id")),
    request_body = UpdateFeedbackAnswerDto,
    responses(
        (status = 200, description = "Feedback answer updated", body = FeedbackAnswerDto),
        (status = 400, description = "Invalid feedback answer data", body = ErrorDto),
        (status = 404, description = "Feedback answer not found", body = ErrorDto),
        (status = 409, description = "The feedback already has an answer", body = ErrorDto)
    ),
)]
pub async fn update_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFeedbackAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateFeedbackAnswerParams::from_dto(payload)?;
    let answer = FeedbackAnswerService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(FeedbackAnswerDto::from(answer))))
}

#[utoipa::path(
    delete,
    path = "/feedback_answers/{id}",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback answer id"), DeleteParamsDto),
    responses(
        (status = 204, description = "Feedback answer deleted"),
        (status = 404, description = "Feedback answer not found", body = ErrorDto),
        (status = 409, description = "Feedback answer is still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    FeedbackAnswerService::new(&state.db).delete(id, params.hard).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/feedback_answers/{id}/author",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback answer id")),
    responses(
        (status = 200, description = "Author with profile", body = UserDto),
        (status = 404, description = "Feedback answer not found", body = ErrorDto)
    ),
)]
pub async fn get_answer_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let author = FeedbackAnswerService::new(&state.db).author(id).await?;

    Ok((StatusCode::OK, Json(author)))
}

#[utoipa::path(
    get,
    path = "/feedback_answers/{id}/feedback",
    tag = FEEDBACK_TAG,
    params(("id" = i32, Path, description = "Feedback answer id")),
    responses(
        (status = 200, description = "Answered feedback", body = FeedbackDto),
        (status = 404, description = "Feedback answer not found", body = ErrorDto)
    ),
)]
pub async fn get_answer_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = FeedbackAnswerService::new(&state.db).feedback(id).await?;

    Ok((StatusCode::OK, Json(FeedbackDto::from(feedback))))
}
