use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatPromptDto, ChatResponseDto},
    },
    server::{error::AppError, service::chatbot::ChatbotService, state::AppState},
};

/// Tag for grouping chatbot endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(chat))
}

/// Ask the club assistant a question.
///
/// The assistant answers from the current teams, upcoming events, active agreements
/// and published posts. Without `GEMINI_API_KEY` a simulated reply is returned.
#[utoipa::path(
    post,
    path = "/chat",
    tag = CHAT_TAG,
    request_body = ChatPromptDto,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseDto),
        (status = 400, description = "Empty prompt", body = ErrorDto),
        (status = 500, description = "Assistant backend failed", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatPromptDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = ChatbotService::new(&state.db, &state.http_client, &state.config)
        .ask(&payload.prompt)
        .await?;

    Ok((StatusCode::OK, Json(ChatResponseDto { response })))
}
