use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use advisor_dto::{validate_prompt, ChatReply, ChatRequest};

use crate::error::ChatError;
use crate::upstream;
use crate::AppState;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ChatError> {
    let prompt = validate_prompt(&request.prompt)?;
    let message = upstream::send_completion(&state.client, &state.config, prompt).await?;
    Ok(Json(ChatReply { message }))
}
