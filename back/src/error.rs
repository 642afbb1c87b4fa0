use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use advisor_dto::PromptError;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Bad Request: {0}")]
    BadRequest(#[from] PromptError),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("upstream response carried no choices")]
    MalformedUpstream,
}

#[derive(Serialize)]
struct HttpErrorBody {
    error: Box<str>,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ChatError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, reason.to_string().into_boxed_str())
            }
            ChatError::Upstream(_) | ChatError::UpstreamStatus(_) | ChatError::MalformedUpstream => {
                // Detail stays in the server log; the client only ever sees
                // the generic body.
                tracing::error!("chat relay failed: {self}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        (status, Json(HttpErrorBody { error: message })).into_response()
    }
}
