use super::types::{ErrorResponse, HealthResponse};
use crate::translate::{TranslateError, TranslationRequest, TranslationResult, Translator};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingParameters => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::EmptyResponse | Self::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}

/// Mounted for every method so that non-POST requests get the JSON 405 body.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4(), method = %method))]
pub async fn translate(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<TranslationResult>, TranslateError> {
    if method != Method::POST {
        return Err(TranslateError::MethodNotAllowed);
    }

    let request = TranslationRequest::from_json(&body)?;

    info!(
        "Received translation request {} -> {} ({} bytes)",
        request.source_lang,
        request.target_lang,
        request.text.len()
    );

    let result = state.translator.translate(&request).await?;

    info!("Translation request completed");
    Ok(Json(result))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
