use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A validated translation request. All fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Inbound body before validation. Absent and `null` fields both decode to `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequestBody {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    source_lang: Option<String>,
    #[serde(default)]
    target_lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
}

/// Display strings are exactly what the client sees. Upstream detail stays in
/// the source error and is only logged.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Missing required parameters.")]
    MissingParameters,

    #[error("Server configuration error: API key missing.")]
    MissingApiKey,

    #[error("Translation response was empty.")]
    EmptyResponse,

    #[error("Failed to translate text.")]
    Upstream(#[source] Error),
}

impl TranslationRequest {
    /// Parses and validates a raw JSON body. Undecodable bodies, non-object
    /// bodies and fields of the wrong type are rejected the same way as
    /// missing fields.
    pub fn from_json(body: &[u8]) -> Result<Self, TranslateError> {
        // A derived struct decoder would also fill fields from an array by position.
        let value: Value =
            serde_json::from_slice(body).map_err(|_| TranslateError::MissingParameters)?;
        if !value.is_object() {
            return Err(TranslateError::MissingParameters);
        }
        let body: TranslateRequestBody =
            serde_json::from_value(value).map_err(|_| TranslateError::MissingParameters)?;

        match (
            non_empty(body.text),
            non_empty(body.source_lang),
            non_empty(body.target_lang),
        ) {
            (Some(text), Some(source_lang), Some(target_lang)) => Ok(Self {
                text,
                source_lang,
                target_lang,
            }),
            _ => Err(TranslateError::MissingParameters),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
