pub mod prompt;
mod types;

pub use types::*;

use crate::{config::ApiKey, llm::LlmClient};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Request-scoped translation pipeline: credential check, prompt, a single
/// upstream call, and extraction of the first candidate's text.
///
/// Holds no mutable state; concurrent requests share one instance.
pub struct Translator {
    client: Arc<dyn LlmClient>,
    api_key: Option<ApiKey>,
}

impl Translator {
    pub fn new(client: Arc<dyn LlmClient>, api_key: Option<ApiKey>) -> Self {
        Self { client, api_key }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let Some(api_key) = self.api_key.as_ref() else {
            error!("API key not found in environment variables.");
            return Err(TranslateError::MissingApiKey);
        };

        let payload = prompt::build_request(request);

        let response = match self.client.generate_content(api_key, payload).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error calling Gemini API: {}", e);
                return Err(TranslateError::Upstream(e));
            }
        };

        match response.first_text() {
            Some(text) => {
                debug!("Translation produced {} bytes", text.len());
                Ok(TranslationResult {
                    translated_text: text.to_string(),
                })
            }
            None => {
                warn!(
                    block_reason = response.block_reason().unwrap_or("none"),
                    finish_reason = response.finish_reason().unwrap_or("none"),
                    "Gemini returned no translated text"
                );
                Err(TranslateError::EmptyResponse)
            }
        }
    }
}
