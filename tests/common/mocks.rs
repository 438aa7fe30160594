use async_trait::async_trait;
use medtranslate::{
    Error, Result,
    config::ApiKey,
    llm::{
        Candidate, Content, GenerateContentRequest, GenerateContentResponse, LlmClient, Part,
    },
};
use std::sync::{Arc, Mutex};

/// Mock Gemini client that records every call it receives
#[derive(Debug)]
pub struct MockLlmClient {
    pub requests: Arc<Mutex<Vec<(ApiKey, GenerateContentRequest)>>>,
    pub response: GenerateContentResponse,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: GenerateContentResponse::default(),
            error: None,
        }
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_response(text_response(text))
    }

    pub fn with_response(mut self, response: GenerateContentResponse) -> Self {
        self.response = response;
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<(ApiKey, GenerateContentRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((api_key.clone(), request));

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        Ok(self.response.clone())
    }
}

/// Envelope with a single candidate holding `text`
pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part::text(text)],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
        prompt_feedback: None,
    }
}
