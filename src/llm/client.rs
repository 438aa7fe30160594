use super::types::*;
use crate::{
    Error, Result,
    config::{ApiKey, GeminiConfig},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Issues exactly one generateContent call. No retries.
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        debug!(
            "Calling generateContent on model {} with {} content blocks",
            self.model,
            request.contents.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            Error::llm(format!(
                "Malformed generateContent response ({}): {}",
                e, body
            ))
        })?;

        debug!(
            "Received generateContent response with {} candidates",
            parsed.candidates.len()
        );

        Ok(parsed)
    }
}
