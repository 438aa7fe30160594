//! Prompt templates for the medical translator persona.
//!
//! Values are interpolated literally. Nothing is escaped, so quotes inside
//! the text end up inside the quoted query as-is.

use super::TranslationRequest;
use crate::llm::{Content, GenerateContentRequest, Tool};

pub fn system_prompt(source_lang: &str, target_lang: &str) -> String {
    format!(
        "You are an expert medical translator. Translate the following text from {} to {}. Focus on medical accuracy and clarity.",
        source_lang, target_lang
    )
}

pub fn user_query(text: &str) -> String {
    format!("Translate this text: \"{}\"", text)
}

/// Builds the outbound payload. Search grounding is always offered to the
/// model; whether it is used is up to the service.
pub fn build_request(request: &TranslationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(user_query(&request.text))],
        tools: vec![Tool::google_search()],
        system_instruction: Some(Content::text(system_prompt(
            &request.source_lang,
            &request.target_lang,
        ))),
    }
}
