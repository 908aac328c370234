//! LLM Client — the single point of entry for all Gemini API calls in Compass.
//!
//! ARCHITECTURAL RULE: No other module may call the provider directly.
//! Callers depend on the `GenerationProvider` trait; `GeminiClient` is the
//! production implementation and tests swap in stubs.
//!
//! Every call is one-shot: no retries, no backoff, no response caching.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;
#[cfg(test)]
pub mod stub;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A document handed to the provider for extraction.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub bytes: &'a [u8],
    pub media_type: &'a str,
}

/// Capability of a hosted generative model to answer with JSON constrained by a schema.
///
/// Both operations return the provider's raw JSON text. Parsing into domain
/// types belongs to the caller.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Text-only request whose answer must match `schema`.
    async fn generate_structured(
        &self,
        system: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, LlmError>;

    /// Request carrying a document alongside the prompt; answer must match `schema`.
    async fn extract_structured(
        &self,
        system: &str,
        prompt: &str,
        document: Document<'_>,
        schema: &Value,
    ) -> Result<String, LlmError>;

    /// Short backend label for logs.
    fn name(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (Gemini generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: Option<String>,
    status: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Gemini `generateContent` endpoint with JSON-schema constrained output.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn send(&self, request: &GenerateContentRequest<'_>) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: parse_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.text().ok_or(LlmError::EmptyContent)
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate_structured(
        &self,
        system: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, LlmError> {
        let request = build_request(system, vec![Part::Text { text: prompt }], schema);
        self.send(&request).await
    }

    async fn extract_structured(
        &self,
        system: &str,
        prompt: &str,
        document: Document<'_>,
        schema: &Value,
    ) -> Result<String, LlmError> {
        let parts = vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: document.media_type,
                    data: BASE64_STANDARD.encode(document.bytes),
                },
            },
            Part::Text { text: prompt },
        ];
        let request = build_request(system, parts, schema);
        self.send(&request).await
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn build_request<'a>(
    system: &'a str,
    parts: Vec<Part<'a>>,
    schema: &'a Value,
) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text { text: system }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts,
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: schema,
        },
    }
}

/// Pulls a readable message out of a Gemini error body, falling back to the raw body.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiError>(body)
        .ok()
        .and_then(|e| {
            let message = e.error.message?;
            Some(match e.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            })
        })
        .unwrap_or_else(|| body.to_string())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
