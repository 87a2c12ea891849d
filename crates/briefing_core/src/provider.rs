//! Completion provider seam and the Gemini REST implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use url::Url;

use crate::error::ProviderError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    /// Ask the provider to ground the answer with live web search. No
    /// response schema can be requested alongside it.
    pub web_search: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionResponse {
    pub text: Option<String>,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn has_credential(&self) -> bool;
    async fn generate(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let text: String = parts.into_iter().filter_map(|part| part.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let api_key = config.api_key.filter(|key| !key.trim().is_empty());
        Ok(Self {
            http,
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> Result<Url, ProviderError> {
        Ok(Url::parse(&format!(
            "{}/models/{model}:generateContent",
            self.base_url
        ))?)
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ProviderError::MissingCredential);
        };

        let url = self.endpoint(&request.model)?;
        let tools = if request.web_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            tools,
        };

        debug!(%url, model = %request.model, web_search = request.web_search, "sending completion request");

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        if !status.is_success() {
            error!(status = status.as_u16(), "completion request rejected");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&response_text)?;
        Ok(CompletionResponse {
            text: envelope.into_text(),
        })
    }
}

#[cfg(test)]
#[path = "tests/provider_tests.rs"]
mod tests;
