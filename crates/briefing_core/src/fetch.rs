//! News fetch orchestration: prompt, provider call, normalization, fallback.

use std::sync::Arc;

use chrono::Local;
use shared::{Language, NewsResponse, PreconditionError};
use tracing::{error, info};

use crate::{
    error::FetchError,
    prompt::build_prompt,
    provider::{CompletionProvider, CompletionRequest},
    validate::normalize,
};

/// Stateless and reentrant; share it behind an `Arc`.
pub struct NewsFetcher {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl NewsFetcher {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Credential check performed by callers before a fetch is attempted.
    pub fn ensure_credential(&self, language: Language) -> Result<(), PreconditionError> {
        if self.provider.has_credential() {
            Ok(())
        } else {
            Err(PreconditionError::missing_credential(language))
        }
    }

    /// Never fails: any error on the provider path is logged and replaced by
    /// [`NewsResponse::fallback`] for `language`.
    pub async fn fetch_daily_news(&self, language: Language) -> NewsResponse {
        info!(%language, model = %self.model, "fetching daily news");

        match self.try_fetch(language).await {
            Ok(response) => {
                info!(
                    %language,
                    items = response.news_items.len(),
                    "daily news fetched"
                );
                response
            }
            Err(err) => {
                match &err {
                    FetchError::Normalize { raw_text, source } => error!(
                        %language,
                        kind = ?source.kind(),
                        error = %source,
                        raw_text = %raw_text,
                        "failed to normalize completion"
                    ),
                    other => error!(
                        %language,
                        kind = ?other.kind(),
                        error = %other,
                        "failed to fetch news"
                    ),
                }
                NewsResponse::fallback(language)
            }
        }
    }

    async fn try_fetch(&self, language: Language) -> Result<NewsResponse, FetchError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: build_prompt(language, Local::now()),
            web_search: true,
        };

        let completion = self.provider.generate(request).await?;
        let text = completion
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or(FetchError::EmptyCompletion)?;

        normalize(&text).map_err(|source| FetchError::Normalize {
            raw_text: text,
            source,
        })
    }
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;
