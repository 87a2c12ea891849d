//! Turns a free-text model completion into a validated daily briefing and
//! holds the dashboard view state derived from it.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod prompt;
pub mod provider;
pub mod state;
pub mod validate;

pub use error::{FetchError, NormalizeError, ProviderError};
pub use extract::extract;
pub use fetch::NewsFetcher;
pub use provider::{
    CompletionProvider, CompletionRequest, CompletionResponse, GeminiConfig, GeminiProvider,
    DEFAULT_API_BASE_URL, DEFAULT_MODEL,
};
pub use state::{DashboardController, LoadOutcome, LoadTicket, ViewState};
pub use validate::{normalize, validate};

#[cfg(test)]
#[path = "tests/support.rs"]
mod tests_support;
