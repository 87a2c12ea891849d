use shared::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider credential is not configured")]
    MissingCredential,
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode provider envelope: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid provider endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("completion is not valid JSON: {source}")]
    Parse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("completion does not match the briefing shape: {reason}")]
    Schema { reason: String },
}

impl NormalizeError {
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizeError::Parse { .. } => ErrorKind::Parse,
            NormalizeError::Schema { .. } => ErrorKind::Schema,
        }
    }
}

/// Everything that can go wrong between prompt and validated response.
/// Never escapes [`crate::fetch::NewsFetcher::fetch_daily_news`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("provider returned no text")]
    EmptyCompletion,
    #[error("{source}")]
    Normalize {
        raw_text: String,
        #[source]
        source: NormalizeError,
    },
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Provider(_) | FetchError::EmptyCompletion => ErrorKind::Provider,
            FetchError::Normalize { source, .. } => source.kind(),
        }
    }
}
