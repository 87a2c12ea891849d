//! Scripted provider shared by orchestrator and controller tests.

use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    error::ProviderError,
    provider::{CompletionProvider, CompletionRequest, CompletionResponse},
};

pub const SCENARIO_COMPLETION: &str = "```json\n{\"dailySummary\":{\"headline\":\"H\",\"overview\":\"O\",\"topTrends\":[\"T1\"]},\"newsItems\":[{\"id\":\"1\",\"title\":\"X\",\"source\":\"S\",\"category\":\"Research\",\"summary\":\"s\",\"keyPoints\":[\"k\"],\"technicalTrend\":\"t\",\"url\":\"u\",\"timestamp\":\"now\"}]}\n```";

pub enum Scripted {
    Text(String),
    NoText,
    Fail(String),
}

pub struct ScriptedProvider {
    credential: bool,
    replies: Mutex<VecDeque<Scripted>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Arc::new(Self {
            credential: true,
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn without_credential() -> Arc<Self> {
        Arc::new(Self {
            credential: false,
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .await
            .iter()
            .map(|request| request.prompt.clone())
            .collect()
    }
}

pub fn text(raw: &str) -> Scripted {
    Scripted::Text(raw.to_string())
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn generate(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        self.requests.lock().await.push(request);
        match self.replies.lock().await.pop_front() {
            Some(Scripted::Text(text)) => Ok(CompletionResponse { text: Some(text) }),
            Some(Scripted::NoText) | None => Ok(CompletionResponse { text: None }),
            Some(Scripted::Fail(body)) => Err(ProviderError::Status { status: 503, body }),
        }
    }
}
