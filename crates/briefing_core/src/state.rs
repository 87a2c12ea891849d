//! View state for one dashboard session and the intents that mutate it.
//!
//! The composition root owns a [`DashboardController`] for the life of the
//! session. Loads either run inline through the async intents, or are split
//! into [`DashboardController::begin_load`] / [`LoadTicket::run`] /
//! [`DashboardController::apply`] so the fetch can live on another task.
//! Every `begin_load` starts a new generation and outcomes from older
//! generations are discarded: the most recently invoked load wins.

use std::sync::Arc;

use shared::{CategoryFilter, Language, NewsItem, NewsResponse, PreconditionError};
use tracing::{debug, warn};

use crate::fetch::NewsFetcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub data: Option<NewsResponse>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_category: CategoryFilter,
    pub language: Language,
}

impl ViewState {
    /// Session start: nothing loaded yet and the initial load pending.
    pub fn new(language: Language) -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            selected_category: CategoryFilter::All,
            language,
        }
    }

    /// Items matching the selected category, in response order.
    pub fn filtered_news(&self) -> Vec<&NewsItem> {
        self.data
            .as_ref()
            .map(|data| data.filtered(self.selected_category))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    language: Language,
}

impl LoadTicket {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn run(self, fetcher: &NewsFetcher) -> LoadOutcome {
        let result = match fetcher.ensure_credential(self.language) {
            Ok(()) => Ok(fetcher.fetch_daily_news(self.language).await),
            Err(err) => Err(err),
        };
        LoadOutcome {
            ticket: self,
            result,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub result: Result<NewsResponse, PreconditionError>,
}

pub struct DashboardController {
    fetcher: Arc<NewsFetcher>,
    state: ViewState,
    generation: u64,
}

impl DashboardController {
    pub fn new(fetcher: Arc<NewsFetcher>, language: Language) -> Self {
        Self {
            fetcher,
            state: ViewState::new(language),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn fetcher(&self) -> Arc<NewsFetcher> {
        Arc::clone(&self.fetcher)
    }

    pub fn filtered_news(&self) -> Vec<&NewsItem> {
        self.state.filtered_news()
    }

    pub fn begin_load(&mut self, language: Language) -> LoadTicket {
        self.generation += 1;
        self.state.loading = true;
        self.state.error = None;
        debug!(generation = self.generation, %language, "load started");
        LoadTicket {
            generation: self.generation,
            language,
        }
    }

    /// Applies a finished load. Returns `false` when the outcome belongs to
    /// a superseded load and was dropped.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if outcome.ticket.generation != self.generation {
            warn!(
                stale = outcome.ticket.generation,
                current = self.generation,
                "discarding superseded load outcome"
            );
            return false;
        }

        match outcome.result {
            Ok(response) => self.state.data = Some(response),
            Err(err) => {
                warn!(
                    generation = outcome.ticket.generation,
                    kind = ?err.kind(),
                    error = %err,
                    "load stopped before fetching"
                );
                let message = if err.message.is_empty() {
                    outcome.ticket.language.translations().loading_error.to_string()
                } else {
                    err.message
                };
                self.state.error = Some(message);
            }
        }
        self.state.loading = false;
        true
    }

    pub async fn load(&mut self, language: Language) {
        let ticket = self.begin_load(language);
        let fetcher = self.fetcher();
        let outcome = ticket.run(&fetcher).await;
        self.apply(outcome);
    }

    pub async fn refresh(&mut self) {
        self.load(self.state.language).await;
    }

    /// Flips the display language and loads content in the new language.
    pub async fn toggle_language(&mut self) {
        let ticket = self.begin_toggle_language();
        let fetcher = self.fetcher();
        let outcome = ticket.run(&fetcher).await;
        self.apply(outcome);
    }

    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.begin_load(self.state.language)
    }

    pub fn begin_toggle_language(&mut self) -> LoadTicket {
        self.state.language = self.state.language.toggled();
        self.begin_load(self.state.language)
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.state.selected_category = category;
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
