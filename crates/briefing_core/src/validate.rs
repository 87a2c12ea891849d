//! Validation boundary between untrusted completion text and the domain model.

use std::collections::HashSet;

use serde_json::Value;
use shared::{DailySummary, NewsItem, NewsResponse};
use tracing::warn;

use crate::{error::NormalizeError, extract::extract};

/// Parses `candidate` and checks the minimum structural contract: a
/// `dailySummary` object and a `newsItems` array (which may be empty).
///
/// Items are decoded leniently except for `category`, which must be one of
/// the canonical values.
pub fn validate(candidate: &str) -> Result<NewsResponse, NormalizeError> {
    let value: Value = serde_json::from_str(candidate).map_err(|source| NormalizeError::Parse {
        raw: candidate.to_string(),
        source,
    })?;

    let Value::Object(mut root) = value else {
        return Err(NormalizeError::schema("top-level value is not an object"));
    };

    let summary = match root.remove("dailySummary") {
        Some(summary @ Value::Object(_)) => summary,
        Some(_) => return Err(NormalizeError::schema("dailySummary is not an object")),
        None => return Err(NormalizeError::schema("missing dailySummary")),
    };
    let items = match root.remove("newsItems") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(NormalizeError::schema("newsItems is not an array")),
        None => return Err(NormalizeError::schema("missing newsItems")),
    };

    let daily_summary: DailySummary = serde_json::from_value(summary)
        .map_err(|err| NormalizeError::schema(format!("dailySummary: {err}")))?;

    let news_items = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<NewsItem>(item)
                .map_err(|err| NormalizeError::schema(format!("newsItems[{idx}]: {err}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    warn_on_duplicate_ids(&news_items);

    Ok(NewsResponse {
        daily_summary,
        news_items,
    })
}

/// Extract then validate a raw completion.
pub fn normalize(raw: &str) -> Result<NewsResponse, NormalizeError> {
    validate(extract(raw))
}

fn warn_on_duplicate_ids(items: &[NewsItem]) {
    let mut seen = HashSet::new();
    for item in items {
        if !item.id.is_empty() && !seen.insert(item.id.as_str()) {
            warn!(id = %item.id, "duplicate news item id in completion");
        }
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
