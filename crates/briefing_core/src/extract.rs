//! Isolates the JSON payload inside a model completion.

/// Strips a markdown fence and any prose around the outermost JSON object.
///
/// When no `{ ... }` pair is present the fence-stripped text is returned
/// as-is so the validator reports a parse error on what the model sent.
pub fn extract(raw: &str) -> &str {
    let cleaned = strip_fence(raw);

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(first), Some(last)) if last > first => &cleaned[first..=last],
        _ => cleaned,
    }
}

fn strip_fence(raw: &str) -> &str {
    let mut cleaned = raw;
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest.trim_start();
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest.trim_start();
    }
    if let Some(rest) = cleaned.trim_end().strip_suffix("```") {
        cleaned = rest.trim_end();
    }
    cleaned
}
