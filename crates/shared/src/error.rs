use thiserror::Error;

use crate::locale::Language;

/// Coarse classification of every failure on the briefing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential; surfaced to the user, no fallback content.
    Precondition,
    /// Network/provider failure or an empty completion.
    Provider,
    /// Completion text was not valid JSON.
    Parse,
    /// JSON did not match the briefing shape.
    Schema,
}

/// Raised before any network attempt when the provider credential is absent.
/// The message is already localized for display.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PreconditionError {
    pub message: String,
}

impl PreconditionError {
    pub fn missing_credential(language: Language) -> Self {
        Self {
            message: language.translations().missing_key.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Precondition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_message_is_localized() {
        let en = PreconditionError::missing_credential(Language::En);
        assert!(en.to_string().starts_with("API Key is missing"));
        let zh = PreconditionError::missing_credential(Language::Zh);
        assert!(zh.to_string().starts_with("缺少 API Key"));
        assert_ne!(en, zh);
        assert_eq!(zh.kind(), ErrorKind::Precondition);
    }
}
