use std::{fs, path::Path, time::Duration};

use briefing_core::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use shared::Language;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "robopulse.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Environment-only; never read from the settings file.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub language: Language,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            language: Language::En,
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    model: Option<String>,
    api_base_url: Option<String>,
    language: Option<String>,
    request_timeout_secs: Option<u64>,
}

pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.model {
        settings.model = v;
    }
    if let Some(v) = file_cfg.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file_cfg.language {
        set_language(settings, &v);
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = Some(v);
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("API_KEY") {
        settings.api_key = Some(v);
    }
    if let Some(v) = var("APP__API_KEY") {
        settings.api_key = Some(v);
    }
    settings.api_key = settings
        .api_key
        .take()
        .filter(|key| !key.trim().is_empty());

    if let Some(v) = var("GEMINI_MODEL") {
        settings.model = v;
    }
    if let Some(v) = var("APP__MODEL") {
        settings.model = v;
    }

    if let Some(v) = var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = var("APP__LANGUAGE") {
        set_language(settings, &v);
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = Some(parsed),
            Err(_) => warn!(value = %v, "ignoring invalid APP__REQUEST_TIMEOUT_SECS"),
        }
    }
}

fn set_language(settings: &mut Settings, raw: &str) {
    match raw.parse::<Language>() {
        Ok(language) => settings.language = language,
        Err(err) => warn!(error = %err, "ignoring configured language"),
    }
}
