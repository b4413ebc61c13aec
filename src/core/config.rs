//! Vision model configuration from the environment and the stored API key.

use std::env;

use async_openai::config::OpenAIConfig;

use crate::core::api_key;

pub const API_KEY_ENV: &str = "SOLVENOTE_API_KEY";
pub const BASE_URL_ENV: &str = "SOLVENOTE_BASE_URL";
pub const MODEL_ENV: &str = "SOLVENOTE_MODEL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub model_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SOLVENOTE_API_KEY is not set (or run `solvenote config set-api-key`)")]
    MissingApiKey,
}

/// Where the API key would come from, without reading the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Env,
    Stored,
    Missing,
}

/// Model ID from `SOLVENOTE_MODEL`, or the default.
pub fn model_id() -> String {
    env::var(MODEL_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

fn env_api_key() -> Option<String> {
    env::var(API_KEY_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn key_source() -> KeySource {
    if env_api_key().is_some() {
        KeySource::Env
    } else if api_key::load_api_key().is_some() {
        KeySource::Stored
    } else {
        KeySource::Missing
    }
}

/// Load configuration. The environment wins over the stored key.
pub fn load() -> Result<Config, ConfigError> {
    let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let api_key = env_api_key()
        .or_else(api_key::load_api_key)
        .ok_or(ConfigError::MissingApiKey)?;

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url)
        .with_api_key(api_key);

    Ok(Config {
        openai_config,
        model_id: model_id(),
    })
}
