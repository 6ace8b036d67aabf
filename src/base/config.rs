//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default Gemini model to use.
fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default Gemini API base URL.
fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Default listen address for the HTTP server.
fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Default retention bound for the shared conversation history.
fn default_max_history_turns() -> usize {
    256
}

/// Configuration for the desk-bot application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Shared inner configuration values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The concrete configuration values, shared behind an [`Arc`] by [`Config`].
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Gemini API key (`DESK_BOT_GEMINI_API_KEY`).
    pub gemini_api_key: String,
    /// Gemini model to use (`DESK_BOT_GEMINI_MODEL`).
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Gemini API base URL (`DESK_BOT_GEMINI_BASE_URL`).
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    /// Address the HTTP server binds to (`DESK_BOT_LISTEN_ADDR`).
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Optional custom system prompt to override the default (`DESK_BOT_SYSTEM_PROMPT`).
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Maximum number of messages retained in the shared conversation history
    /// (`DESK_BOT_MAX_HISTORY_TURNS`). Oldest messages are evicted first.
    #[serde(default = "default_max_history_turns")]
    pub max_history_turns: usize,
}

impl Config {
    /// Load configuration from the environment and an optional config file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("DESK_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.max_history_turns < 1 {
            return Err(anyhow::anyhow!("Max history turns must be at least 1."));
        }

        Ok(result)
    }
}
