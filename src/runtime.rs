//! Runtime services and shared state for desk-bot.

use tracing::instrument;

use crate::{
    base::{config::Config, types::Res},
    service::{llm::LlmClient, store::StoreClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the store client, LLM client, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The store instance holding conversation history and the issue tally.
    pub store: StoreClient,
    /// The LLM client instance.
    pub llm: LlmClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the in-memory store.
        let store = StoreClient::memory(&config);

        // Initialize the LLM client.
        let llm = LlmClient::gemini(&config);

        Ok(Self { config, store, llm })
    }
}
