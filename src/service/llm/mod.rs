//! Integration with generative-language-model services.
//!
//! This module defines the `GenericLlmClient` trait that can be implemented
//! for different providers, with a default implementation for the Gemini
//! REST API.

pub mod gemini;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Res;

// Traits.

/// Generic LLM client trait that clients must implement.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate a reply for the given prompt text.
    ///
    /// The prompt already includes the system instruction and any
    /// conversation context; the provider sees a single blob of text.
    async fn generate(&self, prompt: &str) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    /// Wrap any implementation of the trait. Used by tests to inject mocks.
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
