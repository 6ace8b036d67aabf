//! Service integrations for external APIs and shared state.
//!
//! This module contains implementations for the services used by desk-bot:
//! - LLM services (e.g., Gemini)
//! - State stores (e.g., in-memory)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod llm;
pub mod store;
