//! Library root for `desk-bot`.
//!
//! Desk-bot is a Gemini-powered customer-support assistant backend designed to:
//! - Gate incoming messages to customer-support topics
//! - Forward accepted messages to the model, with selectable conversation context
//! - Classify issues into fixed categories and keep a running tally
//!
//! The backend exposes a small HTTP API and keeps all state in memory. The
//! architecture is built around extensible traits that allow for different
//! implementations of each service.

#[deny(missing_docs)]
pub mod base;
pub mod runtime;
pub mod server;
pub mod service;
pub mod support;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the desk-bot server:
/// - Creates the runtime context with the store and LLM client
/// - Binds the HTTP listener and serves requests
pub async fn start(config: Config) -> Void {
    info!("Starting desk-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Serve the HTTP API.
    server::serve(runtime).await?;

    Ok(())
}
