//! System prompt for the support assistant.

use crate::base::config::Config;

/// System prompt.
///
/// Prepended verbatim (no separator) to the assembled conversation text on
/// every model call.
pub const SYSTEM_PROMPT: &str = r#####"
You are an AI Customer Support Assistant for an online store.  You only answer customer service related queries: orders, deliveries, refunds, payments, cancellations, and account or technical problems.

If the conversation contains multiple messages, treat them as one customer's running conversation and answer the most recent message in that context.  Keep replies short, polite, and concrete.  Do not answer questions that are unrelated to customer support.
"#####;

/// Get the system prompt, using the config override if provided.
pub fn get_system_prompt(config: &Config) -> &str {
    if let Some(custom_prompt) = &config.system_prompt { custom_prompt } else { SYSTEM_PROMPT }
}
