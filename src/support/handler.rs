//! Request handling: composes the gate, the conversation assembler, the model
//! call, and the issue tally into a single ask flow.

use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        prompts::get_system_prompt,
        types::{AskRequest, AskResponse, Res, REJECTION_REPLY},
    },
    service::{llm::LlmClient, store::StoreClient},
};

use super::{classify, gate, prompt};

/// Handle one support query.
///
/// Rejected path: out-of-domain message, fixed reply, current counts, no model
/// call, no history mutation. Accepted path: assemble the prompt, call the
/// model, then classify and tally. A provider failure propagates before the
/// tally is touched, so the counts only ever reflect completed requests.
#[instrument(skip_all)]
pub async fn handle_ask(query: &AskRequest, store: &StoreClient, llm: &LlmClient, config: &Config) -> Res<AskResponse> {
    if !gate::is_customer_query(&query.message) {
        info!("Rejected out-of-domain message.");

        return Ok(AskResponse {
            reply: REJECTION_REPLY.to_string(),
            issue_counts: store.issue_counts().await?,
            issue_type: None,
        });
    }

    // Build the conversation text, then prepend the system prompt directly.

    let strategy = prompt::PromptStrategy::from_selector(&query.prototype);
    let conversation = prompt::assemble(strategy, &query.message, store).await?;
    let full_prompt = format!("{}{}", get_system_prompt(config), conversation);

    let reply = llm.generate(&full_prompt).await?;

    // Classification runs on the incoming message, not the model reply, and
    // only after the model call succeeded.

    let issue_type = classify::classify(&query.message);
    let issue_counts = store.record_issue(issue_type).await?;

    info!("Handled `{}` query ({} accepted so far).", issue_type.as_str(), issue_counts.total());

    Ok(AskResponse {
        reply,
        issue_counts,
        issue_type: Some(issue_type),
    })
}
