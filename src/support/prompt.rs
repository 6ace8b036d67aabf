//! Conversation assembly: turns a message and a prototype selector into the
//! text sent to the model.

use crate::{
    base::types::Res,
    service::store::StoreClient,
};

/// Prompt-assembly strategy selected by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStrategy {
    /// "Prototype 1": the prompt is the current message alone; the shared
    /// history is neither read nor written.
    SingleTurn,
    /// Everything else ("Prototype 2", "Prototype 3", typos): append the
    /// message to the shared history and send the whole transcript.
    Transcript,
}

impl PromptStrategy {
    /// Map a client-supplied selector onto a strategy.
    ///
    /// Only "Prototype 1" is recognized by name; any other value takes the
    /// transcript path.
    pub fn from_selector(selector: &str) -> Self {
        if selector == "Prototype 1" { PromptStrategy::SingleTurn } else { PromptStrategy::Transcript }
    }
}

/// Assemble the conversation text for the model according to the strategy.
pub async fn assemble(strategy: PromptStrategy, message: &str, store: &StoreClient) -> Res<String> {
    match strategy {
        PromptStrategy::SingleTurn => Ok(message.to_string()),
        PromptStrategy::Transcript => store.append_and_render_history(message).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_prototype_1_selects_single_turn() {
        assert_eq!(PromptStrategy::from_selector("Prototype 1"), PromptStrategy::SingleTurn);
        assert_eq!(PromptStrategy::from_selector("Prototype 2"), PromptStrategy::Transcript);
        assert_eq!(PromptStrategy::from_selector("Prototype 3"), PromptStrategy::Transcript);
        assert_eq!(PromptStrategy::from_selector("prototype 1"), PromptStrategy::Transcript);
        assert_eq!(PromptStrategy::from_selector(""), PromptStrategy::Transcript);
    }
}
