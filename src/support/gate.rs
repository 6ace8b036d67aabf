//! Request gate: decides whether a message is a customer-support query.

/// Keywords that mark a message as in-domain.
const CUSTOMER_KEYWORDS: &[&str] = &[
    "order", "delivery", "refund", "payment", "error", "problem", "issue", "cancel", "technical", "account",
];

/// Returns true if the lower-cased message contains any in-domain keyword as a
/// substring.
///
/// No tokenization or word-boundary checks, so "accountant" matches "account".
/// False positives are accepted; out-of-domain messages get a fixed rejection
/// reply instead of a model call.
pub fn is_customer_query(text: &str) -> bool {
    let text = text.to_lowercase();
    CUSTOMER_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_messages_with_support_keywords() {
        assert!(is_customer_query("where is my order?"));
        assert!(is_customer_query("I want a REFUND"));
        assert!(is_customer_query("there is a problem with my payment"));
    }

    #[test]
    fn matches_keywords_inside_larger_words() {
        // Substring matching is deliberate.
        assert!(is_customer_query("my accountant told me to ask"));
        assert!(is_customer_query("reordering the list"));
    }

    #[test]
    fn rejects_messages_without_support_keywords() {
        assert!(!is_customer_query("nice weather today"));
        assert!(!is_customer_query(""));
    }
}
