//! Issue classification: files a message under one of the fixed categories.

use crate::base::types::IssueCategory;

/// Ordered classification rules: the first rule whose keyword list matches
/// wins. Order matters because a message can contain keywords from several
/// categories (e.g. "refund the delayed delivery" is Delivery, not Refund).
const RULES: &[(&[&str], IssueCategory)] = &[
    (&["delivery", "delay"], IssueCategory::Delivery),
    (&["refund", "money"], IssueCategory::Refund),
    (&["error", "not working"], IssueCategory::Technical),
];

/// Classify a message by substring match against the lower-cased text.
pub fn classify(text: &str) -> IssueCategory {
    let text = text.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(IssueCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_rule_beats_refund_rule() {
        assert_eq!(classify("I want a refund for the late delivery"), IssueCategory::Delivery);
    }

    #[test]
    fn money_alone_classifies_as_refund() {
        assert_eq!(classify("give me my money back"), IssueCategory::Refund);
    }

    #[test]
    fn not_working_classifies_as_technical() {
        assert_eq!(classify("the app is NOT WORKING"), IssueCategory::Technical);
        assert_eq!(classify("I keep getting an error"), IssueCategory::Technical);
    }

    #[test]
    fn no_category_keyword_falls_through_to_other() {
        assert_eq!(classify("please cancel my order"), IssueCategory::Other);
    }

    #[test]
    fn delay_matches_the_delivery_rule() {
        assert_eq!(classify("my package is delayed"), IssueCategory::Delivery);
    }
}
