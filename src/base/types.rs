use serde::{Deserialize, Serialize};

/// Crate-wide error type.
pub type Err = anyhow::Error;
/// Crate-wide result type.
pub type Res<T> = Result<T, Err>;
/// Result type for operations that return nothing on success.
pub type Void = Res<()>;

/// Fixed reply returned for messages the gate rejects as out-of-domain.
pub const REJECTION_REPLY: &str = "I am designed only for customer support queries.";

/// The closed set of issue categories a support message can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueCategory {
    /// Delivery-related issues (shipping, tracking, delays).
    Delivery,
    /// Refund and payment-return issues.
    Refund,
    /// Technical problems with a product or service.
    Technical,
    /// Anything that does not fit the other categories.
    Other,
}

impl IssueCategory {
    /// Return the category name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Delivery => "Delivery",
            IssueCategory::Refund => "Refund",
            IssueCategory::Technical => "Technical",
            IssueCategory::Other => "Other",
        }
    }
}

/// Per-category issue counts, tallied since process start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IssueCounts {
    /// Count of delivery issues.
    pub delivery: u64,
    /// Count of refund issues.
    pub refund: u64,
    /// Count of technical issues.
    pub technical: u64,
    /// Count of other issues.
    pub other: u64,
}

impl IssueCounts {
    /// Increment the count for the given category.
    pub fn increment(&mut self, category: IssueCategory) {
        match category {
            IssueCategory::Delivery => self.delivery += 1,
            IssueCategory::Refund => self.refund += 1,
            IssueCategory::Technical => self.technical += 1,
            IssueCategory::Other => self.other += 1,
        }
    }

    /// Sum across all categories; equals the number of accepted requests.
    pub fn total(&self) -> u64 {
        self.delivery + self.refund + self.technical + self.other
    }
}

/// Incoming body for `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// The raw customer message.
    pub message: String,
    /// Client-supplied selector for the prompt-assembly strategy.
    pub prototype: String,
}

/// Outgoing body for `POST /ask`.
///
/// `issue_type` is absent on the rejected path, where no classification runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// The assistant's reply, or the fixed rejection reply.
    pub reply: String,
    /// Per-category issue counts after this request.
    pub issue_counts: IssueCounts,
    /// Category assigned to this message; absent when the message was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueCategory>,
}
