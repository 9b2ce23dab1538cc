use serde::{Deserialize, Serialize};

use crate::types::{Age, Amount, IssueId, TransactionNumber};

/// Represents a single record from the input JSON document.
///
/// The transaction number is not unique across a document; queries that need
/// distinct transactions collapse records sharing a number themselves.
/// The issue fields are only present when a compliance issue was raised.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction number, may repeat across records.
    #[serde(rename = "mtn")]
    pub transaction_number: TransactionNumber,
    pub amount: Amount,
    pub sender_full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_age: Option<Age>,
    pub beneficiary_full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_age: Option<Age>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<IssueId>,
    /// `None` when no issue exists, which is distinct from `Some(false)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_solved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_message: Option<String>
}

impl Transaction {
    pub fn has_unsolved_issue(&self) -> bool {
        self.issue_solved == Some(false)
    }

    pub fn has_solved_issue(&self) -> bool {
        self.issue_solved == Some(true)
    }

    /// Whether the named party is the sender or the beneficiary.
    pub fn involves(&self, full_name: &str) -> bool {
        self.sender_full_name == full_name || self.beneficiary_full_name == full_name
    }
}
