//! The review queue and rejection log stores.
//!
//! Both are ordered, append-only lists of flagged claims: the full expense
//! snapshot at decision time together with the reasons that put it there.

use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// An expense snapshot paired with the reasons for its verdict.
///
/// Serialized flat: the expense fields sit alongside `reasons` in one JSON
/// object, matching the persisted store layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedExpense {
    /// The expense as it looked when the decision was made, including the
    /// derived `employee_level` when resolution succeeded.
    #[serde(flatten)]
    pub expense: Expense,
    /// The justification strings accompanying the verdict.
    pub reasons: Vec<String>,
}

/// Persisted review queue state. Grows only on REVIEW.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewQueue {
    /// Claims awaiting a human look, oldest first.
    #[serde(default)]
    pub reviews: Vec<FlaggedExpense>,
}

impl ReviewQueue {
    /// Appends a claim flagged for review.
    pub fn push(&mut self, expense: Expense, reasons: Vec<String>) {
        self.reviews.push(FlaggedExpense { expense, reasons });
    }
}

/// Persisted rejection log state. Grows only on REJECT.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectionLog {
    /// Refused claims, oldest first.
    #[serde(default)]
    pub rejections: Vec<FlaggedExpense>,
}

impl RejectionLog {
    /// Appends a refused claim.
    pub fn push(&mut self, expense: Expense, reasons: Vec<String>) {
        self.rejections.push(FlaggedExpense { expense, reasons });
    }
}
