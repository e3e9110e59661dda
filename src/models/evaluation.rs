//! Evaluation outcome models for the Expense Approval Engine.
//!
//! This module contains the [`Decision`] verdict and the [`EvaluationRecord`]
//! envelope that captures everything a result sink needs: the verdict, the
//! ordered decision path, the reason list, and the evaluated expense.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Expense;

/// The final verdict of an evaluation.
///
/// # Example
///
/// ```
/// use expense_engine::models::Decision;
///
/// assert_eq!(serde_json::to_string(&Decision::Approve).unwrap(), "\"APPROVE\"");
/// assert_eq!(Decision::Review.to_string(), "REVIEW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// The claim passed every check and was committed to the receipt ledger.
    Approve,
    /// The claim needs a human look; it was appended to the review queue.
    Review,
    /// The claim was refused; it was appended to the rejection log.
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approve => write!(f, "APPROVE"),
            Decision::Review => write!(f, "REVIEW"),
            Decision::Reject => write!(f, "REJECT"),
        }
    }
}

/// The complete result of evaluating one expense claim.
///
/// The decision path is a human-readable audit log of the named steps the
/// engine walked, in order. The reason list carries the machine-relevant
/// justification strings for the verdict. The two are distinct: the path
/// narrates, the reasons justify.
///
/// # Example
///
/// ```
/// use expense_engine::models::{Decision, EvaluationRecord, Expense, ExpenseCategory};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = EvaluationRecord {
///     evaluation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     decision: Decision::Approve,
///     decision_path: vec!["All checks passed → APPROVE".to_string()],
///     reasons: vec!["Expense automatically approved.".to_string()],
///     expense: Expense {
///         employee_id: "E101".to_string(),
///         expense_type: ExpenseCategory::Food,
///         expense_amount: Decimal::new(1000, 0),
///         monthly_expense_total: Decimal::new(10000, 0),
///         receipt_uploaded: true,
///         receipt_id: Some("R1".to_string()),
///         employee_level: None,
///     },
/// };
/// assert_eq!(record.decision, Decision::Approve);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The final verdict.
    pub decision: Decision,
    /// Ordered, human-readable audit log of evaluation steps.
    pub decision_path: Vec<String>,
    /// Ordered justification strings for the verdict.
    pub reasons: Vec<String>,
    /// The evaluated expense, including the derived `employee_level` when
    /// resolution succeeded.
    pub expense: Expense,
}
