//! The approval decision engine.
//!
//! The engine walks a fixed-order chain of validation, fraud-heuristic, and
//! policy-scoring rules, short-circuiting on the first failing rule. Every
//! terminal branch yields a verdict with an ordered decision path and reason
//! list, and commits the claim to the store matching the verdict: the
//! receipt ledger on APPROVE, the review queue on REVIEW, the rejection log
//! on REJECT.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{PolicyConfig, ResolverStrategy};
use crate::error::{EngineError, EngineResult};
use crate::models::{Decision, EvaluationRecord, Expense};
use crate::stores::ExpenseStores;

use super::duplicate::check_duplicate_receipt;
use super::fraud::detect_frequent_small_claims;
use super::level_resolver::{
    DirectoryResolver, LevelResolver, RangeResolver,
};
use super::policy_score::calculate_policy_score;

/// Evaluates expense claims against the spending policy.
///
/// The engine owns its store backend for its lifetime and takes `&mut self`
/// per evaluation, so the duplicate check, the fraud check, and the eventual
/// commit all happen under one exclusive borrow: a checked condition cannot
/// go stale between check and write within a process.
///
/// # Example
///
/// ```
/// use expense_engine::config::PolicyConfig;
/// use expense_engine::evaluation::ApprovalEngine;
/// use expense_engine::models::{Decision, Expense, ExpenseCategory};
/// use expense_engine::stores::MemoryStores;
/// use rust_decimal::Decimal;
///
/// let mut engine =
///     ApprovalEngine::with_range_resolver(MemoryStores::default(), PolicyConfig::default());
///
/// let record = engine.evaluate(Expense {
///     employee_id: "E101".to_string(),
///     expense_type: ExpenseCategory::Food,
///     expense_amount: Decimal::new(1000, 0),
///     monthly_expense_total: Decimal::new(10_000, 0),
///     receipt_uploaded: true,
///     receipt_id: Some("R1".to_string()),
///     employee_level: None,
/// })?;
///
/// assert_eq!(record.decision, Decision::Approve);
/// # Ok::<(), expense_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct ApprovalEngine<S, R> {
    stores: S,
    resolver: R,
    policy: PolicyConfig,
}

impl<S: ExpenseStores> ApprovalEngine<S, RangeResolver> {
    /// Creates an engine using range-derived level resolution, the default
    /// strategy.
    pub fn with_range_resolver(stores: S, policy: PolicyConfig) -> Self {
        Self::new(stores, RangeResolver, policy)
    }
}

impl<S: ExpenseStores> ApprovalEngine<S, DirectoryResolver> {
    /// Creates an engine using directory-backed level resolution.
    ///
    /// Takes the directory snapshot from the store backend at construction;
    /// the directory is read-only reference data for the engine.
    pub fn with_directory_resolver(stores: S, policy: PolicyConfig) -> EngineResult<Self> {
        let directory = stores.load_directory()?;
        Ok(Self::new(stores, DirectoryResolver::new(directory), policy))
    }
}

impl<S: ExpenseStores> ApprovalEngine<S, Box<dyn LevelResolver>> {
    /// Creates an engine with the resolver strategy named by the policy.
    pub fn from_policy(stores: S, policy: PolicyConfig) -> EngineResult<Self> {
        let resolver: Box<dyn LevelResolver> = match policy.resolver {
            ResolverStrategy::Range => Box::new(RangeResolver),
            ResolverStrategy::Directory => {
                Box::new(DirectoryResolver::new(stores.load_directory()?))
            }
        };
        Ok(Self::new(stores, resolver, policy))
    }
}

impl<S: ExpenseStores, R: LevelResolver> ApprovalEngine<S, R> {
    /// Creates an engine from its parts.
    pub fn new(stores: S, resolver: R, policy: PolicyConfig) -> Self {
        Self {
            stores,
            resolver,
            policy,
        }
    }

    /// Returns the store backend.
    pub fn stores(&self) -> &S {
        &self.stores
    }

    /// Consumes the engine, returning the store backend.
    pub fn into_stores(self) -> S {
        self.stores
    }

    /// Returns the active spending policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Evaluates one expense claim to a verdict.
    ///
    /// Rules run in fixed order and the first failing rule terminates the
    /// evaluation; no later rule is consulted. The claim is committed to the
    /// store matching the verdict before the record is returned, and each
    /// store write is all-or-nothing for the call.
    ///
    /// Returns an error only for infrastructure failures (store I/O) or an
    /// expense that violates the intake contract; REJECT and REVIEW are
    /// normal outcomes, not errors.
    pub fn evaluate(&mut self, mut expense: Expense) -> EngineResult<EvaluationRecord> {
        expense.validate()?;

        let mut decision_path: Vec<String> = Vec::new();
        let mut reasons: Vec<String> = Vec::new();

        // Employee validation.
        let Some(level) = self.resolver.resolve(&expense.employee_id) else {
            warn!(employee_id = %expense.employee_id, "unknown employee id");
            decision_path.push("Employee ID not recognized → REJECT".to_string());
            reasons.push("Employee ID invalid or outside company range.".to_string());
            if self.policy.audit.record_unknown_employees {
                self.commit_rejection(&expense, &reasons)?;
            }
            return Ok(self.finish(Decision::Reject, decision_path, reasons, expense));
        };

        expense.employee_level = Some(level);
        decision_path.push(format!("Employee level detected as {}", level));

        // Amount validation.
        if expense.expense_amount <= Decimal::ZERO {
            decision_path.push("Expense amount not positive → REJECT".to_string());
            reasons.push("Expense amount must be positive.".to_string());
            self.commit_rejection(&expense, &reasons)?;
            return Ok(self.finish(Decision::Reject, decision_path, reasons, expense));
        }

        // Category validation.
        if !self.policy.supports(level, expense.expense_type) {
            decision_path.push("Unsupported expense category → REJECT".to_string());
            reasons.push("Unsupported expense category.".to_string());
            self.commit_rejection(&expense, &reasons)?;
            return Ok(self.finish(Decision::Reject, decision_path, reasons, expense));
        }

        // One ledger snapshot feeds the duplicate check, the fraud check,
        // and the APPROVE commit below.
        let mut ledger = self.stores.load_ledger()?;

        // Duplicate receipt detection. Only an uploaded receipt is checked;
        // a missing receipt is handled by the mandatory-receipt rule below.
        if expense.receipt_uploaded {
            if let Some(receipt_id) = expense.receipt_id.as_deref() {
                if check_duplicate_receipt(&ledger, receipt_id).duplicate {
                    decision_path.push("Duplicate receipt detected → REJECT".to_string());
                    reasons.push("Receipt already used previously.".to_string());
                    self.commit_rejection(&expense, &reasons)?;
                    return Ok(self.finish(Decision::Reject, decision_path, reasons, expense));
                }
                decision_path.push("Receipt ID unique → Continue".to_string());
            }
        }

        // Fraud detection. Terminal: a flagged employee goes to review
        // without policy scoring.
        let fraud = detect_frequent_small_claims(
            &ledger.expense_history,
            &expense.employee_id,
            self.policy.fraud.small_claim_threshold,
            self.policy.fraud.flag_count,
        );
        if fraud.flagged {
            decision_path.push("Frequent small claims detected → REVIEW".to_string());
            reasons.push("Suspicious frequent small expense pattern.".to_string());
            self.commit_review(&expense, &reasons)?;
            return Ok(self.finish(Decision::Review, decision_path, reasons, expense));
        }

        // Policy compliance score, recorded in the trace regardless of the
        // eventual outcome.
        let score = calculate_policy_score(&expense, level, &self.policy);
        decision_path.push(format!(
            "Policy compliance calculated = {}%",
            score.score.normalize()
        ));

        // Receipt presence.
        if !expense.receipt_uploaded {
            decision_path.push("Receipt missing → REJECT".to_string());
            reasons.push("Receipt is mandatory.".to_string());
            self.commit_rejection(&expense, &reasons)?;
            return Ok(self.finish(Decision::Reject, decision_path, reasons, expense));
        }
        decision_path.push("Receipt uploaded → Continue".to_string());

        // Policy threshold.
        if score.score < self.policy.minimum_score {
            decision_path.push("Policy compliance low → REJECT".to_string());
            reasons.push("Expense violates company policy.".to_string());
            self.commit_rejection(&expense, &reasons)?;
            return Ok(self.finish(Decision::Reject, decision_path, reasons, expense));
        }
        decision_path.push("Policy compliance acceptable → Continue".to_string());

        // Monthly ceiling.
        if expense.monthly_expense_total > self.policy.monthly_limit {
            decision_path.push("Monthly expense limit exceeded → REVIEW".to_string());
            reasons.push("Monthly expense exceeds allowed limit.".to_string());
            self.commit_review(&expense, &reasons)?;
            return Ok(self.finish(Decision::Review, decision_path, reasons, expense));
        }
        decision_path.push("Monthly expenses within limit → Continue".to_string());

        // Category limit.
        let limit = self
            .policy
            .limit_for(level, expense.expense_type)
            .unwrap_or(Decimal::ZERO);
        if expense.expense_amount > limit {
            decision_path.push("Expense exceeds category limit → REVIEW".to_string());
            reasons.push("Expense exceeds allowed limit for employee level.".to_string());
            self.commit_review(&expense, &reasons)?;
            return Ok(self.finish(Decision::Review, decision_path, reasons, expense));
        }

        // Final approval: consume the receipt and remember the expense.
        let receipt_id =
            expense
                .receipt_id
                .clone()
                .ok_or_else(|| EngineError::InvalidExpense {
                    field: "receipt_id".to_string(),
                    message: "required when a receipt is uploaded".to_string(),
                })?;
        ledger.record_approval(receipt_id, expense.clone());
        self.stores.save_ledger(&ledger)?;

        decision_path.push("All checks passed → APPROVE".to_string());
        reasons.push("Expense automatically approved.".to_string());
        Ok(self.finish(Decision::Approve, decision_path, reasons, expense))
    }

    fn commit_rejection(&mut self, expense: &Expense, reasons: &[String]) -> EngineResult<()> {
        let mut log = self.stores.load_rejection_log()?;
        log.push(expense.clone(), reasons.to_vec());
        self.stores.save_rejection_log(&log)
    }

    fn commit_review(&mut self, expense: &Expense, reasons: &[String]) -> EngineResult<()> {
        let mut queue = self.stores.load_review_queue()?;
        queue.push(expense.clone(), reasons.to_vec());
        self.stores.save_review_queue(&queue)
    }

    fn finish(
        &self,
        decision: Decision,
        decision_path: Vec<String>,
        reasons: Vec<String>,
        expense: Expense,
    ) -> EvaluationRecord {
        let evaluation_id = Uuid::new_v4();
        info!(
            evaluation_id = %evaluation_id,
            employee_id = %expense.employee_id,
            decision = %decision,
            steps = decision_path.len(),
            "evaluation complete"
        );

        EvaluationRecord {
            evaluation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            decision,
            decision_path,
            reasons,
            expense,
        }
    }
}
