//! Policy configuration types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the policy YAML document. Every field carries a
//! compiled-in default matching the company's standard deployment, so a
//! partial document only needs to name what it overrides.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{EmployeeLevel, ExpenseCategory};

/// The employee level resolution strategy to deploy.
///
/// Exactly one strategy is active per deployment; mixing both is undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverStrategy {
    /// Derive the tier from numeric sub-ranges of the `E<digits>` identifier.
    #[default]
    Range,
    /// Look the identifier up verbatim in the employee directory store.
    Directory,
}

/// Tunables for the frequent-small-claims fraud heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FraudPolicy {
    /// Approved claims strictly below this amount count as small claims.
    pub small_claim_threshold: Decimal,
    /// Number of historical small claims at which an employee is flagged.
    pub flag_count: usize,
}

impl Default for FraudPolicy {
    fn default() -> Self {
        Self {
            small_claim_threshold: Decimal::new(2000, 0),
            flag_count: 5,
        }
    }
}

/// Audit policy knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditPolicy {
    /// Whether a rejection for an unknown employee is persisted to the
    /// rejection log. Disabling restores the older behavior of returning
    /// the verdict without recording it.
    pub record_unknown_employees: bool,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            record_unknown_employees: true,
        }
    }
}

/// The complete spending policy for a deployment.
///
/// Holds the per-tier, per-category limit table, the global monthly ceiling
/// shared by all tiers, the compliance score floor for approval, the fraud
/// heuristic tunables, the resolver strategy, and the audit policy. Treated
/// as an invariant constant for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Maximum per-claim amount by (tier, category). A pair absent from the
    /// table is not claimable at that tier.
    pub limits: HashMap<EmployeeLevel, HashMap<ExpenseCategory, Decimal>>,
    /// Global monthly spending ceiling, shared by all tiers.
    pub monthly_limit: Decimal,
    /// Minimum policy compliance score (percent) required for approval.
    pub minimum_score: Decimal,
    /// Fraud heuristic tunables.
    pub fraud: FraudPolicy,
    /// The employee level resolution strategy.
    pub resolver: ResolverStrategy,
    /// Audit policy knobs.
    pub audit: AuditPolicy,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let mut limits = HashMap::new();
        limits.insert(EmployeeLevel::L1, tier_limits(&TIER_L1_LIMITS));
        limits.insert(EmployeeLevel::L2, tier_limits(&TIER_L2_LIMITS));
        limits.insert(EmployeeLevel::L3, tier_limits(&TIER_L3_LIMITS));

        Self {
            limits,
            monthly_limit: Decimal::new(50_000, 0),
            minimum_score: Decimal::new(60, 0),
            fraud: FraudPolicy::default(),
            resolver: ResolverStrategy::default(),
            audit: AuditPolicy::default(),
        }
    }
}

const TIER_L1_LIMITS: [(ExpenseCategory, i64); 7] = [
    (ExpenseCategory::Food, 1_500),
    (ExpenseCategory::Travel, 8_000),
    (ExpenseCategory::Accommodation, 6_000),
    (ExpenseCategory::Transport, 2_000),
    (ExpenseCategory::OfficeSupplies, 1_000),
    (ExpenseCategory::Training, 5_000),
    (ExpenseCategory::ClientMeeting, 2_500),
];

const TIER_L2_LIMITS: [(ExpenseCategory, i64); 7] = [
    (ExpenseCategory::Food, 2_000),
    (ExpenseCategory::Travel, 10_000),
    (ExpenseCategory::Accommodation, 8_000),
    (ExpenseCategory::Transport, 3_000),
    (ExpenseCategory::OfficeSupplies, 2_000),
    (ExpenseCategory::Training, 10_000),
    (ExpenseCategory::ClientMeeting, 5_000),
];

const TIER_L3_LIMITS: [(ExpenseCategory, i64); 7] = [
    (ExpenseCategory::Food, 3_000),
    (ExpenseCategory::Travel, 15_000),
    (ExpenseCategory::Accommodation, 12_000),
    (ExpenseCategory::Transport, 5_000),
    (ExpenseCategory::OfficeSupplies, 4_000),
    (ExpenseCategory::Training, 20_000),
    (ExpenseCategory::ClientMeeting, 10_000),
];

fn tier_limits(entries: &[(ExpenseCategory, i64)]) -> HashMap<ExpenseCategory, Decimal> {
    entries
        .iter()
        .map(|&(category, amount)| (category, Decimal::new(amount, 0)))
        .collect()
}

impl PolicyConfig {
    /// Returns the per-claim limit for a (tier, category) pair, or `None`
    /// when the category is not claimable at that tier.
    ///
    /// # Example
    ///
    /// ```
    /// use expense_engine::config::PolicyConfig;
    /// use expense_engine::models::{EmployeeLevel, ExpenseCategory};
    /// use rust_decimal::Decimal;
    ///
    /// let policy = PolicyConfig::default();
    /// let limit = policy.limit_for(EmployeeLevel::L2, ExpenseCategory::Travel);
    /// assert_eq!(limit, Some(Decimal::new(10_000, 0)));
    /// ```
    pub fn limit_for(
        &self,
        level: EmployeeLevel,
        category: ExpenseCategory,
    ) -> Option<Decimal> {
        self.limits
            .get(&level)
            .and_then(|tier| tier.get(&category))
            .copied()
    }

    /// Returns true when the (tier, category) pair exists in the limit table.
    pub fn supports(&self, level: EmployeeLevel, category: ExpenseCategory) -> bool {
        self.limit_for(level, category).is_some()
    }
}
