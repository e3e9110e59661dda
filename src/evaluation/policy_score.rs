//! Policy compliance scoring.
//!
//! The score is the percentage of four independent checks a claim passes:
//! receipt uploaded, category claimable at the tier, amount within the
//! tier/category limit, and monthly total within the global ceiling. Four
//! equally weighted checks make the score a multiple of 25. The function is
//! pure and total: it never fails, it only grades.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{EmployeeLevel, Expense};

/// The graded outcome of the four compliance checks.
///
/// Carries the individual verdicts alongside the aggregate score so a
/// caller can see which checks failed without re-deriving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyScore {
    /// Check 1: a receipt was uploaded.
    pub receipt_uploaded: bool,
    /// Check 2: the (tier, category) pair exists in the limit table.
    pub category_supported: bool,
    /// Check 3: the amount is within the tier/category limit. An absent
    /// pair means an effective limit of 0, so this fails too.
    pub within_category_limit: bool,
    /// Check 4: the monthly total is within the global ceiling.
    pub within_monthly_limit: bool,
    /// Percentage of checks passed: 0, 25, 50, 75, or 100.
    pub score: Decimal,
}

impl PolicyScore {
    /// Number of checks that passed, 0 through 4.
    pub fn passed_checks(&self) -> u32 {
        [
            self.receipt_uploaded,
            self.category_supported,
            self.within_category_limit,
            self.within_monthly_limit,
        ]
        .into_iter()
        .filter(|&passed| passed)
        .count() as u32
    }
}

/// Grades an expense with a resolved tier against the spending policy.
///
/// # Example
///
/// ```
/// use expense_engine::config::PolicyConfig;
/// use expense_engine::evaluation::calculate_policy_score;
/// use expense_engine::models::{EmployeeLevel, Expense, ExpenseCategory};
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// let expense = Expense {
///     employee_id: "E101".to_string(),
///     expense_type: ExpenseCategory::Food,
///     expense_amount: Decimal::new(1000, 0),
///     monthly_expense_total: Decimal::new(10_000, 0),
///     receipt_uploaded: true,
///     receipt_id: Some("R1".to_string()),
///     employee_level: None,
/// };
///
/// let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
/// assert_eq!(score.score, Decimal::new(100, 0));
/// ```
pub fn calculate_policy_score(
    expense: &Expense,
    level: EmployeeLevel,
    policy: &PolicyConfig,
) -> PolicyScore {
    let limit = policy.limit_for(level, expense.expense_type);

    let receipt_uploaded = expense.receipt_uploaded;
    let category_supported = limit.is_some();
    let within_category_limit =
        expense.expense_amount <= limit.unwrap_or(Decimal::ZERO);
    let within_monthly_limit = expense.monthly_expense_total <= policy.monthly_limit;

    let passed = [
        receipt_uploaded,
        category_supported,
        within_category_limit,
        within_monthly_limit,
    ]
    .into_iter()
    .filter(|&p| p)
    .count() as i64;

    PolicyScore {
        receipt_uploaded,
        category_supported,
        within_category_limit,
        within_monthly_limit,
        score: Decimal::from(passed * 25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_expense(amount: &str, monthly: &str, receipt: bool) -> Expense {
        Expense {
            employee_id: "E101".to_string(),
            expense_type: ExpenseCategory::Food,
            expense_amount: dec(amount),
            monthly_expense_total: dec(monthly),
            receipt_uploaded: receipt,
            receipt_id: receipt.then(|| "R1".to_string()),
            employee_level: None,
        }
    }

    #[test]
    fn test_fully_compliant_claim_scores_100() {
        let policy = PolicyConfig::default();
        let expense = create_expense("1000", "10000", true);

        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
        assert_eq!(score.score, dec("100"));
        assert_eq!(score.passed_checks(), 4);
    }

    #[test]
    fn test_missing_receipt_costs_25_points() {
        let policy = PolicyConfig::default();
        let expense = create_expense("1000", "10000", false);

        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
        assert!(!score.receipt_uploaded);
        assert_eq!(score.score, dec("75"));
    }

    #[test]
    fn test_amount_over_limit_costs_25_points() {
        let policy = PolicyConfig::default();
        // L1 food limit is 1500.
        let expense = create_expense("1501", "10000", true);

        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
        assert!(score.category_supported);
        assert!(!score.within_category_limit);
        assert_eq!(score.score, dec("75"));
    }

    #[test]
    fn test_amount_exactly_at_limit_passes() {
        let policy = PolicyConfig::default();
        let expense = create_expense("1500", "10000", true);

        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
        assert!(score.within_category_limit);
        assert_eq!(score.score, dec("100"));
    }

    #[test]
    fn test_monthly_total_over_ceiling_costs_25_points() {
        let policy = PolicyConfig::default();
        let expense = create_expense("1000", "50001", true);

        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
        assert!(!score.within_monthly_limit);
        assert_eq!(score.score, dec("75"));
    }

    #[test]
    fn test_monthly_total_exactly_at_ceiling_passes() {
        let policy = PolicyConfig::default();
        let expense = create_expense("1000", "50000", true);

        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
        assert!(score.within_monthly_limit);
    }

    #[test]
    fn test_unsupported_category_fails_two_checks() {
        let mut policy = PolicyConfig::default();
        policy
            .limits
            .get_mut(&EmployeeLevel::L1)
            .unwrap()
            .remove(&ExpenseCategory::Food);

        let expense = create_expense("1000", "10000", true);
        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);

        // The absent pair fails the support check, and the effective limit
        // of 0 fails the amount check with it.
        assert!(!score.category_supported);
        assert!(!score.within_category_limit);
        assert_eq!(score.score, dec("50"));
    }

    #[test]
    fn test_everything_failing_scores_0() {
        let mut policy = PolicyConfig::default();
        policy
            .limits
            .get_mut(&EmployeeLevel::L1)
            .unwrap()
            .remove(&ExpenseCategory::Food);

        let expense = create_expense("1000", "99999", false);
        let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);

        assert_eq!(score.score, dec("0"));
        assert_eq!(score.passed_checks(), 0);
    }

    #[test]
    fn test_score_is_passed_checks_times_25() {
        let policy = PolicyConfig::default();

        for (amount, monthly, receipt) in [
            ("1000", "10000", true),
            ("1501", "10000", true),
            ("1501", "50001", true),
            ("1501", "50001", false),
        ] {
            let expense = create_expense(amount, monthly, receipt);
            let score = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
            assert_eq!(score.score, Decimal::from(score.passed_checks() * 25));
        }
    }

    #[test]
    fn test_higher_tier_limit_applies() {
        let policy = PolicyConfig::default();
        // 2500 exceeds the L1 food limit but not the L3 one.
        let expense = create_expense("2500", "10000", true);

        let l1 = calculate_policy_score(&expense, EmployeeLevel::L1, &policy);
        let l3 = calculate_policy_score(&expense, EmployeeLevel::L3, &policy);

        assert!(!l1.within_category_limit);
        assert!(l3.within_category_limit);
    }
}
