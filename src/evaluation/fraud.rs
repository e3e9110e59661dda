//! Frequent-small-claims fraud heuristic.
//!
//! An employee who accumulates many approved claims under the small-claim
//! threshold fits a known expense-splitting pattern: keeping individual
//! amounts low enough to avoid scrutiny. The heuristic is a pure scan over
//! the approved-expense history; evaluation volume is low, so the linear
//! pass is acceptable.

use rust_decimal::Decimal;

use crate::models::Expense;

/// The result of scanning an employee's history for small-claim patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FraudCheck {
    /// Number of approved claims strictly below the small-claim threshold.
    pub small_claim_count: usize,
    /// True when the count reached the flag count.
    pub flagged: bool,
}

/// Scans the approved-expense history for an employee's small claims.
///
/// A claim counts when it belongs to the employee and its amount is
/// strictly below `small_claim_threshold`. The employee is flagged when the
/// count reaches `flag_count`.
///
/// # Example
///
/// ```
/// use expense_engine::evaluation::detect_frequent_small_claims;
/// use rust_decimal::Decimal;
///
/// let history = vec![];
/// let check = detect_frequent_small_claims(&history, "E101", Decimal::new(2000, 0), 5);
/// assert_eq!(check.small_claim_count, 0);
/// assert!(!check.flagged);
/// ```
pub fn detect_frequent_small_claims(
    history: &[Expense],
    employee_id: &str,
    small_claim_threshold: Decimal,
    flag_count: usize,
) -> FraudCheck {
    let small_claim_count = history
        .iter()
        .filter(|e| e.employee_id == employee_id && e.expense_amount < small_claim_threshold)
        .count();

    FraudCheck {
        small_claim_count,
        flagged: small_claim_count >= flag_count,
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

    fn create_claim(employee_id: &str, amount: &str) -> Expense {
        Expense {
            employee_id: employee_id.to_string(),
            expense_type: ExpenseCategory::Food,
            expense_amount: dec(amount),
            monthly_expense_total: dec(amount),
            receipt_uploaded: true,
            receipt_id: Some("R".to_string()),
            employee_level: None,
        }
    }

    fn small_claims(employee_id: &str, count: usize) -> Vec<Expense> {
        (0..count).map(|_| create_claim(employee_id, "500")).collect()
    }

    #[test]
    fn test_empty_history_is_clean() {
        let check = detect_frequent_small_claims(&[], "E101", dec("2000"), 5);
        assert_eq!(check.small_claim_count, 0);
        assert!(!check.flagged);
    }

    #[test]
    fn test_four_small_claims_not_flagged() {
        let history = small_claims("E101", 4);
        let check = detect_frequent_small_claims(&history, "E101", dec("2000"), 5);

        assert_eq!(check.small_claim_count, 4);
        assert!(!check.flagged);
    }

    #[test]
    fn test_exactly_five_small_claims_flagged() {
        let history = small_claims("E101", 5);
        let check = detect_frequent_small_claims(&history, "E101", dec("2000"), 5);

        assert_eq!(check.small_claim_count, 5);
        assert!(check.flagged);
    }

    #[test]
    fn test_other_employees_claims_do_not_count() {
        let mut history = small_claims("E102", 10);
        history.extend(small_claims("E101", 2));

        let check = detect_frequent_small_claims(&history, "E101", dec("2000"), 5);
        assert_eq!(check.small_claim_count, 2);
        assert!(!check.flagged);
    }

    #[test]
    fn test_threshold_is_strict() {
        // A claim exactly at the threshold is not a small claim.
        let history = vec![
            create_claim("E101", "2000"),
            create_claim("E101", "1999.99"),
        ];

        let check = detect_frequent_small_claims(&history, "E101", dec("2000"), 5);
        assert_eq!(check.small_claim_count, 1);
    }

    #[test]
    fn test_large_claims_do_not_count() {
        let history = vec![
            create_claim("E101", "5000"),
            create_claim("E101", "12000"),
            create_claim("E101", "300"),
        ];

        let check = detect_frequent_small_claims(&history, "E101", dec("2000"), 5);
        assert_eq!(check.small_claim_count, 1);
        assert!(!check.flagged);
    }

    #[test]
    fn test_custom_flag_count() {
        let history = small_claims("E101", 3);

        let check = detect_frequent_small_claims(&history, "E101", dec("2000"), 3);
        assert!(check.flagged);
    }
}
