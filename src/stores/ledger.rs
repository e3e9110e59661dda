//! The receipt ledger store.
//!
//! The ledger keeps two associated collections: the set of receipt
//! identifiers consumed by approved claims, and the ordered history of
//! approved expense records that the fraud heuristic scans. Both grow only
//! on APPROVE.

use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Persisted receipt ledger state.
///
/// # Example
///
/// ```
/// use expense_engine::stores::ReceiptLedger;
///
/// let ledger = ReceiptLedger::default();
/// assert!(!ledger.is_used("R1"));
/// assert!(ledger.expense_history.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLedger {
    /// Receipt identifiers already consumed by approved claims.
    #[serde(default)]
    pub used_receipts: Vec<String>,
    /// Approved expense records, oldest first.
    #[serde(default)]
    pub expense_history: Vec<Expense>,
}

impl ReceiptLedger {
    /// Returns true when the receipt identifier has already been consumed.
    pub fn is_used(&self, receipt_id: &str) -> bool {
        self.used_receipts.iter().any(|used| used == receipt_id)
    }

    /// Commits an approved claim: consumes its receipt identifier and
    /// appends the record to the expense history.
    pub fn record_approval(&mut self, receipt_id: String, expense: Expense) {
        self.used_receipts.push(receipt_id);
        self.expense_history.push(expense);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use rust_decimal::Decimal;

    fn create_expense(receipt_id: &str) -> Expense {
        Expense {
            employee_id: "E101".to_string(),
            expense_type: ExpenseCategory::Food,
            expense_amount: Decimal::new(1000, 0),
            monthly_expense_total: Decimal::new(5000, 0),
            receipt_uploaded: true,
            receipt_id: Some(receipt_id.to_string()),
            employee_level: None,
        }
    }

    #[test]
    fn test_fresh_ledger_has_no_used_receipts() {
        let ledger = ReceiptLedger::default();
        assert!(!ledger.is_used("R1"));
    }

    #[test]
    fn test_record_approval_consumes_receipt() {
        let mut ledger = ReceiptLedger::default();
        ledger.record_approval("R1".to_string(), create_expense("R1"));

        assert!(ledger.is_used("R1"));
        assert!(!ledger.is_used("R2"));
        assert_eq!(ledger.expense_history.len(), 1);
    }

    #[test]
    fn test_history_preserves_order() {
        let mut ledger = ReceiptLedger::default();
        for i in 1..=3 {
            let id = format!("R{}", i);
            ledger.record_approval(id.clone(), create_expense(&id));
        }

        let ids: Vec<_> = ledger
            .expense_history
            .iter()
            .map(|e| e.receipt_id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn test_deserialize_store_document() {
        let json = r#"{
            "used_receipts": ["R1", "R2"],
            "expense_history": [{
                "employee_id": "E101",
                "expense_type": "food",
                "expense_amount": "1000",
                "monthly_expense_total": "5000",
                "receipt_uploaded": true,
                "receipt_id": "R1",
                "employee_level": "L1"
            }]
        }"#;

        let ledger: ReceiptLedger = serde_json::from_str(json).unwrap();
        assert!(ledger.is_used("R1"));
        assert!(ledger.is_used("R2"));
        assert_eq!(ledger.expense_history.len(), 1);
        assert_eq!(ledger.expense_history[0].employee_id, "E101");
    }

    #[test]
    fn test_deserialize_tolerates_missing_collections() {
        let ledger: ReceiptLedger = serde_json::from_str("{}").unwrap();
        assert!(ledger.used_receipts.is_empty());
        assert!(ledger.expense_history.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut ledger = ReceiptLedger::default();
        ledger.record_approval("R1".to_string(), create_expense("R1"));

        let json = serde_json::to_string(&ledger).unwrap();
        let back: ReceiptLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, back);
    }
}
