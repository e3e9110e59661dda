//! Duplicate receipt detection.
//!
//! A receipt identifier may fund at most one approved claim. This check is a
//! pure read over the receipt ledger's used-receipt set; the caller enforces
//! the upload-then-check ordering, so an absent receipt id is never checked.

use crate::stores::ReceiptLedger;

/// The result of checking a receipt identifier for reuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCheck {
    /// The identifier that was checked.
    pub receipt_id: String,
    /// True when the identifier was already consumed by an approved claim.
    pub duplicate: bool,
}

/// Checks whether a receipt identifier has already been consumed.
///
/// # Example
///
/// ```
/// use expense_engine::evaluation::check_duplicate_receipt;
/// use expense_engine::stores::ReceiptLedger;
///
/// let ledger = ReceiptLedger {
///     used_receipts: vec!["R1".to_string()],
///     expense_history: vec![],
/// };
///
/// assert!(check_duplicate_receipt(&ledger, "R1").duplicate);
/// assert!(!check_duplicate_receipt(&ledger, "R2").duplicate);
/// ```
pub fn check_duplicate_receipt(ledger: &ReceiptLedger, receipt_id: &str) -> DuplicateCheck {
    DuplicateCheck {
        receipt_id: receipt_id.to_string(),
        duplicate: ledger.is_used(receipt_id),
    }
}
