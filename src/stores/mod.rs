//! Persisted stores for the Expense Approval Engine.
//!
//! Four record collections back the engine: the employee directory
//! (read-only reference data), the receipt ledger (used receipts plus
//! approved expense history), the review queue, and the rejection log.
//! The engine reaches them through the [`ExpenseStores`] capability trait,
//! so evaluation logic is testable without a file system.

mod directory;
mod file;
mod ledger;
mod memory;
mod records;

pub use directory::EmployeeDirectory;
pub use file::{
    EMPLOYEES_FILE, FileStores, RECEIPTS_FILE, REJECTIONS_FILE, REVIEWS_FILE,
};
pub use ledger::ReceiptLedger;
pub use memory::MemoryStores;
pub use records::{FlaggedExpense, RejectionLog, ReviewQueue};

use crate::error::EngineResult;

/// Capability interface over the four persisted stores.
///
/// Loads hand out snapshots; saves commit a mutated snapshot back. The
/// engine takes the backend by `&mut self` for the whole of an evaluation,
/// so a load, the checks informed by it, and the eventual commit happen
/// under one exclusive borrow and cannot interleave with another
/// evaluation's writes.
pub trait ExpenseStores {
    /// Loads the receipt ledger snapshot.
    fn load_ledger(&self) -> EngineResult<ReceiptLedger>;

    /// Commits a mutated receipt ledger.
    fn save_ledger(&mut self, ledger: &ReceiptLedger) -> EngineResult<()>;

    /// Loads the review queue snapshot.
    fn load_review_queue(&self) -> EngineResult<ReviewQueue>;

    /// Commits a mutated review queue.
    fn save_review_queue(&mut self, queue: &ReviewQueue) -> EngineResult<()>;

    /// Loads the rejection log snapshot.
    fn load_rejection_log(&self) -> EngineResult<RejectionLog>;

    /// Commits a mutated rejection log.
    fn save_rejection_log(&mut self, log: &RejectionLog) -> EngineResult<()>;

    /// Loads the employee directory. The engine never writes it.
    fn load_directory(&self) -> EngineResult<EmployeeDirectory>;
}
