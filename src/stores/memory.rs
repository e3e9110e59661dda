//! In-memory store implementation.
//!
//! Holds the four collections directly, with no persistence. Used by tests
//! and by embedders that manage durability themselves. Loads hand out
//! snapshots (clones); saves replace the held state, mirroring the
//! load-mutate-commit cycle of the file backend.

use crate::error::EngineResult;

use super::directory::EmployeeDirectory;
use super::ledger::ReceiptLedger;
use super::records::{RejectionLog, ReviewQueue};
use super::ExpenseStores;

/// Memory-resident store backend.
///
/// # Example
///
/// ```
/// use expense_engine::stores::{ExpenseStores, MemoryStores};
///
/// let stores = MemoryStores::default();
/// assert!(stores.load_ledger().unwrap().used_receipts.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStores {
    ledger: ReceiptLedger,
    reviews: ReviewQueue,
    rejections: RejectionLog,
    directory: EmployeeDirectory,
}

impl MemoryStores {
    /// Creates an empty backend with the given employee directory.
    pub fn with_directory(directory: EmployeeDirectory) -> Self {
        Self {
            directory,
            ..Self::default()
        }
    }

    /// Direct access to the held ledger, for assertions.
    pub fn ledger(&self) -> &ReceiptLedger {
        &self.ledger
    }

    /// Direct access to the held review queue, for assertions.
    pub fn reviews(&self) -> &ReviewQueue {
        &self.reviews
    }

    /// Direct access to the held rejection log, for assertions.
    pub fn rejections(&self) -> &RejectionLog {
        &self.rejections
    }
}

impl ExpenseStores for MemoryStores {
    fn load_ledger(&self) -> EngineResult<ReceiptLedger> {
        Ok(self.ledger.clone())
    }

    fn save_ledger(&mut self, ledger: &ReceiptLedger) -> EngineResult<()> {
        self.ledger = ledger.clone();
        Ok(())
    }

    fn load_review_queue(&self) -> EngineResult<ReviewQueue> {
        Ok(self.reviews.clone())
    }

    fn save_review_queue(&mut self, queue: &ReviewQueue) -> EngineResult<()> {
        self.reviews = queue.clone();
        Ok(())
    }

    fn load_rejection_log(&self) -> EngineResult<RejectionLog> {
        Ok(self.rejections.clone())
    }

    fn save_rejection_log(&mut self, log: &RejectionLog) -> EngineResult<()> {
        self.rejections = log.clone();
        Ok(())
    }

    fn load_directory(&self) -> EngineResult<EmployeeDirectory> {
        Ok(self.directory.clone())
    }
}
