//! File-backed store implementation.
//!
//! Each store is one JSON document inside a data directory. An absent file
//! is an empty collection, not an error; an unreadable or unparsable file is
//! fatal for the evaluation that touched it.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::directory::EmployeeDirectory;
use super::ledger::ReceiptLedger;
use super::records::{RejectionLog, ReviewQueue};
use super::ExpenseStores;

/// File name of the receipt ledger document.
pub const RECEIPTS_FILE: &str = "receipts.json";
/// File name of the review queue document.
pub const REVIEWS_FILE: &str = "reviews.json";
/// File name of the rejection log document.
pub const REJECTIONS_FILE: &str = "rejections.json";
/// File name of the employee directory document.
pub const EMPLOYEES_FILE: &str = "employees.json";

/// JSON-file store backend rooted at a data directory.
///
/// # Example
///
/// ```no_run
/// use expense_engine::stores::{ExpenseStores, FileStores};
///
/// let stores = FileStores::new("./data");
/// let ledger = stores.load_ledger()?;
/// println!("{} receipts consumed", ledger.used_receipts.len());
/// # Ok::<(), expense_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStores {
    data_dir: PathBuf,
}

impl FileStores {
    /// Creates a file store backend rooted at `data_dir`.
    ///
    /// The directory does not have to exist yet; it is created on the first
    /// write.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory this backend reads and writes.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_document<T>(&self, file_name: &str) -> EngineResult<T>
    where
        T: Default + DeserializeOwned,
    {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            return Ok(T::default());
        }

        let path_str = path.display().to_string();
        let content = fs::read_to_string(&path).map_err(|e| EngineError::StoreRead {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::StoreParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn save_document<T: Serialize>(&self, file_name: &str, value: &T) -> EngineResult<()> {
        let path = self.data_dir.join(file_name);
        let path_str = path.display().to_string();

        fs::create_dir_all(&self.data_dir).map_err(|e| EngineError::StoreWrite {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let json =
            serde_json::to_string_pretty(value).map_err(|e| EngineError::StoreWrite {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        fs::write(&path, json).map_err(|e| EngineError::StoreWrite {
            path: path_str,
            message: e.to_string(),
        })
    }
}

impl ExpenseStores for FileStores {
    fn load_ledger(&self) -> EngineResult<ReceiptLedger> {
        self.load_document(RECEIPTS_FILE)
    }

    fn save_ledger(&mut self, ledger: &ReceiptLedger) -> EngineResult<()> {
        self.save_document(RECEIPTS_FILE, ledger)
    }

    fn load_review_queue(&self) -> EngineResult<ReviewQueue> {
        self.load_document(REVIEWS_FILE)
    }

    fn save_review_queue(&mut self, queue: &ReviewQueue) -> EngineResult<()> {
        self.save_document(REVIEWS_FILE, queue)
    }

    fn load_rejection_log(&self) -> EngineResult<RejectionLog> {
        self.load_document(REJECTIONS_FILE)
    }

    fn save_rejection_log(&mut self, log: &RejectionLog) -> EngineResult<()> {
        self.save_document(REJECTIONS_FILE, log)
    }

    fn load_directory(&self) -> EngineResult<EmployeeDirectory> {
        self.load_document(EMPLOYEES_FILE)
    }
}
