//! The employee directory store.
//!
//! Externally maintained reference data mapping employee identifiers to
//! policy tiers. Read-only to the engine; only the directory-backed resolver
//! strategy consults it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::EmployeeLevel;

/// Persisted employee directory state.
///
/// # Example
///
/// ```
/// use expense_engine::stores::EmployeeDirectory;
/// use expense_engine::models::EmployeeLevel;
///
/// let json = r#"{"employees": {"E900": "L2"}}"#;
/// let directory: EmployeeDirectory = serde_json::from_str(json).unwrap();
/// assert_eq!(directory.level_of("E900"), Some(EmployeeLevel::L2));
/// assert_eq!(directory.level_of("E901"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    /// Employee identifier to tier.
    #[serde(default)]
    pub employees: HashMap<String, EmployeeLevel>,
}

impl EmployeeDirectory {
    /// Looks up an employee's tier by verbatim identifier.
    pub fn level_of(&self, employee_id: &str) -> Option<EmployeeLevel> {
        self.employees.get(employee_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_verbatim() {
        let mut directory = EmployeeDirectory::default();
        directory
            .employees
            .insert("E900".to_string(), EmployeeLevel::L1);

        assert_eq!(directory.level_of("E900"), Some(EmployeeLevel::L1));
        // No normalization: case and whitespace matter.
        assert_eq!(directory.level_of("e900"), None);
        assert_eq!(directory.level_of("E900 "), None);
    }

    #[test]
    fn test_deserialize_tolerates_missing_collection() {
        let directory: EmployeeDirectory = serde_json::from_str("{}").unwrap();
        assert!(directory.employees.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut directory = EmployeeDirectory::default();
        directory
            .employees
            .insert("E900".to_string(), EmployeeLevel::L3);

        let json = serde_json::to_string(&directory).unwrap();
        let back: EmployeeDirectory = serde_json::from_str(&json).unwrap();
        assert_eq!(directory, back);
    }
}
