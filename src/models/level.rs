//! Employee policy tier model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The policy tier of an employee, determining spending limits.
///
/// Tiers are ordered: a higher tier generally carries higher per-category
/// limits, though the limit table is free to say otherwise for individual
/// categories.
///
/// # Example
///
/// ```
/// use expense_engine::models::EmployeeLevel;
///
/// let level = EmployeeLevel::L2;
/// assert_eq!(level.to_string(), "L2");
/// assert_eq!(serde_json::to_string(&level).unwrap(), "\"L2\"");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EmployeeLevel {
    /// Entry tier with the lowest spending limits.
    L1,
    /// Intermediate tier.
    L2,
    /// Senior tier with the highest spending limits.
    L3,
}

impl fmt::Display for EmployeeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeLevel::L1 => write!(f, "L1"),
            EmployeeLevel::L2 => write!(f, "L2"),
            EmployeeLevel::L3 => write!(f, "L3"),
        }
    }
}
