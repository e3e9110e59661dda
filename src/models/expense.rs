//! Expense claim model and related types.
//!
//! This module defines the [`Expense`] record submitted for evaluation and
//! the closed [`ExpenseCategory`] set it draws from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};

use super::EmployeeLevel;

/// The category of an expense claim.
///
/// The category set is closed: anything outside it fails to deserialize and
/// never reaches the decision engine. Whether a category is claimable at a
/// given tier is a separate question answered by the policy limit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Meals and catering.
    Food,
    /// Flights, trains, and long-distance travel.
    Travel,
    /// Hotels and other lodging.
    Accommodation,
    /// Local transport: taxis, rideshare, mileage.
    Transport,
    /// Stationery and small equipment.
    OfficeSupplies,
    /// Courses, certifications, and conference fees.
    Training,
    /// Entertainment of clients and prospects.
    ClientMeeting,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::OfficeSupplies => "office_supplies",
            ExpenseCategory::Training => "training",
            ExpenseCategory::ClientMeeting => "client_meeting",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(ExpenseCategory::Food),
            "travel" => Ok(ExpenseCategory::Travel),
            "accommodation" => Ok(ExpenseCategory::Accommodation),
            "transport" => Ok(ExpenseCategory::Transport),
            "office_supplies" => Ok(ExpenseCategory::OfficeSupplies),
            "training" => Ok(ExpenseCategory::Training),
            "client_meeting" => Ok(ExpenseCategory::ClientMeeting),
            other => Err(EngineError::InvalidExpense {
                field: "expense_type".to_string(),
                message: format!("unknown category '{}'", other),
            }),
        }
    }
}

/// A submitted expense claim.
///
/// The record is mutated in place during evaluation: `employee_level` starts
/// absent and is set by the engine once the employee's tier is resolved. It
/// is never supplied by the caller and never read before resolution.
///
/// # Example
///
/// ```
/// use expense_engine::models::{Expense, ExpenseCategory};
/// use rust_decimal::Decimal;
///
/// let expense = Expense {
///     employee_id: "E101".to_string(),
///     expense_type: ExpenseCategory::Food,
///     expense_amount: Decimal::new(1000, 0),
///     monthly_expense_total: Decimal::new(10000, 0),
///     receipt_uploaded: true,
///     receipt_id: Some("R1".to_string()),
///     employee_level: None,
/// };
/// assert!(expense.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The claiming employee's identifier (expected pattern `E<digits>`).
    pub employee_id: String,
    /// The expense category.
    pub expense_type: ExpenseCategory,
    /// The claimed amount.
    pub expense_amount: Decimal,
    /// The employee's cumulative monthly spend including this claim.
    pub monthly_expense_total: Decimal,
    /// Whether a receipt was uploaded with the claim.
    pub receipt_uploaded: bool,
    /// The receipt identifier; required and non-empty when
    /// `receipt_uploaded` is true, absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    /// The employee's policy tier, derived by the engine after resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_level: Option<EmployeeLevel>,
}

impl Expense {
    /// Checks the intake contract for a submitted claim.
    ///
    /// Enforced here, before any rule runs:
    /// - `employee_id` must be non-empty,
    /// - `receipt_id` must be present and non-empty exactly when
    ///   `receipt_uploaded` is true,
    /// - `monthly_expense_total` must be non-negative,
    /// - `employee_level` must not be supplied by the caller.
    ///
    /// A violation is an [`EngineError::InvalidExpense`], not a policy
    /// rejection; it carries no decision and touches no store.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.trim().is_empty() {
            return Err(EngineError::InvalidExpense {
                field: "employee_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        match (&self.receipt_id, self.receipt_uploaded) {
            (Some(id), true) if id.trim().is_empty() => {
                return Err(EngineError::InvalidExpense {
                    field: "receipt_id".to_string(),
                    message: "must not be empty when a receipt is uploaded".to_string(),
                });
            }
            (None, true) => {
                return Err(EngineError::InvalidExpense {
                    field: "receipt_id".to_string(),
                    message: "required when a receipt is uploaded".to_string(),
                });
            }
            (Some(_), false) => {
                return Err(EngineError::InvalidExpense {
                    field: "receipt_id".to_string(),
                    message: "must be absent when no receipt is uploaded".to_string(),
                });
            }
            _ => {}
        }

        if self.monthly_expense_total < Decimal::ZERO {
            return Err(EngineError::InvalidExpense {
                field: "monthly_expense_total".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if self.employee_level.is_some() {
            return Err(EngineError::InvalidExpense {
                field: "employee_level".to_string(),
                message: "is derived by the engine and must not be supplied".to_string(),
            });
        }

        Ok(())
    }
}
