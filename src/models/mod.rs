//! Core data models for the Expense Approval Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod evaluation;
mod expense;
mod level;

pub use evaluation::{Decision, EvaluationRecord};
pub use expense::{Expense, ExpenseCategory};
pub use level::EmployeeLevel;
