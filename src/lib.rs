//! Expense Approval Engine
//!
//! This crate evaluates business expense claims against tiered employee
//! spending policies and returns one of three verdicts (APPROVE, REVIEW,
//! REJECT) together with an ordered decision path and reason list. Decisions
//! are persisted to JSON-backed stores: approved receipts and expense history
//! in the receipt ledger, flagged claims in the review queue, and refused
//! claims in the rejection log.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod stores;
