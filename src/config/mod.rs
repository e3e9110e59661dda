//! Policy configuration for the Expense Approval Engine.
//!
//! The spending policy (limit table, ceilings, thresholds, resolver
//! strategy, audit knobs) is configuration data, not entity state: the
//! engine treats it as an invariant constant for a given deployment.

mod loader;
mod types;

pub use types::{AuditPolicy, FraudPolicy, PolicyConfig, ResolverStrategy};
