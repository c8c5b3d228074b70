//! Core statement-builder engine for IAM policy statements:
//! - Chainable accumulation of actions, resources and condition clauses
//! - ARN template resolution with partition/region/account defaults
//! - Deterministic rendering to the IAM JSON wire format
//!
//! The engine is a pure in-memory accumulator: it performs no I/O and no
//! validation of catalog data. Correctness of action names and condition
//! keys is the responsibility of the catalog layer feeding it.

mod access_level;
mod arn;
mod condition;
mod effect;
mod policy;
mod record;
mod statement;

// Re-exports for a small, focused public API
pub use access_level::{AccessLevel, AccessLevelList};
pub use arn::ArnResolver;
pub use condition::{Condition, ConditionValues, Operator};
pub use effect::Effect;
pub use policy::{PolicyDocument, POLICY_VERSION};
pub use record::{ConditionMap, PolicyRecord, ScalarOrList, StatementRecord};
pub use statement::PolicyStatement;
