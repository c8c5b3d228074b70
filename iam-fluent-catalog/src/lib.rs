//! Data-driven service catalog for the statement builder:
//! - Service definitions (prefix, actions, resource types, condition keys)
//!   embedded as JSON data files and deserialized on first use
//! - A cached loader keyed by service prefix
//! - A generic facade that replaces per-service generated classes with
//!   catalog-driven dispatch
//!
//! The catalog is configuration, not behavior: it supplies the constant
//! strings (action names, ARN templates, condition-key defaults) that the
//! core engine treats as opaque.

mod catalog;
mod embedded;
mod errors;
mod facade;
mod model;

// Re-exports for a small, focused public API
pub use catalog::ServiceCatalog;
pub use errors::{CatalogError, Result};
pub use facade::ServiceStatement;
pub use model::{
    ActionDefinition, ConditionKeyDefinition, ConditionKeyType, ResourceTypeDefinition,
    ServiceDefinition,
};
